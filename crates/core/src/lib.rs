//! Shared scaffolding for the firmware build tools
//!
//! Both `size-gate` and `check-docs` use this crate for:
//! - Logging setup (stderr, verbosity flags)
//! - Optional TOML configuration sections
//! - Terminal styling of result tags

pub mod config;
pub mod logging;
pub mod style;

pub use config::{load_section, ConfigError};
pub use style::{Stream, Style};
