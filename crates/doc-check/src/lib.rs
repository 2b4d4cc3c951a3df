//! Toctree reference checker for Sphinx documentation
//!
//! Scans reStructuredText pages for `.. toctree::` blocks, collects the
//! documents they list (optionally following them recursively), and
//! reports every entry that doesn't resolve to a file under the docs
//! directory.

pub mod check;
pub mod cli;
pub mod collect;
pub mod error;
pub mod parser;
pub mod resolve;
pub mod settings;

pub use check::{check_references, MissingReference};
pub use collect::{parse_references, ParseOptions, Reference};
pub use error::DocCheckError;
pub use parser::{parse_toctree, TocEntry};
pub use resolve::{resolve, Extensions, Resolution};
pub use settings::{DocsConfig, Settings};
