//! Flash-footprint gate for firmware images
//!
//! Measures each ELF artifact with a Berkeley-format sizing tool
//! (`avr-size` by default), sums `text + data`, and compares against a
//! byte budget. The largest size seen is always written to a stamp file
//! once measuring succeeded, so build-system timestamp tracking stays
//! valid on over-limit failures too.

pub mod cli;
pub mod discover;
pub mod error;
pub mod gate;
pub mod measure;
pub mod settings;

pub use discover::discover_artifacts;
pub use error::SizeGateError;
pub use gate::{write_stamp, Gate, GateReport, Verdict};
pub use measure::{parse_size_output, ArtifactSize, SizeProbe, SizeTool};
pub use settings::{resolve_limit, SizeGateConfig, DEFAULT_LIMIT, DEFAULT_TOOL, LIMIT_ENV};
