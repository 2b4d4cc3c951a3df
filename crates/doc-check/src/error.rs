//! Checker errors
//!
//! Unresolved references are results, not errors. Everything here means
//! the check itself could not run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocCheckError {
    #[error("Index file not found: {path}")]
    IndexNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] fw_core::ConfigError),
}
