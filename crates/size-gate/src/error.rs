//! Size gate errors

use std::path::PathBuf;
use thiserror::Error;

/// Everything that stops the gate before a verdict can be reached
///
/// Over-limit artifacts are not errors; they are reported through
/// [`crate::Verdict`].
#[derive(Debug, Error)]
pub enum SizeGateError {
    #[error("failed to run size tool `{tool}` on {artifact}: {source}")]
    ToolSpawn {
        tool: String,
        artifact: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("size tool `{tool}` failed on {artifact} ({status}): {stderr}")]
    ToolFailed {
        tool: String,
        artifact: PathBuf,
        status: String,
        stderr: String,
    },

    #[error("unexpected size tool output for {artifact}: {reason}")]
    MalformedOutput { artifact: PathBuf, reason: String },

    #[error("no {extension} binaries found under {dir}")]
    NoArtifacts { dir: PathBuf, extension: String },

    #[error("failed to scan {dir}: {source}")]
    Discovery {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to write stamp file {path}: {source}")]
    StampWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {origin} value {value:?}: expected a byte count")]
    InvalidLimit { origin: String, value: String },

    #[error(transparent)]
    Config(#[from] fw_core::ConfigError),
}

impl SizeGateError {
    /// True for errors caused by how the tool was invoked, not by the build
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidLimit { .. } | Self::Config(_))
    }
}
