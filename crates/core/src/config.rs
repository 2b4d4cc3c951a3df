//! Optional TOML configuration file
//!
//! One file may configure both tools; each tool reads only its own
//! section:
//! ```toml
//! [size_gate]
//! limit = 30720
//! tool = "avr-size"
//!
//! [docs]
//! docs_dir = "docs/source"
//! recursive = true
//! extensions = [".rst", ".md"]
//! ```

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid [{section}] section in {path}: {source}")]
    Section {
        path: PathBuf,
        section: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("[{section}] in {path} must be a table")]
    NotATable { path: PathBuf, section: String },
}

/// Load one section of a config file
///
/// A missing section yields `T::default()`. Sections belonging to other
/// tools are ignored.
pub fn load_section<T>(path: &Path, section: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_section(&content, path, section)
}

fn parse_section<T>(content: &str, path: &Path, section: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    let mut table = content
        .parse::<toml::Table>()
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let Some(value) = table.remove(section) else {
        tracing::debug!("No [{}] section in {}, using defaults", section, path.display());
        return Ok(T::default());
    };

    if !value.is_table() {
        return Err(ConfigError::NotATable {
            path: path.to_path_buf(),
            section: section.to_string(),
        });
    }

    value.try_into().map_err(|source| ConfigError::Section {
        path: path.to_path_buf(),
        section: section.to_string(),
        source,
    })
}
