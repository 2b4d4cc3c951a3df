//! Defaults, config file section and effective settings

use crate::error::DocCheckError;
use crate::resolve::Extensions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Sphinx source directory used when nothing else is configured
pub const DEFAULT_DOCS_DIR: &str = "docs/source";

/// Root document, relative to the docs directory
pub const DEFAULT_INDEX: &str = "index.rst";

/// `[docs]` section of the config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    /// Relative paths are taken from the config file's directory
    pub docs_dir: Option<PathBuf>,
    /// Relative paths are taken from the docs directory
    pub index_file: Option<PathBuf>,
    pub recursive: Option<bool>,
    pub extensions: Option<Vec<String>>,
}

impl DocsConfig {
    /// Load from a config file, or defaults when no file was given
    pub fn load(path: Option<&Path>) -> Result<Self, DocCheckError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let mut config: Self = fw_core::load_section(path, "docs")?;
        if let Some(base) = path.parent() {
            config.docs_dir = config
                .docs_dir
                .map(|dir| if dir.is_relative() { base.join(dir) } else { dir });
        }
        Ok(config)
    }
}

/// What the checker actually runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub docs_dir: PathBuf,
    pub index_file: PathBuf,
    pub recursive: bool,
    pub extensions: Extensions,
}

impl Settings {
    /// Merge command line values over the config file over defaults
    ///
    /// `recursive` can only be switched on from the command line, so a
    /// `false` flag defers to the config.
    pub fn merge(
        docs_dir: Option<PathBuf>,
        index_file: Option<PathBuf>,
        recursive: bool,
        extensions: Vec<String>,
        config: DocsConfig,
    ) -> Self {
        let docs_dir = docs_dir
            .or(config.docs_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_DIR));

        let index_file = index_file
            .or(config.index_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX));
        let index_file = if index_file.is_absolute() {
            index_file
        } else {
            docs_dir.join(index_file)
        };

        let extensions = if extensions.is_empty() {
            config.extensions.map(Extensions::new).unwrap_or_default()
        } else {
            Extensions::new(extensions)
        };

        Self {
            docs_dir,
            index_file,
            recursive: recursive || config.recursive.unwrap_or(false),
            extensions,
        }
    }
}
