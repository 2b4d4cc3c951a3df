//! Command line interface

use crate::error::DocCheckError;
use crate::settings::{DocsConfig, Settings};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Every reference resolves
pub const EXIT_OK: u8 = 0;
/// At least one reference is unresolved
pub const EXIT_MISSING: u8 = 1;
/// The check could not run (missing index, unreadable page, bad config)
pub const EXIT_FATAL: u8 = 2;

/// Verify that all Sphinx toctree references resolve to existing files
#[derive(Debug, Parser)]
#[command(name = "check-docs")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Sphinx documentation source directory [default: docs/source]
    #[arg(long, value_name = "DIR")]
    pub docs_dir: Option<PathBuf>,

    /// Root index file, relative to the docs directory unless absolute [default: index.rst]
    #[arg(long, value_name = "FILE")]
    pub index_file: Option<PathBuf>,

    /// Recursively parse referenced pages
    #[arg(short, long)]
    pub recursive: bool,

    /// Accepted document extension, in priority order (repeatable) [default: .rst]
    #[arg(short = 'e', long = "ext", visible_alias = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// TOML config file with a [docs] section
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report problems
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Combine flags with the optional config file
    pub fn settings(&self) -> Result<Settings, DocCheckError> {
        let config = DocsConfig::load(self.config.as_deref())?;

        Ok(Settings::merge(
            self.docs_dir.clone(),
            self.index_file.clone(),
            self.recursive,
            self.extensions.clone(),
            config,
        ))
    }
}
