//! Command line interface
//!
//! Two invocation patterns:
//! 1. Explicit artifacts: `size-gate --limit 30720 foo.elf bar.elf stamp.file`
//!    Every positional but the last is an artifact, the last is the stamp.
//! 2. Build-dir sweep: `size-gate --dir build [--output stamp.file]`
//!    Every `*.elf` under `build` is checked.

use crate::settings::DEFAULT_STAMP_NAME;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub const EXIT_OK: u8 = 0;
/// Artifact over the limit, or nothing found to check
pub const EXIT_FAIL: u8 = 1;
/// Bad arguments, limit or config (clap uses 2 as well)
pub const EXIT_USAGE: u8 = 2;
/// Sizing tool or stamp I/O failure
pub const EXIT_FATAL: u8 = 3;

/// Reject firmware images that exceed the flash limit
#[derive(Debug, Parser)]
#[command(name = "size-gate")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Flash size ceiling in bytes [default: $FLASH_LIMIT, config file, or 30720]
    #[arg(long, value_name = "BYTES")]
    pub limit: Option<u64>,

    /// Scan this build directory recursively for artifacts
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Stamp file to write the largest size to
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Berkeley-format size tool to run on each artifact [default: avr-size]
    #[arg(long, value_name = "PROGRAM")]
    pub tool: Option<String>,

    /// Artifact extension matched in --dir mode [default: elf]
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// TOML config file with a [size_gate] section
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report failures and errors (no OK lines)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// ARTIFACT... STAMP (explicit-list mode)
    #[arg(value_name = "PATHS", conflicts_with = "dir")]
    pub positional: Vec<PathBuf>,
}

/// Resolved execution mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Explicit {
        artifacts: Vec<PathBuf>,
        stamp: PathBuf,
    },
    Sweep {
        dir: PathBuf,
        stamp: PathBuf,
    },
}

impl Args {
    /// Work out which mode was asked for
    ///
    /// Returns a usage message when explicit mode lacks an artifact or
    /// stamp, or when a sweep-only option is given without `--dir`.
    pub fn mode(&self) -> Result<Mode, String> {
        if let Some(dir) = &self.dir {
            let stamp = self
                .output
                .clone()
                .unwrap_or_else(|| dir.join(DEFAULT_STAMP_NAME));
            return Ok(Mode::Sweep {
                dir: dir.clone(),
                stamp,
            });
        }

        if self.extension.is_some() {
            return Err("--extension only applies to --dir sweeps".to_string());
        }

        let Some((last, artifacts)) = self.positional.split_last() else {
            return Err(explicit_usage());
        };
        if artifacts.is_empty() {
            return Err(explicit_usage());
        }

        Ok(Mode::Explicit {
            artifacts: artifacts.to_vec(),
            stamp: self.output.clone().unwrap_or_else(|| last.clone()),
        })
    }
}

fn explicit_usage() -> String {
    "explicit mode needs at least 2 positional args: ARTIFACT... STAMP (or use --dir)".to_string()
}
