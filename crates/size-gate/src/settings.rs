//! Defaults, config file section and limit resolution

use crate::error::SizeGateError;
use serde::Deserialize;
use std::path::Path;

/// Flash ceiling used when nothing else is configured (30 KiB)
pub const DEFAULT_LIMIT: u64 = 30 * 1024;

/// Sizing tool used when nothing else is configured
pub const DEFAULT_TOOL: &str = "avr-size";

/// Artifact extension matched in sweep mode
pub const DEFAULT_EXTENSION: &str = "elf";

/// Stamp file written inside the swept directory when `--output` is absent
pub const DEFAULT_STAMP_NAME: &str = "size_gate.txt";

/// Environment override for the limit
pub const LIMIT_ENV: &str = "FLASH_LIMIT";

/// `[size_gate]` section of the config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SizeGateConfig {
    /// Flash ceiling in bytes
    pub limit: Option<u64>,
    /// Sizing tool program
    pub tool: Option<String>,
    /// Artifact extension for sweep mode
    pub extension: Option<String>,
}

impl SizeGateConfig {
    /// Load from a config file, or defaults when no file was given
    pub fn load(path: Option<&Path>) -> Result<Self, SizeGateError> {
        match path {
            Some(path) => Ok(fw_core::load_section(path, "size_gate")?),
            None => Ok(Self::default()),
        }
    }
}

/// Pick the effective limit: CLI, then `FLASH_LIMIT`, then config, then default
///
/// An empty `FLASH_LIMIT` counts as unset; any other non-integer value is
/// rejected rather than silently falling back.
pub fn resolve_limit(
    cli: Option<u64>,
    env: Option<&str>,
    config: Option<u64>,
) -> Result<u64, SizeGateError> {
    if let Some(limit) = cli {
        return Ok(limit);
    }

    if let Some(raw) = env.map(str::trim).filter(|raw| !raw.is_empty()) {
        return raw.parse::<u64>().map_err(|_| SizeGateError::InvalidLimit {
            origin: LIMIT_ENV.to_string(),
            value: raw.to_string(),
        });
    }

    Ok(config.unwrap_or(DEFAULT_LIMIT))
}
