//! Build directory sweep

use crate::error::SizeGateError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Recursively collect files ending in `.<extension>` under `dir`
///
/// Results are sorted by path so reports are stable between runs.
/// A directory that doesn't exist yields no artifacts; the caller turns
/// that into [`SizeGateError::NoArtifacts`].
pub fn discover_artifacts(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, SizeGateError> {
    if !dir.is_dir() {
        warn!("Build directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let wanted = extension.trim_start_matches('.');
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|source| SizeGateError::Discovery {
            dir: dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if entry.path().extension().is_some_and(|ext| ext == wanted) {
            debug!("Found artifact {}", entry.path().display());
            found.push(entry.into_path());
        }
    }

    found.sort();
    Ok(found)
}
