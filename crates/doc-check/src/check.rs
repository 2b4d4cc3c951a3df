//! Existence check for collected references

use crate::collect::Reference;
use crate::resolve::{resolve, Extensions, Resolution};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A reference that resolves to no existing file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReference {
    /// Path that was expected to exist
    pub path: PathBuf,
    /// First reference that pointed at it
    pub reference: Reference,
}

/// Return every missing document, once per path, in first-seen order
pub fn check_references(
    refs: &[Reference],
    docs_dir: &Path,
    extensions: &Extensions,
) -> Vec<MissingReference> {
    let mut seen = HashSet::new();
    let mut missing = Vec::new();

    for reference in refs {
        if let Resolution::Missing(path) = resolve(docs_dir, &reference.target, extensions) {
            if seen.insert(path.clone()) {
                missing.push(MissingReference {
                    path,
                    reference: reference.clone(),
                });
            }
        }
    }

    missing
}
