//! Reference collection across documentation files

use crate::error::DocCheckError;
use crate::parser::parse_toctree;
use crate::resolve::{resolve, Extensions};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A toctree entry together with where it was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Document name to resolve, e.g. `guide/setup` or `api.rst`
    pub target: String,
    /// File containing the toctree
    pub source: PathBuf,
    /// 1-based line in `source`
    pub line: usize,
}

/// How references are collected
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Base directory every target resolves against
    pub docs_dir: PathBuf,
    /// Follow resolved references into their own toctrees
    pub recursive: bool,
    pub extensions: Extensions,
}

impl ParseOptions {
    /// Non-recursive, `.rst` only, docs dir = directory of `index`
    pub fn for_index(index: &Path) -> Self {
        let docs_dir = index
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            docs_dir,
            recursive: false,
            extensions: Extensions::default(),
        }
    }

    pub fn docs_dir(mut self, docs_dir: impl Into<PathBuf>) -> Self {
        self.docs_dir = docs_dir.into();
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }
}

/// Collect toctree references starting at `index`
///
/// In recursive mode each reference that resolves to an existing file is
/// parsed too, and its references follow it immediately (depth first, in
/// document order). Files are keyed by canonical path, so cycles
/// terminate and pages listed from several places are parsed once.
pub fn parse_references(index: &Path, options: &ParseOptions) -> Result<Vec<Reference>, DocCheckError> {
    if !index.is_file() {
        return Err(DocCheckError::IndexNotFound {
            path: index.to_path_buf(),
        });
    }

    let mut visited = HashSet::new();
    let mut refs = Vec::new();
    collect(index, options, &mut visited, &mut refs)?;

    debug!("Collected {} reference(s) from {}", refs.len(), index.display());
    Ok(refs)
}

fn collect(
    file: &Path,
    options: &ParseOptions,
    visited: &mut HashSet<PathBuf>,
    refs: &mut Vec<Reference>,
) -> Result<(), DocCheckError> {
    let key = std::fs::canonicalize(file).map_err(|source| DocCheckError::Read {
        path: file.to_path_buf(),
        source,
    })?;

    if !visited.insert(key) {
        trace!("Already visited {}", file.display());
        return Ok(());
    }

    let text = std::fs::read_to_string(file).map_err(|source| DocCheckError::Read {
        path: file.to_path_buf(),
        source,
    })?;

    debug!("Parsing {}", file.display());

    for entry in parse_toctree(&text) {
        let reference = Reference {
            target: entry.target().to_string(),
            source: file.to_path_buf(),
            line: entry.line,
        };

        let child = options
            .recursive
            .then(|| resolve(&options.docs_dir, &reference.target, &options.extensions));

        refs.push(reference);

        if let Some(path) = child.as_ref().and_then(|r| r.found()) {
            collect(path, options, visited, refs)?;
        }
    }

    Ok(())
}
