//! Reference to file resolution

use std::path::{Path, PathBuf};

/// Primary documentation extension
pub const DEFAULT_EXTENSION: &str = ".rst";

/// Accepted document extensions in priority order
///
/// Always non-empty. Entries are normalised to a leading dot and
/// deduplicated keeping the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extensions(Vec<String>);

impl Extensions {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = ext.as_ref().trim().trim_start_matches('.');
            if ext.is_empty() {
                continue;
            }
            let ext = format!(".{}", ext);
            if !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }

        if normalized.is_empty() {
            return Self::default();
        }
        Self(normalized)
    }

    /// Highest priority extension, used for missing-file reports
    pub fn primary(&self) -> &str {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True when `target` already ends in one of the extensions
    pub fn has_extension(&self, target: &str) -> bool {
        self.iter().any(|ext| target.ends_with(ext))
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Self(vec![DEFAULT_EXTENSION.to_string()])
    }
}

/// Where a toctree target points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Existing document file
    Found(PathBuf),
    /// No candidate exists; the path is the primary-extension candidate
    Missing(PathBuf),
    /// Not a document: `self` or an absolute URL
    External,
}

impl Resolution {
    pub fn found(&self) -> Option<&Path> {
        match self {
            Resolution::Found(path) => Some(path.as_path()),
            _ => None,
        }
    }
}

/// Resolve a toctree target against the docs directory
///
/// A target ending in an accepted extension is checked as is. Otherwise
/// each extension is tried in order and the first existing file wins.
/// A leading `/` means docs-root relative, which is where every target
/// resolves anyway.
pub fn resolve(docs_dir: &Path, target: &str, extensions: &Extensions) -> Resolution {
    if is_external(target) {
        return Resolution::External;
    }

    let target = target.trim_start_matches('/');

    if extensions.has_extension(target) {
        let candidate = docs_dir.join(target);
        return if candidate.is_file() {
            Resolution::Found(candidate)
        } else {
            Resolution::Missing(candidate)
        };
    }

    for ext in extensions.iter() {
        let candidate = docs_dir.join(format!("{}{}", target, ext));
        if candidate.is_file() {
            return Resolution::Found(candidate);
        }
    }

    Resolution::Missing(docs_dir.join(format!("{}{}", target, extensions.primary())))
}

fn is_external(target: &str) -> bool {
    target == "self" || target.starts_with("http://") || target.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extensions_normalized() {
        let exts = Extensions::new(["rst", ".md", "  .rst ", "", "."]);
        assert_eq!(exts.iter().collect::<Vec<_>>(), vec![".rst", ".md"]);
        assert_eq!(exts.primary(), ".rst");
    }

    #[test]
    fn test_empty_extensions_fall_back_to_default() {
        let exts = Extensions::new(Vec::<String>::new());
        assert_eq!(exts, Extensions::default());
    }

    #[test]
    fn test_explicit_extension_checked_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("page.md"), "").unwrap();
        fs::write(temp_dir.path().join("page.md.rst"), "").unwrap();
        let exts = Extensions::new([".rst", ".md"]);

        assert_eq!(
            resolve(temp_dir.path(), "page.md", &exts),
            Resolution::Found(temp_dir.path().join("page.md"))
        );
        assert_eq!(
            resolve(temp_dir.path(), "gone.md", &exts),
            Resolution::Missing(temp_dir.path().join("gone.md"))
        );
    }

    #[test]
    fn test_extensions_tried_in_order() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("both.rst"), "").unwrap();
        fs::write(temp_dir.path().join("both.md"), "").unwrap();
        fs::write(temp_dir.path().join("only.md"), "").unwrap();

        let md_first = Extensions::new([".md", ".rst"]);
        assert_eq!(
            resolve(temp_dir.path(), "both", &md_first),
            Resolution::Found(temp_dir.path().join("both.md"))
        );

        let rst_first = Extensions::new([".rst", ".md"]);
        assert_eq!(
            resolve(temp_dir.path(), "both", &rst_first),
            Resolution::Found(temp_dir.path().join("both.rst"))
        );
        assert_eq!(
            resolve(temp_dir.path(), "only", &rst_first),
            Resolution::Found(temp_dir.path().join("only.md"))
        );
    }

    #[test]
    fn test_missing_reports_primary_extension() {
        let temp_dir = TempDir::new().unwrap();
        let exts = Extensions::new([".rst", ".md"]);
        assert_eq!(
            resolve(temp_dir.path(), "absent", &exts),
            Resolution::Missing(temp_dir.path().join("absent.rst"))
        );
    }

    #[test]
    fn test_nested_and_root_relative_targets() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("guide")).unwrap();
        fs::write(temp_dir.path().join("guide/setup.rst"), "").unwrap();
        let exts = Extensions::default();

        let expected = Resolution::Found(temp_dir.path().join("guide/setup.rst"));
        assert_eq!(resolve(temp_dir.path(), "guide/setup", &exts), expected);
        assert_eq!(resolve(temp_dir.path(), "/guide/setup", &exts), expected);
    }

    #[test]
    fn test_directory_is_not_a_document() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("api.rst")).unwrap();
        assert!(matches!(
            resolve(temp_dir.path(), "api", &Extensions::default()),
            Resolution::Missing(_)
        ));
    }

    #[test]
    fn test_external_targets() {
        let temp_dir = TempDir::new().unwrap();
        let exts = Extensions::default();
        assert_eq!(resolve(temp_dir.path(), "self", &exts), Resolution::External);
        assert_eq!(resolve(temp_dir.path(), "https://example.com", &exts), Resolution::External);
    }
}
