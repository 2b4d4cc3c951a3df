//! `.. toctree::` block scanner
//!
//! Two states, outside and inside a block. Inside a block:
//! - blank lines and `:option:` lines are skipped
//! - the first content line fixes the entry indentation
//! - a line indented less than that ends the block
//!
//! The block marker is checked before anything else on every line, so a
//! dedented marker both closes one block and opens the next.

const TOCTREE_MARKER: &str = ".. toctree::";
const COMMENT_MARKER: &str = "<!--";

/// One entry line of a toctree block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Document name as written, without inline comment or trailing space
    pub text: String,
    /// 1-based line number
    pub line: usize,
}

impl TocEntry {
    /// Document the entry points at
    ///
    /// `Title <target>` entries yield `target`; plain entries yield
    /// themselves.
    pub fn target(&self) -> &str {
        explicit_target(&self.text).unwrap_or(&self.text)
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    Outside,
    Inside { indent: Option<usize> },
}

/// Collect the entries of every toctree block in document order
pub fn parse_toctree(text: &str) -> Vec<TocEntry> {
    let mut entries = Vec::new();
    let mut state = State::Outside;

    for (idx, line) in text.lines().enumerate() {
        let stripped = line.trim_start();

        if stripped.starts_with(TOCTREE_MARKER) {
            state = State::Inside { indent: None };
            continue;
        }

        let State::Inside { indent } = state else {
            continue;
        };

        if stripped.is_empty() || stripped.starts_with(':') {
            continue;
        }

        let width = line.len() - stripped.len();
        match indent {
            None => state = State::Inside { indent: Some(width) },
            Some(level) if width < level => {
                state = State::Outside;
                continue;
            }
            Some(_) => {}
        }

        let entry = strip_comment(stripped);
        if entry.is_empty() {
            continue;
        }

        entries.push(TocEntry {
            text: entry.to_string(),
            line: idx + 1,
        });
    }

    entries
}

fn strip_comment(entry: &str) -> &str {
    match entry.find(COMMENT_MARKER) {
        Some(pos) => entry[..pos].trim_end(),
        None => entry.trim_end(),
    }
}

fn explicit_target(entry: &str) -> Option<&str> {
    let inner = entry.strip_suffix('>')?;
    let open = inner.rfind('<')?;
    if open == 0 || !inner[..open].ends_with(char::is_whitespace) {
        return None;
    }
    let target = inner[open + 1..].trim();
    (!target.is_empty()).then_some(target)
}
