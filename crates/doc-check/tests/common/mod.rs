//! Command execution helpers for check-docs integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Builder around the compiled `check-docs` binary
pub struct DocsCommand {
    working_dir: PathBuf,
    args: Vec<String>,
}

impl DocsCommand {
    /// Create a new command in the given working directory
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self {
            working_dir: working_dir.as_ref().to_path_buf(),
            args: vec!["--no-color".to_string()],
        }
    }

    /// Add command arguments
    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Run to completion
    pub fn execute(&self) -> CommandResult {
        let output = Command::new(env!("CARGO_BIN_EXE_check-docs"))
            .args(&self.args)
            .current_dir(&self.working_dir)
            .output()
            .expect("Failed to execute check-docs");

        CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
        }
    }
}

/// Captured output of one run
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Lines reporting a missing file
    pub fn missing_lines(&self) -> Vec<&str> {
        self.stderr
            .lines()
            .filter(|line| line.starts_with("Missing file:"))
            .collect()
    }
}

/// Write a page whose only content is one toctree block
pub fn page(path: &Path, entries: &[&str]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }

    let mut text = String::from("Page\n====\n\n.. toctree::\n   :maxdepth: 1\n\n");
    for entry in entries {
        text.push_str("   ");
        text.push_str(entry);
        text.push('\n');
    }
    fs::write(path, text).unwrap();
}

/// Convenient command construction
#[macro_export]
macro_rules! check_docs {
    ($dir:expr $(, $arg:expr)*) => {{
        let mut cmd = $crate::common::DocsCommand::new($dir);
        cmd.args(&[$($arg),*]);
        cmd
    }};
}
