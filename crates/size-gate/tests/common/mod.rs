//! Command execution helpers for size-gate integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Builder around the compiled `size-gate` binary
pub struct GateCommand {
    working_dir: PathBuf,
    args: Vec<String>,
    env: HashMap<String, String>,
}

impl GateCommand {
    /// Create a new command in the given working directory
    pub fn new(working_dir: impl AsRef<Path>) -> Self {
        Self {
            working_dir: working_dir.as_ref().to_path_buf(),
            args: vec!["--no-color".to_string()],
            env: HashMap::new(),
        }
    }

    /// Add command arguments
    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(&mut self, key: &str, value: &str) -> &mut Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    /// Run to completion
    ///
    /// `FLASH_LIMIT` from the outer environment is always cleared so tests
    /// see the built-in default unless they set it themselves.
    pub fn execute(&self) -> CommandResult {
        let output = Command::new(env!("CARGO_BIN_EXE_size-gate"))
            .args(&self.args)
            .current_dir(&self.working_dir)
            .env_remove("FLASH_LIMIT")
            .envs(&self.env)
            .output()
            .expect("Failed to execute size-gate");

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
    pub fn contains_stdout(&self, text: &str) -> bool {
        self.stdout.contains(text)
    }

    pub fn contains_stderr(&self, text: &str) -> bool {
        self.stderr.contains(text)
    }
}

/// Write an executable stand-in for `avr-size`
///
/// Each artifact file holds `"<text> <data>"`; the script echoes them back
/// in Berkeley format.
pub fn fake_size_tool(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "fake-size",
        r#"#!/bin/sh
read text data < "$1" || exit 1
printf '   text\t   data\t    bss\t    dec\t    hex\tfilename\n'
printf '%7d\t%7d\t      0\t      0\t      0\t%s\n' "$text" "$data" "$1"
"#,
    )
}

/// A sizing tool that prints a header but no size row
pub fn truncated_size_tool(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "truncated-size",
        "#!/bin/sh\nprintf '   text\\t   data\\n'\n",
    )
}

/// A sizing tool that exits non-zero
pub fn failing_size_tool(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "failing-size",
        "#!/bin/sh\necho \"size: $1: file format not recognized\" >&2\nexit 1\n",
    )
}

/// Create an artifact the fake tool will report as `text + data` bytes
pub fn artifact(path: &Path, text: u64, data: u64) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, format!("{} {}\n", text, data)).unwrap();
    path.to_path_buf()
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Convenient command construction
///
/// ```ignore
/// size_gate!(dir, "--limit", "1024", "a.elf", "stamp").execute();
/// ```
#[macro_export]
macro_rules! size_gate {
    ($dir:expr, $($arg:expr),*) => {{
        let mut cmd = $crate::common::GateCommand::new($dir);
        cmd.args(&[$($arg),*]);
        cmd
    }};
}
