//! Flash footprint measurement via an external sizing tool

use crate::error::SizeGateError;
use crate::settings::DEFAULT_TOOL;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Section sizes of one artifact, as reported by the sizing tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactSize {
    /// Code section bytes
    pub text: u64,
    /// Initialized data bytes (stored in flash, copied to RAM at boot)
    pub data: u64,
}

impl ArtifactSize {
    pub fn new(text: u64, data: u64) -> Self {
        Self { text, data }
    }

    /// Bytes the image occupies in program memory
    pub fn flash(&self) -> u64 {
        self.text.saturating_add(self.data)
    }
}

/// Source of artifact sizes
///
/// Implemented by [`SizeTool`] for real runs; closures implement it too,
/// which keeps the gate logic testable without a toolchain.
pub trait SizeProbe {
    fn measure(&self, artifact: &Path) -> Result<ArtifactSize, SizeGateError>;
}

impl<F> SizeProbe for F
where
    F: Fn(&Path) -> Result<ArtifactSize, SizeGateError>,
{
    fn measure(&self, artifact: &Path) -> Result<ArtifactSize, SizeGateError> {
        self(artifact)
    }
}

/// Berkeley-format `size` program (`avr-size`, `arm-none-eabi-size`, ...)
#[derive(Debug, Clone)]
pub struct SizeTool {
    program: String,
}

impl SizeTool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SizeTool {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

impl SizeProbe for SizeTool {
    fn measure(&self, artifact: &Path) -> Result<ArtifactSize, SizeGateError> {
        debug!("Running {} {}", self.program, artifact.display());

        let output = Command::new(&self.program)
            .arg(artifact)
            .output()
            .map_err(|source| SizeGateError::ToolSpawn {
                tool: self.program.clone(),
                artifact: artifact.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(SizeGateError::ToolFailed {
                tool: self.program.clone(),
                artifact: artifact.to_path_buf(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        parse_size_output(artifact, &String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse Berkeley `size` output
///
/// ```text
///    text    data     bss     dec     hex filename
///    1234      56      78    1368     558 firmware.elf
/// ```
/// Blank lines are ignored. The last row's first two columns are taken as
/// `text` and `data`.
pub fn parse_size_output(artifact: &Path, output: &str) -> Result<ArtifactSize, SizeGateError> {
    let lines: Vec<&str> = output.lines().filter(|l| !l.trim().is_empty()).collect();

    if lines.len() < 2 {
        return Err(SizeGateError::MalformedOutput {
            artifact: artifact.to_path_buf(),
            reason: format!(
                "expected a header and a size row, got {} non-blank line(s)",
                lines.len()
            ),
        });
    }

    let mut columns = lines[lines.len() - 1].split_whitespace();
    let text = parse_column(artifact, columns.next(), "text")?;
    let data = parse_column(artifact, columns.next(), "data")?;

    Ok(ArtifactSize { text, data })
}

fn parse_column(artifact: &Path, column: Option<&str>, name: &str) -> Result<u64, SizeGateError> {
    let Some(raw) = column else {
        return Err(SizeGateError::MalformedOutput {
            artifact: artifact.to_path_buf(),
            reason: format!("missing {} column", name),
        });
    };

    raw.parse::<u64>().map_err(|_| SizeGateError::MalformedOutput {
        artifact: artifact.to_path_buf(),
        reason: format!("{} column is not a decimal byte count: {:?}", name, raw),
    })
}
