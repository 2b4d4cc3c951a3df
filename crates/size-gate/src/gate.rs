//! Limit comparison and stamp file

use crate::error::SizeGateError;
use crate::measure::{ArtifactSize, SizeProbe};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome for a single artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// At or under the limit
    Pass,
    /// Strictly over the limit
    OverLimit,
}

/// One measured artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactReport {
    pub artifact: PathBuf,
    pub size: ArtifactSize,
    pub verdict: Verdict,
}

impl ArtifactReport {
    pub fn flash(&self) -> u64 {
        self.size.flash()
    }
}

/// Result of gating a set of artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReport {
    pub limit: u64,
    pub results: Vec<ArtifactReport>,
}

impl GateReport {
    /// Largest footprint seen, 0 when nothing was measured
    pub fn max_size(&self) -> u64 {
        self.results.iter().map(ArtifactReport::flash).max().unwrap_or(0)
    }

    /// Artifacts over the limit, in measurement order
    pub fn failures(&self) -> impl Iterator<Item = &ArtifactReport> {
        self.results.iter().filter(|r| r.verdict == Verdict::OverLimit)
    }

    pub fn passed(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Record the largest footprint for build-system timestamp tracking
    pub fn write_stamp(&self, path: &Path) -> Result<(), SizeGateError> {
        write_stamp(path, self.max_size())
    }
}

/// Flash-size gate over a [`SizeProbe`]
pub struct Gate<P> {
    probe: P,
    limit: u64,
}

impl<P: SizeProbe> Gate<P> {
    pub fn new(probe: P, limit: u64) -> Self {
        Self { probe, limit }
    }

    /// Measure and judge one artifact
    pub fn check(&self, artifact: &Path) -> Result<ArtifactReport, SizeGateError> {
        let size = self.probe.measure(artifact)?;
        let verdict = if size.flash() > self.limit {
            Verdict::OverLimit
        } else {
            Verdict::Pass
        };

        debug!(
            "{}: text={} data={} flash={} limit={}",
            artifact.display(),
            size.text,
            size.data,
            size.flash(),
            self.limit
        );

        Ok(ArtifactReport {
            artifact: artifact.to_path_buf(),
            size,
            verdict,
        })
    }

    /// Judge every artifact, calling `on_result` as each one is measured
    ///
    /// Over-limit artifacts never stop the run. A measurement error does:
    /// nothing after it is measured and no report is produced.
    pub fn run<F>(&self, artifacts: &[PathBuf], mut on_result: F) -> Result<GateReport, SizeGateError>
    where
        F: FnMut(&ArtifactReport),
    {
        info!("Checking {} artifact(s) against {} bytes", artifacts.len(), self.limit);

        let mut results = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let report = self.check(artifact)?;
            on_result(&report);
            results.push(report);
        }

        Ok(GateReport {
            limit: self.limit,
            results,
        })
    }
}

/// Write `<max_bytes>\n` to the stamp file
pub fn write_stamp(path: &Path, max_size: u64) -> Result<(), SizeGateError> {
    debug!("Writing stamp {} = {}", path.display(), max_size);

    std::fs::write(path, format!("{}\n", max_size)).map_err(|source| SizeGateError::StampWrite {
        path: path.to_path_buf(),
        source,
    })
}
