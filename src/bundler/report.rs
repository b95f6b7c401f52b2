//! Summary of a staging run.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use super::{
    BuildTarget,
    stages::{collector::CollectReport, relocator::RelocationOutcome},
};

/// What a [`Bundler::stage`](super::Bundler::stage) run did.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StageReport {
    /// Target the run staged for.
    pub target: BuildTarget,
    /// Per-target output directory.
    pub output_dir: PathBuf,
    /// Streaming assets relocation result.
    pub relocation: RelocationOutcome,
    /// AOT metadata assembly copies.
    pub aot: CollectReport,
    /// Hot-update assembly copies.
    pub hot_update: CollectReport,
    /// Written manifest.
    pub manifest_path: PathBuf,
    /// Number of manifest lines.
    pub manifest_entries: usize,
    /// Completion time.
    pub finished_at: DateTime<Utc>,
}

impl StageReport {
    /// True when relocation completed and no AOT assembly was missing.
    pub fn is_clean(&self) -> bool {
        self.relocation.is_completed() && self.aot.is_complete()
    }
}
