//! Mirrors bundle output into the streaming assets location.

use std::path::PathBuf;

use crate::bundler::{Result, Settings, utils::fs};

/// Result of a relocation attempt.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RelocationOutcome {
    /// Every entry was copied and bookkeeping files were pruned.
    Completed {
        /// Destination paths that were written.
        copied: Vec<PathBuf>,
        /// `.manifest` files removed from the destination.
        pruned: Vec<PathBuf>,
    },
    /// A copy failed; the destination needs manual cleanup.
    Aborted {
        /// Entry whose copy failed.
        entry: String,
        /// Error text.
        reason: String,
    },
}

impl RelocationOutcome {
    /// Whether the relocation ran to completion.
    pub fn is_completed(&self) -> bool {
        matches!(self, RelocationOutcome::Completed { .. })
    }
}

/// Replaces the streaming assets directory with the configured entries of
/// the output directory.
///
/// The previous destination is removed first. Copy failures are caught,
/// logged with a cleanup hint and reported as [`RelocationOutcome::Aborted`];
/// pruning is skipped in that case. Failure to remove the old destination is
/// returned as an error.
pub async fn relocate_to_streaming_assets(settings: &Settings) -> Result<RelocationOutcome> {
    let src_dir = settings.output_dir();
    let dst_dir = settings.streaming_assets_dir();

    fs::remove_path(dst_dir).await?;
    fs::create_dir_all(dst_dir).await?;

    let mut copied = Vec::with_capacity(settings.relocated_entries().len());
    for entry in settings.relocated_entries() {
        let source = src_dir.join(entry);
        let destination = dst_dir.join(entry);
        log::info!(
            "copy assetbundle {} -> {}",
            source.display(),
            destination.display()
        );

        if let Err(e) = fs::copy_path(&source, &destination).await {
            log::error!(
                "Something went wrong, you need to manually delete {} and run again, err: {}",
                dst_dir.display(),
                e
            );
            return Ok(RelocationOutcome::Aborted {
                entry: entry.clone(),
                reason: e.to_string(),
            });
        }
        copied.push(destination);
    }

    let pruned = fs::find_files_with_suffix(dst_dir, settings.excluded_suffix()).await?;
    for file in &pruned {
        log::debug!("pruning {}", file.display());
        fs::remove_file(file).await?;
    }

    Ok(RelocationOutcome::Completed { copied, pruned })
}
