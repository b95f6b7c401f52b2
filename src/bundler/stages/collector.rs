//! Copies compiled assemblies into the output directory as `.bytes` files.
//!
//! AOT metadata assemblies are tolerant: a missing one is logged and skipped
//! because it only means no player build has run yet. Hot-update assemblies
//! are strict: a missing one fails the stage.

use std::path::{Path, PathBuf};

use crate::bundler::{Error, Result, Settings, utils::fs};

/// A single source → destination copy.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CopiedArtifact {
    /// Original assembly.
    pub source: PathBuf,
    /// Staged `.bytes` file.
    pub destination: PathBuf,
}

/// Outcome of one collector pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct CollectReport {
    /// Files that were copied.
    pub copied: Vec<CopiedArtifact>,
    /// Sources that did not exist and were skipped.
    pub missing: Vec<PathBuf>,
}

impl CollectReport {
    /// Whether every listed assembly was copied.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Copies the configured AOT metadata assemblies from the stripped player
/// output into the output directory.
///
/// Missing sources are logged and recorded in [`CollectReport::missing`];
/// the remaining assemblies are still copied.
pub async fn copy_aot_assemblies(settings: &Settings) -> Result<CollectReport> {
    let src_dir = settings.stripped_aot_dir();
    let dst_dir = settings.output_dir();
    fs::create_dir_all(&dst_dir).await?;

    let mut report = CollectReport::default();
    for name in &settings.assemblies().aot {
        let source = src_dir.join(name);
        if !tokio::fs::try_exists(&source).await.unwrap_or(false) {
            log::error!(
                "Cannot add AOT metadata assembly {}: file does not exist. \
                 Stripped AOT assemblies are only produced by a player build, \
                 so build the game once before staging.",
                source.display()
            );
            report.missing.push(source);
            continue;
        }

        let destination = copy_as_bytes(&source, &dst_dir, name).await?;
        log::info!(
            "copy AOT dll {} -> {}",
            source.display(),
            destination.display()
        );
        report.copied.push(CopiedArtifact {
            source,
            destination,
        });
    }

    Ok(report)
}

/// Copies the hot-update assemblies (minus preserved ones) from the compile
/// output into the output directory.
///
/// # Errors
///
/// [`Error::MissingArtifact`] as soon as one source is absent.
pub async fn copy_hot_update_assemblies(settings: &Settings) -> Result<CollectReport> {
    let src_dir = settings.hot_update_dir();
    let dst_dir = settings.output_dir();
    fs::create_dir_all(&dst_dir).await?;

    let mut report = CollectReport::default();
    for name in settings.assemblies().hot_update_excluding_preserved()? {
        let source = src_dir.join(&name);
        if !tokio::fs::try_exists(&source).await.unwrap_or(false) {
            return Err(Error::MissingArtifact {
                path: source,
                hint: "compile the hot-update assemblies for this target first".to_string(),
            });
        }

        let destination = copy_as_bytes(&source, &dst_dir, &name).await?;
        log::info!(
            "copy hotfix dll {} -> {}",
            source.display(),
            destination.display()
        );
        report.copied.push(CopiedArtifact {
            source,
            destination,
        });
    }

    Ok(report)
}

async fn copy_as_bytes(source: &Path, dst_dir: &Path, name: &str) -> Result<PathBuf> {
    let destination = dst_dir.join(Settings::bytes_file_name(name));
    fs::copy_file(source, &destination).await?;
    Ok(destination)
}
