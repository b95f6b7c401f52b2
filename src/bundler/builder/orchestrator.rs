//! Main staging orchestration.
//!
//! This module provides the [`Bundler`] that runs the pipeline stages in
//! order against one [`Settings`] value.

use crate::bundler::{
    Result, Settings, StageReport,
    stages::{
        asset_bundles::{self, BundleBuildPlan},
        collector::{self, CollectReport},
        manifest::{self, VersionManifest},
        relocator::{self, RelocationOutcome},
        tools::{BuildTools, CommandTools},
        verify::{self, Discrepancy},
    },
};

/// Pipeline orchestrator.
///
/// Stages run strictly one after another; each finishes before the next
/// starts. The [`BuildTools`] parameter is the seam for the engine-side
/// bundle and compile steps.
///
/// # Examples
///
/// ```no_run
/// use hotupdate_bundler::bundler::{BuildTarget, Bundler, SettingsBuilder};
///
/// # async fn example() -> hotupdate_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root(".")
///     .target(BuildTarget::Android)
///     .build()?;
///
/// let report = Bundler::new(settings).stage().await?;
/// println!("{} manifest entries", report.manifest_entries);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler<T = CommandTools> {
    settings: Settings,
    tools: T,
}

impl Bundler<CommandTools> {
    /// Creates a bundler that runs the configured tool commands.
    pub fn new(settings: Settings) -> Self {
        Self::with_tools(settings, CommandTools)
    }
}

impl<T: BuildTools> Bundler<T> {
    /// Creates a bundler with custom build tools.
    pub fn with_tools(settings: Settings, tools: T) -> Self {
        Self { settings, tools }
    }

    /// Returns a reference to the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the build tools.
    pub fn tools(&self) -> &T {
        &self.tools
    }

    /// Builds bundles, compiles assemblies, then runs [`Bundler::stage`].
    pub async fn build_all(&self) -> Result<StageReport> {
        self.build_asset_bundles().await?;
        self.compile_assemblies().await?;
        self.stage().await
    }

    /// Runs the asset bundle build stage.
    pub async fn build_asset_bundles(&self) -> Result<BundleBuildPlan> {
        asset_bundles::build_asset_bundles(&self.settings, &self.tools).await
    }

    /// Runs the external assembly compile step.
    pub async fn compile_assemblies(&self) -> Result<()> {
        log::info!("Compiling hot-update assemblies for {}", self.settings.target());
        self.tools.compile_assemblies(&self.settings).await
    }

    /// Relocates bundles, collects assemblies and writes the manifest.
    ///
    /// An aborted relocation is reported but does not stop the remaining
    /// stages. A missing hot-update assembly stops the run before the
    /// manifest is written.
    pub async fn stage(&self) -> Result<StageReport> {
        let relocation = self.copy_to_streaming_assets().await?;
        let aot = self.copy_aot_assemblies().await?;
        let hot_update = self.copy_hot_update_assemblies().await?;
        let (manifest_path, manifest) = manifest::generate_version_manifest(&self.settings).await?;

        Ok(StageReport {
            target: self.settings.target(),
            output_dir: self.settings.output_dir(),
            relocation,
            aot,
            hot_update,
            manifest_path,
            manifest_entries: manifest.len(),
            finished_at: chrono::Utc::now(),
        })
    }

    /// Mirrors the output directory entries into streaming assets.
    pub async fn copy_to_streaming_assets(&self) -> Result<RelocationOutcome> {
        relocator::relocate_to_streaming_assets(&self.settings).await
    }

    /// Copies AOT metadata assemblies.
    pub async fn copy_aot_assemblies(&self) -> Result<CollectReport> {
        collector::copy_aot_assemblies(&self.settings).await
    }

    /// Copies hot-update assemblies.
    pub async fn copy_hot_update_assemblies(&self) -> Result<CollectReport> {
        collector::copy_hot_update_assemblies(&self.settings).await
    }

    /// Regenerates the manifest.
    pub async fn generate_manifest(&self) -> Result<VersionManifest> {
        let (_, manifest) = manifest::generate_version_manifest(&self.settings).await?;
        Ok(manifest)
    }

    /// Verifies the output directory against its manifest.
    pub async fn verify_manifest(&self) -> Result<Vec<Discrepancy>> {
        verify::verify_version_manifest(&self.settings).await
    }
}
