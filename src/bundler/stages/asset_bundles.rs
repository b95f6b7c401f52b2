//! Asset bundle build stage.

use std::path::PathBuf;

use crate::bundler::{
    BuildTarget, Error, Result, Settings,
    settings::to_relative_asset_path,
    stages::tools::BuildTools,
    utils::fs,
};

/// One archive in a build map handed to the bundle tool.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedBundle {
    /// Archive name.
    pub asset_bundle_name: String,
    /// Project-relative asset paths (`Assets/...`).
    pub asset_names: Vec<String>,
}

/// Everything the bundle tool needs to produce the archives.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleBuildPlan {
    /// Directory the archives go to.
    pub output_dir: PathBuf,
    /// Platform to build for.
    pub target: BuildTarget,
    /// Archives to produce.
    pub bundles: Vec<PlannedBundle>,
}

/// Validates the configured bundles and turns them into a build plan.
///
/// Every asset is converted to its `Assets/...` form and must exist under
/// the project root.
///
/// # Errors
///
/// [`Error::InvalidAssetPath`] for assets outside `Assets` or missing on disk.
pub async fn plan_asset_bundles(settings: &Settings) -> Result<BundleBuildPlan> {
    let mut bundles = Vec::with_capacity(settings.bundles().len());

    for definition in settings.bundles() {
        let mut asset_names = Vec::with_capacity(definition.assets.len());
        for asset in &definition.assets {
            let relative = to_relative_asset_path(asset)?;
            let on_disk = settings.project_root().join(&relative);
            if !tokio::fs::try_exists(&on_disk).await.unwrap_or(false) {
                return Err(Error::InvalidAssetPath {
                    path: asset.clone(),
                    reason: format!("asset does not exist at {}", on_disk.display()),
                });
            }
            asset_names.push(relative);
        }
        bundles.push(PlannedBundle {
            asset_bundle_name: definition.name.clone(),
            asset_names,
        });
    }

    Ok(BundleBuildPlan {
        output_dir: settings.output_dir(),
        target: settings.target(),
        bundles,
    })
}

/// Builds asset bundles into the per-target output directory.
///
/// Tool failures propagate unchanged; nothing is retried.
pub async fn build_asset_bundles<T: BuildTools>(
    settings: &Settings,
    tools: &T,
) -> Result<BundleBuildPlan> {
    let plan = plan_asset_bundles(settings).await?;
    fs::create_dir_all(&plan.output_dir).await?;

    log::info!(
        "Building {} asset bundle(s) for {} into {}",
        plan.bundles.len(),
        plan.target,
        plan.output_dir.display()
    );
    tools.build_asset_bundles(settings, &plan).await?;

    Ok(plan)
}
