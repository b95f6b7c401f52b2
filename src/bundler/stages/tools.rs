//! External build tools: asset bundle builder and assembly compiler.
//!
//! Both tools are opaque engine-side programs. [`BuildTools`] is the seam
//! the orchestrator calls through; [`CommandTools`] runs the commands
//! configured under `[tools]`.

use std::future::Future;

use crate::bundler::{
    Error, Result, Settings, ToolCommand,
    error::ErrorExt,
    stages::asset_bundles::BundleBuildPlan,
    utils::{fs, process},
};

/// Engine-side build steps the pipeline delegates to.
pub trait BuildTools {
    /// Builds the archives described by `plan` into `plan.output_dir`.
    fn build_asset_bundles(
        &self,
        settings: &Settings,
        plan: &BundleBuildPlan,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Compiles the hot-update assemblies for the settings' target.
    fn compile_assemblies(&self, settings: &Settings) -> impl Future<Output = Result<()>> + Send;
}

/// Runs the tool commands configured in [`Settings::tools`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandTools;

impl BuildTools for CommandTools {
    async fn build_asset_bundles(&self, settings: &Settings, plan: &BundleBuildPlan) -> Result<()> {
        let Some(command) = &settings.tools().bundle else {
            log::warn!(
                "No bundle tool configured under [tools.bundle]; keeping archives already in {}",
                plan.output_dir.display()
            );
            return Ok(());
        };

        let build_map = std::env::temp_dir().join(format!(
            "hotupdate-build-map-{}.json",
            uuid::Uuid::new_v4()
        ));
        let json = serde_json::to_vec_pretty(plan)?;
        tokio::fs::write(&build_map, json)
            .await
            .fs_context("writing build map", &build_map)?;
        log::debug!("Build map written to {}", build_map.display());

        let result = run_tool(command, settings, Some(&build_map.to_string_lossy())).await;

        if let Err(e) = fs::remove_file(&build_map).await {
            log::warn!("Failed to remove build map {}: {}", build_map.display(), e);
        }

        result
    }

    async fn compile_assemblies(&self, settings: &Settings) -> Result<()> {
        match &settings.tools().compile {
            Some(command) => run_tool(command, settings, None).await,
            None => {
                log::warn!(
                    "No compile tool configured under [tools.compile]; using assemblies already in {}",
                    settings.hot_update_dir().display()
                );
                Ok(())
            }
        }
    }
}

/// Expands placeholders and runs `command` from the project root.
async fn run_tool(command: &ToolCommand, settings: &Settings, build_map: Option<&str>) -> Result<()> {
    let args: Vec<String> = command
        .args
        .iter()
        .map(|arg| {
            let arg = settings.expand(arg);
            match build_map {
                Some(map) => arg.replace("{build_map}", map),
                None => arg,
            }
        })
        .collect();

    let program = which::which(&command.program).map_err(|e| Error::ToolFailed {
        command: command.display_with(&args),
        reason: format!("program not found: {e}"),
    })?;

    process::run_streaming(&program.to_string_lossy(), &args, settings.project_root()).await
}
