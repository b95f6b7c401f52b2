//! `build`, `stage`, `copy-to-streaming`, `manifest` and `verify`.

use crate::bundler::{
    Bundler, StageReport,
    stages::{relocator::RelocationOutcome, tools::BuildTools},
};
use crate::cli::RuntimeConfig;
use crate::error::Result;

/// Exit code when verification finds differences.
pub const EXIT_VERIFY_MISMATCH: i32 = 2;

/// Builds bundles, compiles assemblies and stages the result.
pub async fn build<T: BuildTools>(bundler: &Bundler<T>, config: &RuntimeConfig) -> Result<i32> {
    let settings = bundler.settings();
    config.section(&format!("Building hot-update content for {}", settings.target()))?;
    config.progress(&format!(
        "Building {} asset bundle(s), compiling assemblies, staging",
        settings.bundles().len()
    ))?;

    let report = bundler.build_all().await?;
    print_stage_report(&report, config)
}

/// Relocates, collects and writes the manifest.
pub async fn stage<T: BuildTools>(bundler: &Bundler<T>, config: &RuntimeConfig) -> Result<i32> {
    config.section(&format!("Staging for {}", bundler.settings().target()))?;
    let report = bundler.stage().await?;
    print_stage_report(&report, config)
}

/// Mirrors bundles into the streaming assets folder.
pub async fn copy_to_streaming<T: BuildTools>(
    bundler: &Bundler<T>,
    config: &RuntimeConfig,
) -> Result<i32> {
    config.progress(&format!(
        "Copying bundles to {}",
        bundler.settings().streaming_assets_dir().display()
    ))?;
    let outcome = bundler.copy_to_streaming_assets().await?;

    if config.json() {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_relocation(&outcome, config)?;
    }

    Ok(if outcome.is_completed() { 0 } else { 1 })
}

/// Regenerates the manifest.
pub async fn manifest<T: BuildTools>(bundler: &Bundler<T>, config: &RuntimeConfig) -> Result<i32> {
    let manifest = bundler.generate_manifest().await?;

    if config.json() {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
    } else {
        config.success(&format!(
            "Wrote {} ({} entries)",
            bundler.settings().manifest_path().display(),
            manifest.len()
        ))?;
        for entry in manifest.entries() {
            config.verbose_println(&format!("  {},{}", entry.name, entry.checksum))?;
        }
    }

    Ok(0)
}

/// Verifies the output directory against the manifest.
pub async fn verify<T: BuildTools>(bundler: &Bundler<T>, config: &RuntimeConfig) -> Result<i32> {
    let discrepancies = bundler.verify_manifest().await?;

    if config.json() {
        println!("{}", serde_json::to_string_pretty(&discrepancies)?);
    } else if discrepancies.is_empty() {
        config.success(&format!(
            "{} matches {}",
            bundler.settings().output_dir().display(),
            bundler.settings().manifest_file_name()
        ))?;
    } else {
        for discrepancy in &discrepancies {
            config.error(&discrepancy.to_string())?;
        }
    }

    Ok(if discrepancies.is_empty() {
        0
    } else {
        EXIT_VERIFY_MISMATCH
    })
}

fn print_relocation(outcome: &RelocationOutcome, config: &RuntimeConfig) -> Result<()> {
    match outcome {
        RelocationOutcome::Completed { copied, pruned } => {
            config.success(&format!(
                "Copied {} entr{} to streaming assets, pruned {} .manifest file(s)",
                copied.len(),
                if copied.len() == 1 { "y" } else { "ies" },
                pruned.len()
            ))?;
            for path in copied {
                config.verbose_println(&format!("  {}", path.display()))?;
            }
        }
        RelocationOutcome::Aborted { entry, reason } => {
            config.error(&format!("Copy of '{entry}' to streaming assets failed: {reason}"))?;
            config.warn("Delete the streaming assets folder manually and run again")?;
        }
    }
    Ok(())
}

fn print_stage_report(report: &StageReport, config: &RuntimeConfig) -> Result<i32> {
    let exit_code = if report.relocation.is_completed() { 0 } else { 1 };

    if config.json() {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(exit_code);
    }

    print_relocation(&report.relocation, config)?;

    config.success(&format!("Copied {} AOT assembl(ies)", report.aot.copied.len()))?;
    for missing in &report.aot.missing {
        config.warn(&format!(
            "AOT assembly missing (build the player first): {}",
            missing.display()
        ))?;
    }

    config.success(&format!(
        "Copied {} hot-update assembl(ies)",
        report.hot_update.copied.len()
    ))?;
    for copied in report.aot.copied.iter().chain(&report.hot_update.copied) {
        config.verbose_println(&format!(
            "  {} -> {}",
            copied.source.display(),
            copied.destination.display()
        ))?;
    }

    config.success(&format!(
        "Wrote {} ({} entries)",
        report.manifest_path.display(),
        report.manifest_entries
    ))?;

    if !report.is_clean() {
        config.indent("Finished with warnings; see above")?;
    }
    Ok(exit_code)
}
