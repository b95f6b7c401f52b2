//! Command line interface for the hot-update stager.
//!
//! This module provides the CLI entry point: argument validation, config
//! loading, settings construction and command dispatch.

mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::{Bundler, Settings};
use crate::error::{BundlerError, CliError, Result};
use crate::metadata;
use path_absolutize::Absolutize;

/// Main CLI entry point
pub async fn run(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| BundlerError::Cli(CliError::InvalidArguments { reason }))?;

    let runtime_config = RuntimeConfig::from(&args);
    let settings = load_settings(&args)?;
    runtime_config.verbose_println(&format!(
        "Project {} | target {} | output {}",
        settings.project_root().display(),
        settings.target(),
        settings.output_dir().display()
    ))?;

    let bundler = Bundler::new(settings);
    match args.command {
        Command::Build => commands::build(&bundler, &runtime_config).await,
        Command::Stage => commands::stage(&bundler, &runtime_config).await,
        Command::CopyToStreaming => commands::copy_to_streaming(&bundler, &runtime_config).await,
        Command::Manifest => commands::manifest(&bundler, &runtime_config).await,
        Command::Verify => commands::verify(&bundler, &runtime_config).await,
        Command::OpenPersistent { print } => {
            commands::open_persistent(bundler.settings(), print, &runtime_config).await
        }
    }
}

/// Resolves the project root, loads the config and builds [`Settings`].
pub fn load_settings(args: &Args) -> Result<Settings> {
    let project_root = args.project.absolutize()?.into_owned();
    if !project_root.is_dir() {
        return Err(BundlerError::Cli(CliError::InvalidArguments {
            reason: format!("Project directory does not exist: {}", project_root.display()),
        }));
    }

    let config = metadata::load_config(&project_root, args.config.as_deref())?;
    config.into_settings(&project_root, args.target)
}
