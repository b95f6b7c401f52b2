//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation
//! and the runtime configuration derived from the arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::bundler::BuildTarget;

/// Hot-update content stager for hybrid native/managed game runtimes
#[derive(Parser, Debug)]
#[command(
    name = "hotupdate_bundler",
    version,
    about = "Stages asset bundles and hot-update assemblies with a checksum manifest",
    long_about = "Builds asset bundles through an external engine tool, copies AOT metadata and \
hot-update assemblies next to them as .bytes files, mirrors the bundles into the streaming \
assets folder and writes a Versions.txt manifest of <file>,<md5> lines.

Usage:
  hotupdate_bundler --target android build
  hotupdate_bundler stage
  hotupdate_bundler --project ../MyGame manifest
  hotupdate_bundler verify

Exit code 0 = success, 1 = error or aborted streaming assets copy, 2 = manifest verification \
found differences."
)]
pub struct Args {
    /// Project root containing Assets/ and HotUpdate.toml
    #[arg(short, long, value_name = "DIR", default_value = ".", global = true)]
    pub project: PathBuf,

    /// Config file (default: <project>/HotUpdate.toml, optional)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Build target, e.g. Android, iOS, StandaloneWindows64, win64
    #[arg(short, long, value_name = "TARGET", env = "HOTUPDATE_BUILD_TARGET", global = true)]
    pub target: Option<BuildTarget>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print a JSON report on stdout
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Staging commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build asset bundles, compile assemblies, then stage everything
    Build,
    /// Copy bundles to streaming assets, collect assemblies, write the manifest
    ///
    /// An aborted streaming assets copy still runs the later steps but exits with 1.
    Stage,
    /// Copy previously built bundles to the streaming assets folder
    CopyToStreaming,
    /// Regenerate Versions.txt for the target's output directory
    Manifest,
    /// Check the output directory against Versions.txt
    Verify,
    /// Open the runtime persistent data folder
    OpenPersistent {
        /// Print the folder path instead of opening it
        #[arg(long)]
        print: bool,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("--verbose and --quiet cannot be used together".to_string());
        }
        if self.project.as_os_str().is_empty() {
            return Err("Project path cannot be empty".to_string());
        }
        Ok(())
    }

    /// Log filter implied by the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,
    /// Whether a JSON report replaces human-readable output
    json: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet || args.json);
        Self {
            output,
            json: args.json,
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Whether to print a JSON report
    pub fn json(&self) -> bool {
        self.json
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print error message
    pub fn error(&self, message: &str) -> std::io::Result<()> {
        self.output.error(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
