//! Error types for the command line surface.
//!
//! Pipeline failures arrive as [`crate::bundler::Error`]; this module wraps
//! them together with config and argument errors.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Pipeline errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error as E;
        match self {
            BundlerError::Bundler(E::MissingArtifact { .. }) => vec![
                "Run the hot-update compile step for this target, then stage again".to_string(),
            ],
            BundlerError::Bundler(E::ToolFailed { .. }) => vec![
                "Check the tool output in the log above and the [tools] section of HotUpdate.toml"
                    .to_string(),
            ],
            BundlerError::Bundler(E::InvalidAssetPath { .. }) => vec![
                "Bundle assets must live under the project's Assets folder".to_string(),
            ],
            BundlerError::Toml(_) | BundlerError::Cli(CliError::ExecutionFailed { .. }) => {
                vec!["Check HotUpdate.toml for typos or unknown keys".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
