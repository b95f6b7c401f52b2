//! Error types for staging operations.
//!
//! [`Error`] covers everything the pipeline stages can fail with. The
//! [`ErrorExt`] and [`Context`] helpers attach the action and path that were
//! in flight when an I/O call failed, so log lines stay actionable.

use std::{
    io,
    path::{Path, PathBuf},
};

/// Result alias for staging operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the staging pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error annotated with the action and path involved.
    #[error("{context} {}: {source}", path.display())]
    Fs {
        /// What was being done, e.g. "copying hot-update assembly".
        context: &'static str,
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A build artifact the pipeline cannot continue without is absent.
    #[error("missing build artifact {}: {hint}", path.display())]
    MissingArtifact {
        /// Expected location of the artifact.
        path: PathBuf,
        /// Which upstream step is expected to produce it.
        hint: String,
    },

    /// An asset listed in a bundle definition is not a usable project asset.
    #[error("invalid asset path {}: {reason}", path.display())]
    InvalidAssetPath {
        /// Offending path as configured.
        path: PathBuf,
        /// Why it was rejected.
        reason: String,
    },

    /// An external build tool failed to start or exited unsuccessfully.
    #[error("`{command}` failed: {reason}")]
    ToolFailed {
        /// Command line that was run.
        command: String,
        /// Exit status or spawn error.
        reason: String,
    },

    /// The persistent data folder could not be located or opened.
    #[error("persistent data folder unavailable: {0}")]
    PersistentPath(String),

    /// Manifest text could not be parsed.
    #[error("malformed manifest line {line}: {content:?}")]
    MalformedManifest {
        /// 1-based line number.
        line: usize,
        /// Raw line content.
        content: String,
    },

    /// JSON serialization failure (build maps).
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Directory walk failure.
    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    /// Invalid glob pattern in the preserved-assembly filter.
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),

    /// Path prefix stripping failure.
    #[error(transparent)]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// Catch-all with a message.
    #[error("{0}")]
    GenericError(String),
}

/// Attaches file-system context to I/O results.
pub trait ErrorExt<T> {
    /// Wraps the error in [`Error::Fs`] with `context` and `path`.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Converts an `Option` into a [`Result`] with a message.
pub trait Context<T> {
    /// Returns [`Error::GenericError`] with `msg` when the value is absent.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}
