//! Hot-update content staging library
//!
//! This library provides the staging pipeline for hybrid native/managed
//! game runtimes:
//! - Asset bundle builds through an external engine tool
//! - AOT metadata and hot-update assembly collection as `.bytes` files
//! - Streaming assets mirroring with `.manifest` pruning
//! - `Versions.txt` checksum manifests and their verification
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
