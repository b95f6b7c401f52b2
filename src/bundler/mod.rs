//! Hot-update content staging.
//!
//! Builds asset bundles through an external tool, copies AOT metadata and
//! hot-update assemblies next to them as `.bytes` files, mirrors the bundles
//! into the streaming assets folder and writes a `Versions.txt` checksum
//! manifest.

pub mod builder;
pub mod error;
mod report;
pub mod settings;
pub mod stages;
pub mod utils;

pub use builder::Bundler;
pub use error::{Error, Result};
pub use report::StageReport;
pub use settings::{
    AssemblySettings, AssetBundleDefinition, BuildTarget, Settings, SettingsBuilder, ToolCommand,
    ToolSettings,
};
