//! Configuration structures for staging runs.
//!
//! This module provides the build target, bundle and assembly lists, tool
//! commands, and the [`SettingsBuilder`] that assembles them into an
//! immutable [`Settings`] value.

mod assemblies;
mod builder;
mod bundle;
mod core;
mod target;

// Re-export all public types
pub use assemblies::AssemblySettings;
pub use builder::{
    DEFAULT_EXCLUDED_SUFFIX, DEFAULT_HOT_UPDATE_DIR, DEFAULT_MANIFEST_FILE, DEFAULT_OUTPUT_ROOT,
    DEFAULT_RELOCATED_ENTRIES, DEFAULT_STREAMING_ASSETS, DEFAULT_STRIPPED_AOT_DIR,
    SettingsBuilder,
};
pub use bundle::{AssetBundleDefinition, ToolCommand, ToolSettings, to_relative_asset_path};
pub use core::{BYTES_SUFFIX, Settings};
pub use target::BuildTarget;
