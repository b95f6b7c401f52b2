//! Project configuration from `HotUpdate.toml`.
//!
//! Every table and field is optional; anything left out falls back to the
//! [`SettingsBuilder`] defaults.

use crate::bundler::{
    AssetBundleDefinition, BuildTarget, Settings, SettingsBuilder, ToolSettings,
};
use crate::error::{BundlerError, CliError, Result};
use std::path::{Path, PathBuf};

/// Default config file name inside the project root.
pub const CONFIG_FILE_NAME: &str = "HotUpdate.toml";

/// Parsed `HotUpdate.toml`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// `[project]` table.
    #[serde(default)]
    pub project: ProjectSection,

    /// `[paths]` table.
    #[serde(default)]
    pub paths: PathsSection,

    /// `[[bundles]]` array; absent means the default `prefabs` bundle.
    #[serde(default)]
    pub bundles: Option<Vec<AssetBundleDefinition>>,

    /// `[assemblies]` table.
    #[serde(default)]
    pub assemblies: AssembliesSection,

    /// `[relocation]` table.
    #[serde(default)]
    pub relocation: RelocationSection,

    /// `[manifest]` table.
    #[serde(default)]
    pub manifest: ManifestSection,

    /// `[tools]` table.
    #[serde(default)]
    pub tools: ToolSettings,
}

/// `[project]`
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    /// Company name for the persistent data path.
    pub company: Option<String>,
    /// Product name for the persistent data path.
    pub product: Option<String>,
    /// Default build target.
    pub target: Option<String>,
}

/// `[paths]`
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    pub output_root: Option<PathBuf>,
    pub streaming_assets: Option<PathBuf>,
    pub stripped_aot_dir: Option<PathBuf>,
    pub hot_update_dir: Option<PathBuf>,
}

/// `[assemblies]`
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssembliesSection {
    pub aot: Option<Vec<String>>,
    pub hot_update: Option<Vec<String>>,
    #[serde(default)]
    pub preserved: Vec<String>,
}

/// `[relocation]`
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelocationSection {
    pub entries: Option<Vec<String>>,
}

/// `[manifest]`
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestSection {
    pub file_name: Option<String>,
    pub excluded_suffix: Option<String>,
}

impl ProjectConfig {
    /// Parses config text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Turns the config into [`Settings`] for `project_root`.
    ///
    /// `target_override` (from the command line or environment) wins over
    /// `[project].target`; with neither, the host desktop target is used.
    pub fn into_settings(
        self,
        project_root: &Path,
        target_override: Option<BuildTarget>,
    ) -> Result<Settings> {
        let target = match (target_override, self.project.target.as_deref()) {
            (Some(target), _) => target,
            (None, Some(name)) => name.parse::<BuildTarget>().map_err(|reason| {
                BundlerError::Cli(CliError::InvalidArguments {
                    reason: format!("[project].target: {reason}"),
                })
            })?,
            (None, None) => BuildTarget::host(),
        };

        let mut builder = SettingsBuilder::new()
            .project_root(project_root)
            .target(target)
            .preserved_assemblies(self.assemblies.preserved)
            .tools(self.tools);

        if let Some(company) = self.project.company {
            builder = builder.company(company);
        }
        if let Some(product) = self.project.product {
            builder = builder.product(product);
        }
        if let Some(path) = self.paths.output_root {
            builder = builder.output_root(path);
        }
        if let Some(path) = self.paths.streaming_assets {
            builder = builder.streaming_assets_dir(path);
        }
        if let Some(path) = self.paths.stripped_aot_dir {
            builder = builder.stripped_aot_dir(path);
        }
        if let Some(path) = self.paths.hot_update_dir {
            builder = builder.hot_update_dir(path);
        }
        if let Some(bundles) = self.bundles {
            builder = builder.bundles(bundles);
        }
        if let Some(aot) = self.assemblies.aot {
            builder = builder.aot_assemblies(aot);
        }
        if let Some(hot_update) = self.assemblies.hot_update {
            builder = builder.hot_update_assemblies(hot_update);
        }
        if let Some(entries) = self.relocation.entries {
            builder = builder.relocated_entries(entries);
        }
        if let Some(name) = self.manifest.file_name {
            builder = builder.manifest_file_name(name);
        }
        if let Some(suffix) = self.manifest.excluded_suffix {
            builder = builder.excluded_suffix(suffix);
        }

        Ok(builder.build()?)
    }
}

/// Loads the project config.
///
/// With `explicit` set the file must exist. Otherwise
/// `<project_root>/HotUpdate.toml` is read when present and built-in
/// defaults are used when it is not.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<ProjectConfig> {
    let (path, required) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (project_root.join(CONFIG_FILE_NAME), false),
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            log::debug!("{} not found, using defaults", path.display());
            return Ok(ProjectConfig::default());
        }
        Err(e) => {
            return Err(BundlerError::Cli(CliError::ExecutionFailed {
                command: "read_config".to_string(),
                reason: format!("Failed to read {}: {}", path.display(), e),
            }));
        }
    };

    log::debug!("Loading config from {}", path.display());
    ProjectConfig::from_toml(&text).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "parse_config".to_string(),
            reason: format!("Failed to parse {}: {}", path.display(), e),
        })
    })
}
