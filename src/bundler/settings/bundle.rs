//! Asset bundle definitions and external tool commands.

use std::path::{Component, Path, PathBuf};

use crate::bundler::{Error, Result};

/// A named archive and the project assets it packs.
///
/// Configure in `HotUpdate.toml`:
///
/// ```toml
/// [[bundles]]
/// name = "prefabs"
/// assets = ["Assets/Prefabs/HotUpdatePrefab.prefab"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct AssetBundleDefinition {
    /// Archive name, e.g. `prefabs`.
    pub name: String,

    /// Source assets, absolute or project-relative.
    #[serde(default)]
    pub assets: Vec<PathBuf>,
}

impl AssetBundleDefinition {
    /// Creates a bundle definition.
    pub fn new(name: impl Into<String>, assets: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            assets,
        }
    }

    /// The single `prefabs` bundle the runtime loader expects by default.
    pub fn default_prefabs() -> Self {
        Self::new(
            "prefabs",
            vec![PathBuf::from("Assets/Prefabs/HotUpdatePrefab.prefab")],
        )
    }
}

/// Converts an asset path into the engine's project-relative form.
///
/// Everything before the first `Assets` component is dropped, so both
/// `/home/me/Game/Assets/Prefabs/A.prefab` and `Assets/Prefabs/A.prefab`
/// become `Assets/Prefabs/A.prefab`. The result always uses `/`.
///
/// # Errors
///
/// Returns [`Error::InvalidAssetPath`] when the path has no `Assets`
/// component.
pub fn to_relative_asset_path(path: &Path) -> Result<String> {
    let components: Vec<&str> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();

    let start = components
        .iter()
        .position(|c| *c == "Assets")
        .ok_or_else(|| Error::InvalidAssetPath {
            path: path.to_path_buf(),
            reason: "path is not inside the project's Assets folder".to_string(),
        })?;

    Ok(components[start..].join("/"))
}

/// An external program invocation with placeholder arguments.
///
/// Supported placeholders: `{project}`, `{target}`, `{output_dir}`,
/// `{build_map}`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ToolCommand {
    /// Program name (looked up on `PATH`) or path.
    pub program: String,

    /// Arguments, expanded before the call.
    #[serde(default)]
    pub args: Vec<String>,
}

impl ToolCommand {
    /// Creates a tool command.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Renders the command line for logs and error messages.
    pub fn display_with(&self, args: &[String]) -> String {
        std::iter::once(self.program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// External tools the pipeline shells out to.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ToolSettings {
    /// Builds asset bundles from a JSON build map.
    #[serde(default)]
    pub bundle: Option<ToolCommand>,

    /// Compiles hot-update assemblies for the target.
    #[serde(default)]
    pub compile: Option<ToolCommand>,
}
