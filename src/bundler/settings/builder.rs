//! Builder for constructing Settings.

use super::{AssemblySettings, AssetBundleDefinition, BuildTarget, Settings, ToolSettings};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Default parent of per-target output directories.
pub const DEFAULT_OUTPUT_ROOT: &str = "AssetBundles";
/// Default streaming assets location.
pub const DEFAULT_STREAMING_ASSETS: &str = "Assets/StreamingAssets";
/// Default stripped AOT assembly location.
pub const DEFAULT_STRIPPED_AOT_DIR: &str = "HybridCLRData/AssembliesPostIl2CppStrip/{target}";
/// Default hot-update assembly location.
pub const DEFAULT_HOT_UPDATE_DIR: &str = "HybridCLRData/HotUpdateDlls/{target}";
/// Default manifest file name.
pub const DEFAULT_MANIFEST_FILE: &str = "Versions.txt";
/// Default excluded suffix.
pub const DEFAULT_EXCLUDED_SUFFIX: &str = ".manifest";
/// Default entries mirrored into the streaming location.
pub const DEFAULT_RELOCATED_ENTRIES: [&str; 2] = ["prefabs", "AssetBundles"];

/// Builder for constructing [`Settings`].
///
/// Relative paths are resolved against the project root, and `{target}` in
/// any path is replaced with the build target's name. The project root is
/// made absolute once here so later joins never mix separators.
///
/// # Examples
///
/// ```no_run
/// use hotupdate_bundler::bundler::{BuildTarget, SettingsBuilder};
///
/// # fn example() -> hotupdate_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root("/work/MyGame")
///     .target(BuildTarget::IOS)
///     .hot_update_assemblies(vec!["HotUpdate.dll".into(), "Gameplay.dll".into()])
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_root: Option<PathBuf>,
    target: Option<BuildTarget>,
    output_root: Option<PathBuf>,
    streaming_assets_dir: Option<PathBuf>,
    stripped_aot_dir: Option<PathBuf>,
    hot_update_dir: Option<PathBuf>,
    bundles: Option<Vec<AssetBundleDefinition>>,
    aot_assemblies: Option<Vec<String>>,
    hot_update_assemblies: Option<Vec<String>>,
    preserved_assemblies: Vec<String>,
    relocated_entries: Option<Vec<String>>,
    manifest_file_name: Option<String>,
    excluded_suffix: Option<String>,
    tools: ToolSettings,
    company: Option<String>,
    product: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project root.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the build target.
    ///
    /// Default: the host desktop target
    pub fn target(mut self, target: BuildTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the parent of the per-target output directories.
    ///
    /// Default: `AssetBundles`
    pub fn output_root<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the streaming assets directory.
    ///
    /// Default: `Assets/StreamingAssets`
    pub fn streaming_assets_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.streaming_assets_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the stripped AOT assembly directory.
    ///
    /// Default: `HybridCLRData/AssembliesPostIl2CppStrip/{target}`
    pub fn stripped_aot_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.stripped_aot_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the hot-update assembly directory.
    ///
    /// Default: `HybridCLRData/HotUpdateDlls/{target}`
    pub fn hot_update_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.hot_update_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the bundle definitions.
    ///
    /// Default: the single `prefabs` bundle
    pub fn bundles(mut self, bundles: Vec<AssetBundleDefinition>) -> Self {
        self.bundles = Some(bundles);
        self
    }

    /// Sets the AOT metadata assemblies.
    pub fn aot_assemblies(mut self, names: Vec<String>) -> Self {
        self.aot_assemblies = Some(names);
        self
    }

    /// Sets the hot-update assemblies.
    pub fn hot_update_assemblies(mut self, names: Vec<String>) -> Self {
        self.hot_update_assemblies = Some(names);
        self
    }

    /// Sets glob patterns of hot-update assemblies that are not staged.
    ///
    /// Default: Empty
    pub fn preserved_assemblies(mut self, patterns: Vec<String>) -> Self {
        self.preserved_assemblies = patterns;
        self
    }

    /// Sets the entries mirrored into the streaming location.
    ///
    /// Default: `prefabs`, `AssetBundles`
    pub fn relocated_entries(mut self, entries: Vec<String>) -> Self {
        self.relocated_entries = Some(entries);
        self
    }

    /// Sets the manifest file name.
    ///
    /// Default: `Versions.txt`
    pub fn manifest_file_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_file_name = Some(name.into());
        self
    }

    /// Sets the suffix excluded from manifests and the streaming mirror.
    ///
    /// Default: `.manifest`
    pub fn excluded_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.excluded_suffix = Some(suffix.into());
        self
    }

    /// Sets the external tool commands.
    ///
    /// Default: none configured
    pub fn tools(mut self, tools: ToolSettings) -> Self {
        self.tools = tools;
        self
    }

    /// Sets the company name.
    ///
    /// Default: `DefaultCompany`
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Sets the product name.
    ///
    /// Default: the project directory name
    pub fn product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `project_root` is missing or cannot be made
    /// absolute.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::{Context, ErrorExt};

        let root = self.project_root.context("project_root is required")?;
        let project_root = root
            .absolutize()
            .fs_context("resolving project root", &root)?
            .into_owned();
        let target = self.target.unwrap_or_else(BuildTarget::host);

        let resolve = |path: Option<PathBuf>, default: &str| -> PathBuf {
            let path = path.unwrap_or_else(|| PathBuf::from(default));
            let expanded = PathBuf::from(
                path.to_string_lossy()
                    .replace("{target}", target.as_str()),
            );
            if expanded.is_absolute() {
                expanded
            } else {
                project_root.join(expanded)
            }
        };

        let output_root = resolve(self.output_root, DEFAULT_OUTPUT_ROOT);
        let streaming_assets_dir = resolve(self.streaming_assets_dir, DEFAULT_STREAMING_ASSETS);
        let stripped_aot_dir = resolve(self.stripped_aot_dir, DEFAULT_STRIPPED_AOT_DIR);
        let hot_update_dir = resolve(self.hot_update_dir, DEFAULT_HOT_UPDATE_DIR);

        let defaults = AssemblySettings::default();
        let assemblies = AssemblySettings {
            aot: self.aot_assemblies.unwrap_or(defaults.aot),
            hot_update: self.hot_update_assemblies.unwrap_or(defaults.hot_update),
            preserved: self.preserved_assemblies,
        };

        let product = self.product.unwrap_or_else(|| {
            project_root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Game".to_string())
        });

        Ok(Settings::new(
            project_root,
            target,
            output_root,
            streaming_assets_dir,
            stripped_aot_dir,
            hot_update_dir,
            self.bundles
                .unwrap_or_else(|| vec![AssetBundleDefinition::default_prefabs()]),
            assemblies,
            self.relocated_entries.unwrap_or_else(|| {
                DEFAULT_RELOCATED_ENTRIES
                    .iter()
                    .map(|e| e.to_string())
                    .collect()
            }),
            self.manifest_file_name
                .unwrap_or_else(|| DEFAULT_MANIFEST_FILE.to_string()),
            self.excluded_suffix
                .unwrap_or_else(|| DEFAULT_EXCLUDED_SUFFIX.to_string()),
            self.tools,
            self.company.unwrap_or_else(|| "DefaultCompany".to_string()),
            product,
        ))
    }
}
