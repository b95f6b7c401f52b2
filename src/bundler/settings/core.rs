//! Core Settings struct and implementations.

use super::{AssemblySettings, AssetBundleDefinition, BuildTarget, ToolSettings};
use std::path::{Path, PathBuf};

/// Suffix appended to staged assemblies so the runtime treats them as
/// opaque data instead of loadable modules.
pub const BYTES_SUFFIX: &str = ".bytes";

/// Immutable configuration for one staging run.
///
/// Every stage reads the target and paths from here; nothing is taken from
/// ambient state. Construct through [`SettingsBuilder`].
///
/// # Examples
///
/// ```no_run
/// use hotupdate_bundler::bundler::{BuildTarget, SettingsBuilder};
///
/// # fn example() -> hotupdate_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_root("/work/MyGame")
///     .target(BuildTarget::Android)
///     .build()?;
///
/// assert!(settings.output_dir().ends_with("AssetBundles/Android"));
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`SettingsBuilder`] - Builder for constructing Settings
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    /// Absolute project root.
    project_root: PathBuf,

    /// Platform the run stages content for.
    target: BuildTarget,

    /// Parent of the per-target output directories.
    output_root: PathBuf,

    /// Read-only runtime asset location inside the project.
    streaming_assets_dir: PathBuf,

    /// Where the player build leaves stripped AOT assemblies.
    stripped_aot_dir: PathBuf,

    /// Where the hot-update compile step leaves its assemblies.
    hot_update_dir: PathBuf,

    /// Archives to build.
    bundles: Vec<AssetBundleDefinition>,

    /// Assemblies to stage.
    assemblies: AssemblySettings,

    /// Output-directory entries mirrored into the streaming location.
    relocated_entries: Vec<String>,

    /// Manifest file name inside the output directory.
    manifest_file_name: String,

    /// Build-tool bookkeeping suffix excluded from manifests and streaming.
    excluded_suffix: String,

    /// External build tools.
    tools: ToolSettings,

    /// Company name used by the runtime's persistent data path.
    company: String,

    /// Product name used by the runtime's persistent data path.
    product: String,
}

impl Settings {
    /// Returns the project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the build target.
    pub fn target(&self) -> BuildTarget {
        self.target
    }

    /// Per-target staging directory, `<output_root>/<target>`.
    pub fn output_dir(&self) -> PathBuf {
        self.output_root.join(self.target.as_str())
    }

    /// Returns the streaming assets directory.
    pub fn streaming_assets_dir(&self) -> &Path {
        &self.streaming_assets_dir
    }

    /// Returns the stripped AOT assembly directory.
    pub fn stripped_aot_dir(&self) -> &Path {
        &self.stripped_aot_dir
    }

    /// Returns the hot-update assembly directory.
    pub fn hot_update_dir(&self) -> &Path {
        &self.hot_update_dir
    }

    /// Returns the bundle definitions.
    pub fn bundles(&self) -> &[AssetBundleDefinition] {
        &self.bundles
    }

    /// Returns the assembly lists.
    pub fn assemblies(&self) -> &AssemblySettings {
        &self.assemblies
    }

    /// Returns the entries mirrored into the streaming location.
    pub fn relocated_entries(&self) -> &[String] {
        &self.relocated_entries
    }

    /// Returns the manifest file name.
    pub fn manifest_file_name(&self) -> &str {
        &self.manifest_file_name
    }

    /// Full path of the manifest inside the output directory.
    pub fn manifest_path(&self) -> PathBuf {
        self.output_dir().join(&self.manifest_file_name)
    }

    /// Returns the excluded build-tool suffix (`.manifest`).
    pub fn excluded_suffix(&self) -> &str {
        &self.excluded_suffix
    }

    /// Returns the external tool commands.
    pub fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    /// Returns the company name.
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the product name.
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Staged file name for an assembly, e.g. `HotUpdate.dll.bytes`.
    pub fn bytes_file_name(assembly: &str) -> String {
        format!("{assembly}{BYTES_SUFFIX}")
    }

    /// Runtime persistent data folder on the host OS.
    ///
    /// Mirrors where the engine places `persistentDataPath` for desktop
    /// players: `~/.config/unity3d/<company>/<product>` on Linux,
    /// `~/Library/Application Support/<company>/<product>` on macOS and
    /// `%USERPROFILE%/AppData/LocalLow/<company>/<product>` on Windows.
    pub fn persistent_data_path(&self) -> Option<PathBuf> {
        let base = if cfg!(target_os = "windows") {
            dirs::home_dir().map(|home| home.join("AppData").join("LocalLow"))
        } else if cfg!(target_os = "macos") {
            dirs::data_dir()
        } else {
            dirs::config_dir().map(|config| config.join("unity3d"))
        }?;
        Some(base.join(&self.company).join(&self.product))
    }

    /// Expands `{project}`, `{target}` and `{output_dir}` in a template.
    pub fn expand(&self, template: &str) -> String {
        template
            .replace("{project}", &self.project_root.to_string_lossy())
            .replace("{target}", self.target.as_str())
            .replace("{output_dir}", &self.output_dir().to_string_lossy())
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        project_root: PathBuf,
        target: BuildTarget,
        output_root: PathBuf,
        streaming_assets_dir: PathBuf,
        stripped_aot_dir: PathBuf,
        hot_update_dir: PathBuf,
        bundles: Vec<AssetBundleDefinition>,
        assemblies: AssemblySettings,
        relocated_entries: Vec<String>,
        manifest_file_name: String,
        excluded_suffix: String,
        tools: ToolSettings,
        company: String,
        product: String,
    ) -> Self {
        Self {
            project_root,
            target,
            output_root,
            streaming_assets_dir,
            stripped_aot_dir,
            hot_update_dir,
            bundles,
            assemblies,
            relocated_entries,
            manifest_file_name,
            excluded_suffix,
            tools,
            company,
            product,
        }
    }
}
