//! Build target platforms.

use std::{fmt, str::FromStr};

/// Engine build target a staging run is performed for.
///
/// The display form is the engine's own platform name and doubles as the
/// name of the per-target output subdirectory (`AssetBundles/Android`, ...).
///
/// # Examples
///
/// ```
/// use hotupdate_bundler::bundler::BuildTarget;
///
/// let target: BuildTarget = "win64".parse().unwrap();
/// assert_eq!(target, BuildTarget::StandaloneWindows64);
/// assert_eq!(target.to_string(), "StandaloneWindows64");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize)]
pub enum BuildTarget {
    /// 32-bit Windows player
    StandaloneWindows,
    /// 64-bit Windows player
    StandaloneWindows64,
    /// macOS player
    StandaloneOSX,
    /// 64-bit Linux player
    StandaloneLinux64,
    /// Android
    Android,
    /// iOS
    #[serde(rename = "iOS")]
    IOS,
    /// WebGL
    WebGL,
}

impl BuildTarget {
    /// All known targets, in declaration order.
    pub const ALL: [BuildTarget; 7] = [
        BuildTarget::StandaloneWindows,
        BuildTarget::StandaloneWindows64,
        BuildTarget::StandaloneOSX,
        BuildTarget::StandaloneLinux64,
        BuildTarget::Android,
        BuildTarget::IOS,
        BuildTarget::WebGL,
    ];

    /// Engine name of the target.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildTarget::StandaloneWindows => "StandaloneWindows",
            BuildTarget::StandaloneWindows64 => "StandaloneWindows64",
            BuildTarget::StandaloneOSX => "StandaloneOSX",
            BuildTarget::StandaloneLinux64 => "StandaloneLinux64",
            BuildTarget::Android => "Android",
            BuildTarget::IOS => "iOS",
            BuildTarget::WebGL => "WebGL",
        }
    }

    /// Desktop target matching the host OS.
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            BuildTarget::StandaloneWindows64
        } else if cfg!(target_os = "macos") {
            BuildTarget::StandaloneOSX
        } else {
            BuildTarget::StandaloneLinux64
        }
    }

    /// Whether the target is a desktop player.
    pub fn is_standalone(&self) -> bool {
        matches!(
            self,
            BuildTarget::StandaloneWindows
                | BuildTarget::StandaloneWindows64
                | BuildTarget::StandaloneOSX
                | BuildTarget::StandaloneLinux64
        )
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let target = match lowered.as_str() {
            "standalonewindows" | "win" | "win32" | "windows" => BuildTarget::StandaloneWindows,
            "standalonewindows64" | "win64" | "windows64" => BuildTarget::StandaloneWindows64,
            "standaloneosx" | "osx" | "macos" | "mac" => BuildTarget::StandaloneOSX,
            "standalonelinux64" | "linux64" | "linux" => BuildTarget::StandaloneLinux64,
            "android" => BuildTarget::Android,
            "ios" | "iphone" => BuildTarget::IOS,
            "webgl" => BuildTarget::WebGL,
            _ => {
                let valid: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
                return Err(format!(
                    "Invalid build target: {}. Valid targets: {}",
                    s,
                    valid.join(", ")
                ));
            }
        };
        Ok(target)
    }
}
