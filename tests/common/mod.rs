//! Shared helpers for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use hotupdate_bundler::bundler::{BuildTarget, Settings, SettingsBuilder};
use tempfile::TempDir;

/// Temporary game project with an `Assets/` folder.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp project");
        std::fs::create_dir_all(dir.path().join("Assets")).expect("create Assets");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `content` to `rel` under the project root, creating parents.
    pub fn write(&self, rel: impl AsRef<Path>, content: &[u8]) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    pub fn read(&self, rel: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.root().join(rel)).expect("read file")
    }

    pub fn exists(&self, rel: impl AsRef<Path>) -> bool {
        self.root().join(rel).exists()
    }

    pub fn builder(&self) -> SettingsBuilder {
        SettingsBuilder::new()
            .project_root(self.root())
            .target(BuildTarget::Android)
    }

    pub fn settings(&self) -> Settings {
        self.builder().build().expect("build settings")
    }
}

/// Manifest line ending for the host platform.
pub fn nl() -> &'static str {
    if cfg!(windows) { "\r\n" } else { "\n" }
}
