//! Checks the output directory against its manifest.

use crate::bundler::{Result, Settings};

use super::manifest::{VersionManifest, scan_directory};

/// A difference between the manifest and the directory.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discrepancy {
    /// Listed in the manifest but absent from disk.
    Missing {
        /// File name.
        name: String,
    },
    /// Present, but the content checksum differs.
    Changed {
        /// File name.
        name: String,
        /// Checksum recorded in the manifest.
        expected: String,
        /// Checksum of the file on disk.
        actual: String,
    },
    /// On disk but not listed in the manifest.
    Untracked {
        /// File name.
        name: String,
    },
}

impl std::fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Discrepancy::Missing { name } => write!(f, "missing: {name}"),
            Discrepancy::Changed {
                name,
                expected,
                actual,
            } => write!(f, "changed: {name} (expected {expected}, found {actual})"),
            Discrepancy::Untracked { name } => write!(f, "untracked: {name}"),
        }
    }
}

/// Compares the manifest in the output directory with the files next to it.
///
/// Returns an empty list when everything matches.
pub async fn verify_version_manifest(settings: &Settings) -> Result<Vec<Discrepancy>> {
    let recorded = VersionManifest::read(&settings.manifest_path()).await?;
    let actual = scan_directory(
        &settings.output_dir(),
        settings.manifest_file_name(),
        settings.excluded_suffix(),
    )
    .await?;

    Ok(compare(&recorded, &actual))
}

/// Diffs two manifests; `recorded` is the reference.
pub fn compare(recorded: &VersionManifest, actual: &VersionManifest) -> Vec<Discrepancy> {
    let mut found = Vec::new();

    for entry in recorded.entries() {
        match actual.checksum_of(&entry.name) {
            None => found.push(Discrepancy::Missing {
                name: entry.name.clone(),
            }),
            Some(checksum) if checksum != entry.checksum => found.push(Discrepancy::Changed {
                name: entry.name.clone(),
                expected: entry.checksum.clone(),
                actual: checksum.to_string(),
            }),
            Some(_) => {}
        }
    }

    for entry in actual.entries() {
        if recorded.checksum_of(&entry.name).is_none() {
            found.push(Discrepancy::Untracked {
                name: entry.name.clone(),
            });
        }
    }

    found
}
