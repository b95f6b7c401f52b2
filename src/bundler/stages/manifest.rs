//! `Versions.txt` generation and parsing.
//!
//! The manifest is a flat text file, one `<file-name>,<md5>` line per staged
//! file directly inside the output directory. Every line, including the last,
//! ends with the platform newline. Entries are sorted by name so regenerating
//! an unchanged directory yields byte-identical output.

use std::path::{Path, PathBuf};

use crate::bundler::{
    Error, Result, Settings,
    builder::calculate_md5,
    error::ErrorExt,
    utils::fs,
};

/// Line terminator written after every manifest line.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// One manifest line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct ManifestEntry {
    /// File name relative to the output directory.
    pub name: String,
    /// Lowercase hex MD5 of the file content.
    pub checksum: String,
}

/// Parsed or generated manifest, entries sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct VersionManifest {
    entries: Vec<ManifestEntry>,
}

impl VersionManifest {
    /// Creates a manifest, sorting entries by name.
    pub fn new(mut entries: Vec<ManifestEntry>) -> Self {
        entries.sort();
        Self { entries }
    }

    /// Returns the entries.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest lists nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the checksum recorded for `name`.
    pub fn checksum_of(&self, name: &str) -> Option<&str> {
        self.entries
            .binary_search_by(|e| e.name.as_str().cmp(name))
            .ok()
            .map(|i| self.entries[i].checksum.as_str())
    }

    /// Renders the manifest text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&entry.name);
            out.push(',');
            out.push_str(&entry.checksum);
            out.push_str(LINE_ENDING);
        }
        out
    }

    /// Parses manifest text.
    ///
    /// Accepts `\n` and `\r\n`, skips blank lines and splits each line at
    /// its last comma, so file names may themselves contain commas.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedManifest`] for a line without a comma, with an
    /// empty name, or whose checksum is not 32 lowercase hex digits.
    pub fn parse(text: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let malformed = || Error::MalformedManifest {
                line: index + 1,
                content: line.to_string(),
            };
            let (name, checksum) = line.rsplit_once(',').ok_or_else(malformed)?;
            if name.is_empty() || !is_md5_hex(checksum) {
                return Err(malformed());
            }
            entries.push(ManifestEntry {
                name: name.to_string(),
                checksum: checksum.to_string(),
            });
        }
        Ok(Self::new(entries))
    }

    /// Reads and parses a manifest file.
    pub async fn read(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path)
            .await
            .fs_context("reading manifest", path)?;
        Self::parse(&text)
    }
}

fn is_md5_hex(s: &str) -> bool {
    s.len() == 32 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Checksums every file directly in `dir`, skipping names ending with
/// `excluded_suffix` and the manifest file itself.
///
/// Names that are not valid UTF-8 cannot be written as a manifest line and
/// are skipped with a warning.
pub async fn scan_directory(
    dir: &Path,
    manifest_file_name: &str,
    excluded_suffix: &str,
) -> Result<VersionManifest> {
    let mut entries = Vec::new();
    for path in fs::list_files(dir).await? {
        let Some(file_name) = path.file_name() else {
            continue;
        };
        let Some(name) = file_name.to_str().map(str::to_owned) else {
            log::warn!("skipping {}: file name is not valid UTF-8", path.display());
            continue;
        };
        if name == manifest_file_name || name.ends_with(excluded_suffix) {
            continue;
        }
        let checksum = calculate_md5(&path).await?;
        entries.push(ManifestEntry { name, checksum });
    }
    Ok(VersionManifest::new(entries))
}

/// Regenerates `<output-dir>/<manifest file>` from scratch.
///
/// Any existing manifest is deleted before the scan, so the result always
/// replaces it instead of extending it.
pub async fn generate_version_manifest(settings: &Settings) -> Result<(PathBuf, VersionManifest)> {
    let dir = settings.output_dir();
    let path = settings.manifest_path();

    fs::remove_file(&path).await?;
    let manifest = scan_directory(&dir, settings.manifest_file_name(), settings.excluded_suffix()).await?;

    tokio::fs::write(&path, manifest.render())
        .await
        .fs_context("writing manifest", &path)?;
    log::info!(
        "Wrote {} with {} entr{}",
        path.display(),
        manifest.len(),
        if manifest.len() == 1 { "y" } else { "ies" }
    );

    Ok((path, manifest))
}
