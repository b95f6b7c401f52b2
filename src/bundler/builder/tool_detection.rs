//! Host tool detection.
//!
//! Finds the platform's folder opener once and caches the result.

use std::path::PathBuf;
use std::sync::LazyLock;

/// Candidate folder openers for the host OS, in preference order.
fn opener_candidates() -> &'static [&'static str] {
    if cfg!(target_os = "windows") {
        &["explorer"]
    } else if cfg!(target_os = "macos") {
        &["open"]
    } else {
        &["xdg-open", "gio", "gnome-open", "kde-open"]
    }
}

/// Path of the first available folder opener, if any.
///
/// Cached result to avoid repeated PATH lookups.
pub static FOLDER_OPENER: LazyLock<Option<PathBuf>> = LazyLock::new(|| {
    for candidate in opener_candidates() {
        match which::which(candidate) {
            Ok(path) => {
                log::debug!("Found folder opener at: {}", path.display());
                return Some(path);
            }
            Err(e) => log::debug!("{} not found in PATH: {}", candidate, e),
        }
    }
    log::warn!(
        "No folder opener found (tried {}).",
        opener_candidates().join(", ")
    );
    None
});

/// Arguments the opener needs before the folder path.
pub fn opener_args(opener: &std::path::Path) -> &'static [&'static str] {
    match opener.file_stem().and_then(|s| s.to_str()) {
        Some("gio") => &["open"],
        _ => &[],
    }
}
