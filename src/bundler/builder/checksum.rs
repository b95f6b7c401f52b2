//! Artifact checksum calculation.
//!
//! Manifests identify staged files by the MD5 digest of their full content,
//! rendered as 32 lowercase hex characters.

use crate::bundler::{Result, error::ErrorExt};
use std::path::Path;

/// Calculates the MD5 checksum of a file.
///
/// # Arguments
///
/// * `path` - File to hash
///
/// # Returns
///
/// * `Ok(String)` - Lowercase hex digest (32 characters)
/// * `Err` - If the file cannot be read
pub async fn calculate_md5(path: &Path) -> Result<String> {
    let content = tokio::fs::read(path)
        .await
        .fs_context("reading file for hash calculation", path)?;
    Ok(md5_hex(&content))
}

/// MD5 of an in-memory buffer as lowercase hex.
pub fn md5_hex(content: &[u8]) -> String {
    format!("{:x}", md5::compute(content))
}
