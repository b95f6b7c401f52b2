//! File system utilities for staging.
//!
//! Provides idempotent directory creation/removal, overwriting copies and
//! suffix-based file discovery with contextual errors.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Creates all of the directories of the specified path.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Removes a file or directory tree, ignoring a missing path.
pub async fn remove_path(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path).await {
        Ok(meta) if meta.is_dir() => remove_dir_all(path).await,
        Ok(_) => remove_file(path).await,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).fs_context("inspecting path", path),
    }
}

/// Removes a file, ignoring a missing path.
pub async fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).fs_context("removing file", path),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// An existing destination file is overwritten. Fails if the source path is
/// a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading source file", from)?;
    if !metadata.is_file() {
        return Err(Error::GenericError(format!("{from:?} is not a file")));
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating destination directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", from)?;
    Ok(())
}

/// Recursively copies a directory from one path to another, creating any
/// parent directories of the destination path as necessary.
///
/// Symlinks are followed and their targets copied as regular content.
/// Fails if the source path is not a directory or doesn't exist.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading source directory", from)?;
    if !metadata.is_dir() {
        return Err(Error::GenericError(format!("{from:?} is not a Directory")));
    }

    // Clone paths for move into blocking closure
    let from = from.to_path_buf();
    let to = to.to_path_buf();

    // Offload blocking work to dedicated thread pool
    tokio::task::spawn_blocking(move || -> Result<()> {
        if let Some(parent) = to.parent() {
            std::fs::create_dir_all(parent).fs_context("creating destination directory", parent)?;
        }

        for entry in walkdir::WalkDir::new(&from).follow_links(true) {
            let entry = entry?;
            let rel_path = entry.path().strip_prefix(&from)?;
            let dest_path = to.join(rel_path);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest_path)
                    .fs_context("creating directory", &dest_path)?;
            } else {
                std::fs::copy(entry.path(), &dest_path).fs_context("copying file", entry.path())?;
            }
        }

        Ok(())
    })
    .await
    .map_err(|e| Error::GenericError(format!("Directory copy task panicked: {}", e)))?
}

/// Copies a file or a directory tree, whichever `from` is.
pub async fn copy_path(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from).await.fs_context("reading source", from)?;
    if metadata.is_dir() {
        copy_dir(from, to).await
    } else {
        copy_file(from, to).await
    }
}

/// Finds every file under `dir` (recursively) whose name ends with `suffix`.
///
/// Returns an empty list when `dir` does not exist.
pub async fn find_files_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    if !fs::try_exists(dir).await.unwrap_or(false) {
        return Ok(Vec::new());
    }

    let dir = dir.to_path_buf();
    let suffix = suffix.to_string();
    tokio::task::spawn_blocking(move || -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();
        for entry in walkdir::WalkDir::new(&dir) {
            let entry = entry?;
            if entry.file_type().is_file()
                && entry.file_name().to_string_lossy().ends_with(&suffix)
            {
                found.push(entry.into_path());
            }
        }
        found.sort();
        Ok(found)
    })
    .await
    .map_err(|e| Error::GenericError(format!("File search task panicked: {}", e)))?
}

/// Lists regular files directly inside `dir`, sorted by file name.
pub async fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir).await.fs_context("reading directory", dir)?;
    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("reading directory entry", dir)?
    {
        let file_type = entry
            .file_type()
            .await
            .fs_context("reading file type", entry.path())?;
        let path = entry.path();
        if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
