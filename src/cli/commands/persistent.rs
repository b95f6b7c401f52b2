//! `open-persistent`: reveal the runtime persistent data folder.

use tokio::process::Command;

use crate::bundler::{Error, Settings, builder::tool_detection};
use crate::cli::RuntimeConfig;
use crate::error::Result;

/// Opens (or prints) the persistent data folder for the configured
/// company and product.
pub async fn open_persistent(settings: &Settings, print: bool, config: &RuntimeConfig) -> Result<i32> {
    let path = settings.persistent_data_path().ok_or_else(|| {
        Error::PersistentPath("cannot determine the home directory".to_string())
    })?;

    if print {
        println!("{}", path.display());
        return Ok(0);
    }

    if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
        return Err(Error::PersistentPath(format!(
            "{} does not exist yet; run the game once to create it",
            path.display()
        ))
        .into());
    }

    let opener = tool_detection::FOLDER_OPENER.as_ref().ok_or_else(|| {
        Error::PersistentPath(format!(
            "no folder opener found; the folder is {}",
            path.display()
        ))
    })?;

    config.progress(&format!("Opening {}", path.display()))?;
    let status = Command::new(opener)
        .args(tool_detection::opener_args(opener))
        .arg(&path)
        .status()
        .await?;

    // explorer.exe reports 1 even when the window opened
    if !status.success() && !cfg!(target_os = "windows") {
        return Err(Error::ToolFailed {
            command: format!("{} {}", opener.display(), path.display()),
            reason: format!("exited with {status}"),
        }
        .into());
    }

    Ok(0)
}
