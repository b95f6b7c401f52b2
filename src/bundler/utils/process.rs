//! External tool execution.

use crate::bundler::{Error, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

/// Runs `program` with `args` in `cwd`, streaming its output to the log.
///
/// Stdout lines are logged at info, stderr lines at warn. A spawn failure or
/// a non-zero exit status becomes [`Error::ToolFailed`].
pub async fn run_streaming(program: &str, args: &[String], cwd: &Path) -> Result<()> {
    let command_line = std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ");
    log::info!("Running: {}", command_line);

    let mut child = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::ToolFailed {
            command: command_line.clone(),
            reason: e.to_string(),
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Drain both pipes together so neither side blocks on a full buffer
    tokio::join!(
        drain_lines(stdout, program, log::Level::Info),
        drain_lines(stderr, program, log::Level::Warn)
    );

    let status = child.wait().await.map_err(|e| Error::ToolFailed {
        command: command_line.clone(),
        reason: e.to_string(),
    })?;

    if !status.success() {
        return Err(Error::ToolFailed {
            command: command_line,
            reason: match status.code() {
                Some(code) => format!("exited with status {code}"),
                None => "terminated by signal".to_string(),
            },
        });
    }

    Ok(())
}

/// Logs every line of `pipe` until EOF.
///
/// Lines are split on raw `\n` bytes and decoded lossily; bytes that are not
/// UTF-8 never end the read.
async fn drain_lines<R: AsyncRead + Unpin>(pipe: Option<R>, program: &str, level: log::Level) {
    let Some(pipe) = pipe else {
        return;
    };
    let mut reader = BufReader::new(pipe);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                log::log!(level, "[{}] {}", program, line.trim_end_matches(['\r', '\n']));
            }
            Err(e) => {
                log::debug!("[{}] stopped reading output: {}", program, e);
                break;
            }
        }
    }
}
