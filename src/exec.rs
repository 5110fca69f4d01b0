//! Shell command execution backing `/vuln/cmd`.
//!
//! The command string goes to the platform shell untouched. There is no
//! argument splitting, allow-list, or sandbox.

use std::io::{self, ErrorKind};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tokio::process::{Child, Command};

use crate::error::AppError;

#[cfg(not(windows))]
fn shell(cmd: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(cmd);
    command
}

#[cfg(windows)]
fn shell(cmd: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(cmd);
    command
}

/// Runs `cmd` through the shell and returns its stdout, one `\n` after each
/// line. With `timeout` set, the child is killed once it elapses.
///
/// A command the shell cannot find or execute is an error carrying the
/// shell's own message. Any other exit status is ignored.
pub async fn run_shell(cmd: &str, timeout: Option<Duration>) -> Result<String, AppError> {
    let mut child = shell(cmd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    match timeout {
        None => collect_output(&mut child).await,
        Some(limit) => match tokio::time::timeout(limit, collect_output(&mut child)).await {
            Ok(result) => result,
            Err(_) => {
                if let Err(e) = child.kill().await {
                    tracing::warn!(error = %e, "Failed to kill timed out command");
                }
                Err(AppError::CommandTimeout { limit })
            }
        },
    }
}

async fn collect_output(child: &mut Child) -> Result<String, AppError> {
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("stdout was not captured"))?;
    let stderr = child
        .stderr
        .take()
        .ok_or_else(|| io::Error::other("stderr was not captured"))?;

    let (output, errors) = tokio::try_join!(read_lines(stdout), read_lossy(stderr))?;

    let status = child.wait().await?;
    let errors = errors.trim_end();
    tracing::debug!(%status, stderr = errors, "Command exited");

    match launch_failure(status) {
        Some(kind) => Err(AppError::Command(io::Error::new(
            kind,
            format!("{status}: {errors}"),
        ))),
        None => Ok(output),
    }
}

async fn read_lines(stream: impl AsyncRead + Unpin) -> io::Result<String> {
    let mut lines = BufReader::new(stream).lines();
    let mut output = String::new();
    while let Some(line) = lines.next_line().await? {
        output.push_str(&line);
        output.push('\n');
    }
    Ok(output)
}

async fn read_lossy(mut stream: impl AsyncRead + Unpin) -> io::Result<String> {
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// POSIX shells exit with 127 when the command is not found and 126 when it
/// is found but cannot be executed.
fn launch_failure(status: ExitStatus) -> Option<ErrorKind> {
    match status.code() {
        Some(127) => Some(ErrorKind::NotFound),
        Some(126) => Some(ErrorKind::PermissionDenied),
        _ => None,
    }
}
