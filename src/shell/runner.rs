//! Runs a generated command through the system shell.
//!
//! The safety classification is consulted before this point and is purely
//! advisory; a nonzero exit here is the natural outcome of running an
//! arbitrary shell command, not a tool defect.

use tokio::process::Command;
use tracing::info;

use crate::error::Error;

/// Execute `command` through the system shell and wait for it to finish.
///
/// stdin/stdout/stderr are inherited, so the child interacts with the
/// user's terminal directly. Returns an execution error when the command
/// cannot start or exits nonzero.
pub async fn run(command: &str) -> Result<(), Error> {
    info!(%command, "executing generated command");

    let status = shell_command(command)
        .status()
        .await
        .map_err(|e| Error::Execution(format!("failed to start command: {e}")))?;

    if status.success() {
        return Ok(());
    }

    match status.code() {
        Some(code) => Err(Error::Execution(format!(
            "command exited with status code {code}"
        ))),
        None => Err(Error::Execution(
            "command was terminated by a signal".to_string(),
        )),
    }
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}
