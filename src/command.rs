//! External Commands
//!
//! Runs system commands with captured output and a fixed timeout.
//! A command that exits non-zero is a normal, inspectable outcome;
//! failing to launch or timing out is an error.

use std::process::Stdio;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// Upper bound on any single external command.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(300);

/// Captured result of a finished command.
#[derive(Debug)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run a program with arguments and capture its output.
///
/// Returns `Err` if the program cannot be launched or exceeds
/// [`COMMAND_TIMEOUT`]. A non-zero exit lands in `CommandOutput` with
/// `success == false` and the trimmed stderr preserved for display.
pub async fn run(program: &str, args: &[&str]) -> Result<CommandOutput> {
    debug!(program, ?args, "running command");

    let pending = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output();

    let output = timeout(COMMAND_TIMEOUT, pending)
        .await
        .map_err(|_| {
            anyhow!(
                "`{}` timed out after {} seconds",
                program,
                COMMAND_TIMEOUT.as_secs()
            )
        })?
        .with_context(|| format!("Failed to execute {}", program))?;

    Ok(CommandOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

/// Run a full shell command line through the platform shell.
/// Needed for the piped NodeSource bootstrap on Linux.
pub async fn run_shell(script: &str) -> Result<CommandOutput> {
    if cfg!(windows) {
        run("cmd", &["/C", script]).await
    } else {
        run("sh", &["-c", script]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let out = run("echo", &["hello"]).await.unwrap();
        assert!(out.success);
        assert_eq!(out.stdout, "hello");
    }

    #[tokio::test]
    async fn test_run_missing_program_is_error() {
        assert!(run("definitely-not-a-real-binary", &[]).await.is_err());
    }

    #[tokio::test]
    async fn test_run_shell_reports_nonzero_exit() {
        let out = run_shell("exit 3").await.unwrap();
        assert!(!out.success);
    }

    #[tokio::test]
    async fn test_run_shell_captures_stderr() {
        let out = run_shell("echo oops >&2; exit 1").await.unwrap();
        assert!(!out.success);
        assert_eq!(out.stderr, "oops");
    }
}
