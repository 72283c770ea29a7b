//! Process execution seam
//!
//! Every external invocation goes through the [`CommandRunner`] trait so
//! the directory and dialer can be exercised without touching the host's
//! VPN tools.

use async_trait::async_trait;
use tokio::process::Command;

/// Failure of an external command, normalized to one message string
///
/// The message is the spawn error, or on non-zero exit the captured
/// stderr (falling back to stdout, then to the exit status).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessFailure {
    pub message: String,
}

impl ProcessFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ProcessFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Executes an external command and captures its trimmed stdout
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[&str]) -> Result<String, ProcessFailure>;
}

/// Production runner over `tokio::process::Command`
///
/// No timeout and no retry: an invocation that never returns hangs the
/// calling action, matching the underlying tools' contract.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<String, ProcessFailure> {
        tracing::debug!("Running command: {} {:?}", program, args);

        let output = Command::new(program)
            .args(args)
            .output()
            .await
            .map_err(|e| ProcessFailure::new(format!("Failed to run {}: {}", program, e)))?;

        if output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            return Ok(stdout.trim().to_string());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();

        let message = if !stderr.is_empty() {
            stderr
        } else if !stdout.is_empty() {
            stdout
        } else {
            format!("{} exited with {}", program, output.status)
        };

        tracing::debug!("Command {} failed: {}", program, message);
        Err(ProcessFailure::new(message))
    }
}
