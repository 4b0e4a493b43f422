use std::process::{
    ExitStatus,
    Stdio,
};

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

const TMUX: &str = "tmux";

/// One variant per orchestration step that can fail. Every variant is fatal
/// to the tool and maps to exit code 1; a half-created session is left for
/// tmux to own.
#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("failed to get stdin pipe to tmux")]
    StdinPipe,
    #[error("failed to start tmux session: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("failed to write script to tmux stdin: {0}")]
    WriteScript(#[source] std::io::Error),
    #[error("error closing tmux stdin: {0}")]
    CloseStdin(#[source] std::io::Error),
    #[error("error waiting for tmux: {0}")]
    Wait(#[source] std::io::Error),
    #[error("tmux new-session exited with {0}")]
    CreateStatus(ExitStatus),
    #[error("failed to attach to tmux session: {0}")]
    Attach(#[source] std::io::Error),
    #[error("tmux attach exited with {0}")]
    AttachStatus(ExitStatus),
}

/// The narrow seam to the external multiplexer. The session table lives in
/// tmux's process tree, never in this process.
#[async_trait]
pub trait Multiplexer {
    /// Whether a session with this name is already registered.
    async fn has_session(&self, name: &str) -> bool;

    /// Creates a detached session running a stdin-fed interpreter and
    /// streams `script` to it. Returns once the session is registered, not
    /// when the server inside it finishes.
    async fn new_session(&self, name: &str, script: &str) -> Result<(), TmuxError>;

    /// Connects the caller's terminal to the session. Blocks until the user
    /// detaches or the session ends.
    async fn attach(&self, name: &str) -> Result<(), TmuxError>;
}

/// Shells out to the `tmux` binary on PATH.
#[derive(Debug, Clone, Copy)]
pub struct Tmux;

#[async_trait]
impl Multiplexer for Tmux {
    async fn has_session(&self, name: &str) -> bool {
        let status = Command::new(TMUX)
            .args(["has-session", "-t", name])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;
        debug!(session = name, ?status, "tmux has-session probe");
        status.is_ok_and(|status| status.success())
    }

    async fn new_session(&self, name: &str, script: &str) -> Result<(), TmuxError> {
        let mut child = Command::new(TMUX)
            .args(["new", "-d", "-s", name, "bash", "-s"])
            .stdin(Stdio::piped())
            .spawn()
            .map_err(TmuxError::Spawn)?;

        let mut stdin = child.stdin.take().ok_or(TmuxError::StdinPipe)?;
        stdin.write_all(script.as_bytes()).await.map_err(TmuxError::WriteScript)?;
        // Shutting down before the drop lets a close failure surface with
        // its own message instead of vanishing.
        stdin.shutdown().await.map_err(TmuxError::CloseStdin)?;
        drop(stdin);

        let status = child.wait().await.map_err(TmuxError::Wait)?;
        if !status.success() {
            return Err(TmuxError::CreateStatus(status));
        }
        debug!(session = name, "tmux session created");
        Ok(())
    }

    async fn attach(&self, name: &str) -> Result<(), TmuxError> {
        let status = Command::new(TMUX)
            .args(["attach", "-t", name])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(TmuxError::Attach)?;
        if !status.success() {
            return Err(TmuxError::AttachStatus(status));
        }
        Ok(())
    }
}
