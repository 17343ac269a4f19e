//! Production runner backed by `tokio::process`

use super::{CommandOutput, CommandRunner, RenderCommand};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Spawns the renderer as a child process and waits for it
///
/// There is no timeout: a renderer that never exits stalls the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, command: &RenderCommand) -> std::io::Result<CommandOutput> {
        tracing::debug!(command = %command, "Spawning renderer");

        let output = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
