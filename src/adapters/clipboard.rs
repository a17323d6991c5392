use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::config::ClipboardConfig;
use crate::interact::copy::{Clipboard, ClipboardError};

/// Clipboard backed by an external program that reads the text on stdin
/// (`pbcopy`, `xclip`, `wl-copy`, ...).
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &ClipboardConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.program.trim().is_empty() {
            return Err(ClipboardError::Unavailable(
                "no clipboard command configured".to_string(),
            ));
        }
        debug!(program = %self.program, bytes = text.len(), "writing to clipboard");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // A program that exits early closes the pipe; its status decides.
            if let Err(err) = stdin.write_all(text.as_bytes()).await {
                if err.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(err.into());
                }
            }
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ClipboardError::Status(status.code().unwrap_or(-1)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_command() {
        let clipboard = CommandClipboard::new("cat", vec![]);
        clipboard.write_text("MoonTkn4Xq9vR2bHk7LwP3sYdE8fGjN5cZaU1tWmQx").await.unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_command_reports_status() {
        let clipboard = CommandClipboard::new("false", vec![]);
        let err = clipboard.write_text("abc").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Status(1)));
    }

    #[tokio::test]
    async fn test_empty_command_is_unavailable() {
        let clipboard = CommandClipboard::new("", vec![]);
        let err = clipboard.write_text("abc").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_missing_program_fails_to_spawn() {
        let clipboard = CommandClipboard::new("token-report-no-such-clipboard", vec![]);
        let err = clipboard.write_text("abc").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Spawn(_)));
    }
}
