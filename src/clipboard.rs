use std::io::Write;
use std::process::{Command, Stdio};
use log::debug;

use crate::app_config::ClipboardConfig;
use crate::errors::ClipboardError;

// @module: Clipboard sink backed by an OS clipboard command

/// Destination for copied dialogue text
pub trait ClipboardSink {
    /// Place the text on the clipboard
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Pipes text into the platform clipboard command (pbcopy by default)
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    command: String,
    args: Vec<String>,
    locale: String,
}

impl SystemClipboard {
    pub fn new(command: impl Into<String>, args: Vec<String>, locale: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args,
            locale: locale.into(),
        }
    }

    pub fn from_config(config: &ClipboardConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone(), config.locale.clone())
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::from_config(&ClipboardConfig::default())
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        debug!("Copying {} bytes via {}", text.len(), self.command);

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .env("LANG", &self.locale)
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        // stdin is dropped with the match arm so the command sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        // Reap the child even when the write failed
        let status = child.wait()?;
        written?;
        if !status.success() {
            return Err(ClipboardError::CommandFailed {
                command: self.command.clone(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
