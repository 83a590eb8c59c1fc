use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use log::debug;

use crate::errors::ConfigError;
use crate::presenter::DEFAULT_PREVIEW_CHARS;

/// Application configuration module
/// This module handles loading and validating the optional JSON settings file.
/// Every field has a default, so a partial file is accepted.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Clipboard command settings
    #[serde(default)]
    pub clipboard: ClipboardConfig,

    /// List view settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Clipboard command configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClipboardConfig {
    // @field: Program receiving the text on stdin
    #[serde(default = "default_clipboard_command")]
    pub command: String,

    // @field: Extra arguments for the program
    #[serde(default)]
    pub args: Vec<String>,

    // @field: Value forced into LANG for the child process
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            command: default_clipboard_command(),
            args: Vec::new(),
            locale: default_locale(),
        }
    }
}

/// List view configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Characters shown per dialogue before the ellipsis
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_chars: default_preview_chars(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_clipboard_command() -> String {
    "pbcopy".to_string()
}

fn default_locale() -> String {
    "en_US.UTF-8".to_string()
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Resolve the configuration to use
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// used when present and the defaults otherwise.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Per-user config location, e.g. ~/.config/scriptclip/conf.json
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scriptclip").join("conf.json"))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clipboard.command.trim().is_empty() {
            return Err(ConfigError::Invalid("clipboard command must not be empty".to_string()));
        }

        if self.clipboard.locale.trim().is_empty() {
            return Err(ConfigError::Invalid("clipboard locale must not be empty".to_string()));
        }

        if self.display.preview_chars == 0 {
            return Err(ConfigError::Invalid("display.preview_chars must be at least 1".to_string()));
        }

        Ok(())
    }
}
