/*!
 * Error types for the scriptclip application.
 *
 * Every failure the tool can hit is user-facing and terminal: the message is
 * printed once and the process exits non-zero. The enums below are defined
 * with the thiserror crate so the binary can wrap them in anyhow context.
 */

use std::path::PathBuf;
use thiserror::Error;

use crate::script_parser::PageNumber;

/// Errors that can occur while handing text to the OS clipboard
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// The clipboard command could not be started
    #[error("Failed to start clipboard command '{command}': {source}")]
    Spawn {
        /// Program that was invoked
        command: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Writing the text to the command's stdin failed
    #[error("Failed to write to clipboard command: {0}")]
    Write(#[from] std::io::Error),

    /// The clipboard command ran but reported failure
    #[error("Clipboard command '{command}' exited with status {status}")]
    CommandFailed {
        /// Program that was invoked
        command: String,
        /// Exit status as reported by the OS
        status: String,
    },
}

/// Errors raised while loading or validating the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for the expected shape
    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A config value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main application error type covering the script workflow
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The script path does not exist
    #[error("File not found: {0:?}")]
    FileNotFound(PathBuf),

    /// Parsing produced no page markers at all
    #[error("No pages found. Check that the script uses 【Page N】 markers")]
    NoPagesFound,

    /// The requested page has no marker in the script
    #[error("Page {page} not found. Available pages: {available:?}")]
    PageNotFound {
        /// Requested page number
        page: PageNumber,
        /// All page numbers in the script, ascending
        available: Vec<PageNumber>,
    },

    /// The requested page exists but carries no dialogue lines
    #[error("Page {0} has no dialogue")]
    PageHasNoDialogue(PageNumber),

    /// Neither --page nor --list was given
    #[error("Specify either --page or --list")]
    MissingMode,

    /// Reading the script failed for a reason other than a missing file
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// The clipboard sink failed
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}
