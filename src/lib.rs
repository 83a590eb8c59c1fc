/*!
 * # scriptclip - page-by-page dialogue copier for comic scripts
 *
 * Extracts speaker dialogue from a script organized by `【Page N】` markers
 * and copies a chosen page's lines to the system clipboard.
 *
 * ## Script format
 *
 * ```text
 * 【Page 1】
 * [Panel 1]
 * Alice「Hello」
 * （Alice waves）
 * 【Page 2】
 * Bob「Goodbye」
 * ```
 *
 * Lines starting with `（` or `[` are annotations and never yield dialogue.
 *
 * ## Architecture
 *
 * - `script_parser`: line classification and the page table
 * - `presenter`: list view and copy report rendering
 * - `clipboard`: clipboard sink trait and the OS command implementation
 * - `app_controller`: ties parsing, rendering and copying together
 * - `app_config`: optional JSON configuration
 * - `file_utils`: script file access
 * - `errors`: error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod clipboard;
pub mod errors;
pub mod file_utils;
pub mod presenter;
pub mod script_parser;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, Mode};
pub use clipboard::{ClipboardSink, SystemClipboard};
pub use errors::{ClipboardError, ConfigError, ScriptError};
pub use script_parser::{PageNumber, PageTable, ScriptParser};
