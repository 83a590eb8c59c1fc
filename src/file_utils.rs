use std::fs;
use std::path::Path;
use log::debug;

use crate::errors::ScriptError;

// @module: File utilities for script input

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    /// Read a script file as UTF-8, mapping a missing path to `FileNotFound`
    pub fn read_script<P: AsRef<Path>>(path: P) -> Result<String, ScriptError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScriptError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        debug!("Read {} bytes from {:?}", content.len(), path);
        Ok(content)
    }
}
