//! Common file system operations with unified error handling

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{HostwireError, Result};

/// Read a UTF-8 text file, mapping a missing file to `FileNotFound`
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => HostwireError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => HostwireError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    })
}

/// Read a UTF-8 text file if it exists
pub fn read_text_if_exists(path: &Path) -> Result<Option<String>> {
    match read_text(path) {
        Ok(text) => Ok(Some(text)),
        Err(HostwireError::FileNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Convert a path to a string with forward slashes, for glob matching and display
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
