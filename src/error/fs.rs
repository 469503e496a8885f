//! File system errors

use super::HostwireError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> HostwireError {
    HostwireError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> HostwireError {
    HostwireError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> HostwireError {
    HostwireError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
