//! Configuration errors

use super::HostwireError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> HostwireError {
    HostwireError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> HostwireError {
    HostwireError::ConfigInvalid {
        message: message.into(),
    }
}
