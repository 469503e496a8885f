//! Host class discovery errors

use super::HostwireError;

/// Creates a host not found error
pub fn not_found(pattern: impl Into<String>, key: impl Into<String>) -> HostwireError {
    HostwireError::HostNotFound {
        pattern: pattern.into(),
        key: key.into(),
    }
}

/// Creates a malformed host warning
pub fn malformed(class_name: impl Into<String>, reason: impl Into<String>) -> HostwireError {
    HostwireError::MalformedHost {
        class_name: class_name.into(),
        reason: reason.into(),
    }
}
