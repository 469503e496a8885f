//! Manifest errors

use super::HostwireError;

/// Creates an invalid manifest version error
pub fn invalid_version(value: impl Into<String>) -> HostwireError {
    HostwireError::InvalidVersion {
        value: value.into(),
    }
}

/// Creates an unsupported schema error
pub fn unsupported_schema(schema: impl Into<String>) -> HostwireError {
    HostwireError::UnsupportedSchema {
        schema: schema.into(),
    }
}

/// Creates an invalid manifest error
pub fn invalid(message: impl Into<String>) -> HostwireError {
    HostwireError::ManifestInvalid {
        message: message.into(),
    }
}
