//! Identifier resolution errors

use super::HostwireError;

/// Creates a resolution failed error
pub fn resolution_failed(token: impl Into<String>, reason: impl Into<String>) -> HostwireError {
    HostwireError::ResolutionFailed {
        token: token.into(),
        reason: reason.into(),
    }
}
