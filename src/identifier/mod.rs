//! Bot id resolution
//!
//! A bot id is referenced in three shapes across a project:
//! - a literal GUID (`"11111111-1111-1111-1111-111111111111"`)
//! - a placeholder used by the manifest (`{{MICROSOFT_APP_ID}}`)
//! - an environment access in TypeScript (`process.env.MICROSOFT_APP_ID`)
//!
//! [`resolve`] turns any of them into the literal GUID. Only these patterns
//! are recognized; nothing is ever evaluated.

pub mod env;

pub use env::{EnvLookup, ProjectEnv};

use crate::error::{Result, identifier::resolution_failed};

/// The all-zero GUID
pub const EMPTY_GUID: &str = "00000000-0000-0000-0000-000000000000";

/// Check if a token is a hyphenated GUID (`8-4-4-4-12` hex digits)
pub fn is_guid(token: &str) -> bool {
    token.len() == 36 && uuid::Uuid::try_parse(token).is_ok()
}

/// How a token refers to its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierToken<'a> {
    /// Already a GUID
    Literal(&'a str),
    /// Indirect reference to the named environment variable
    EnvReference(&'a str),
}

impl<'a> IdentifierToken<'a> {
    /// Classify a token, or `None` when it matches no known pattern
    pub fn parse(token: &'a str) -> Option<Self> {
        let token = strip_quotes(token.trim());
        if is_guid(token) {
            return Some(Self::Literal(token));
        }
        let name = placeholder_name(token).or_else(|| process_env_name(token))?;
        is_env_name(name).then_some(Self::EnvReference(name))
    }
}

/// Resolve a token to a literal GUID
///
/// # Errors
/// Returns `ResolutionFailed` when the token matches no known pattern, the
/// variable is unset, or its value is not a GUID.
pub fn resolve(token: &str, env: &dyn EnvLookup) -> Result<String> {
    match IdentifierToken::parse(token) {
        Some(IdentifierToken::Literal(guid)) => Ok(guid.to_string()),
        Some(IdentifierToken::EnvReference(name)) => {
            let value = env
                .lookup(name)
                .ok_or_else(|| resolution_failed(token, format!("variable {name} is not set")))?;
            let value = value.trim();
            if is_guid(value) {
                Ok(value.to_string())
            } else {
                Err(resolution_failed(
                    token,
                    format!("variable {name} does not contain a GUID"),
                ))
            }
        }
        None => Err(resolution_failed(
            token,
            "not a GUID or an environment variable reference",
        )),
    }
}

/// Build the manifest placeholder for an environment variable
pub fn placeholder(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

fn strip_quotes(token: &str) -> &str {
    for quote in ['"', '\'', '`'] {
        if let Some(inner) = token
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    token
}

fn placeholder_name(token: &str) -> Option<&str> {
    token
        .strip_prefix("{{")
        .and_then(|rest| rest.strip_suffix("}}"))
        .map(str::trim)
}

fn process_env_name(token: &str) -> Option<&str> {
    let rest = token.strip_prefix("process.env")?.trim_start();
    if let Some(name) = rest.strip_prefix('.') {
        return Some(name.trim());
    }
    let inner = rest.strip_prefix('[')?.strip_suffix(']')?.trim();
    let unquoted = strip_quotes(inner);
    (unquoted.len() < inner.len()).then_some(unquoted)
}

fn is_env_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use env::ProcessEnv;
    use serial_test::serial;
    use std::collections::HashMap;

    const BOT_GUID: &str = "22222222-2222-2222-2222-222222222222";

    fn env_with_bot_id() -> HashMap<String, String> {
        HashMap::from([("BOT_ID".to_string(), BOT_GUID.to_string())])
    }

    #[test]
    fn test_is_guid() {
        assert!(is_guid("11111111-1111-1111-1111-111111111111"));
        assert!(is_guid("6F9619FF-8B86-D011-B42D-00C04FC964FF"));
        assert!(is_guid(EMPTY_GUID));
        assert!(!is_guid("6F9619FF8B86D011B42D00C04FC964FF"));
        assert!(!is_guid("{6F9619FF-8B86-D011-B42D-00C04FC964FF}"));
        assert!(!is_guid("not-a-guid"));
        assert!(!is_guid(""));
    }

    #[test]
    fn test_literal_returned_unchanged() {
        let env = HashMap::new();
        assert_eq!(
            resolve("11111111-1111-1111-1111-111111111111", &env).unwrap(),
            "11111111-1111-1111-1111-111111111111"
        );
        assert_eq!(
            resolve("\"11111111-1111-1111-1111-111111111111\"", &env).unwrap(),
            "11111111-1111-1111-1111-111111111111"
        );
    }

    #[test]
    fn test_placeholder_resolves_from_env() {
        assert_eq!(resolve("{{BOT_ID}}", &env_with_bot_id()).unwrap(), BOT_GUID);
    }

    #[test]
    fn test_process_env_forms() {
        let env = env_with_bot_id();
        assert_eq!(resolve("process.env.BOT_ID", &env).unwrap(), BOT_GUID);
        assert_eq!(resolve("process.env[\"BOT_ID\"]", &env).unwrap(), BOT_GUID);
        assert_eq!(resolve("process.env['BOT_ID']", &env).unwrap(), BOT_GUID);
    }

    #[test]
    fn test_unset_variable_fails() {
        let err = resolve("{{BOT_ID}}", &HashMap::new()).unwrap_err();
        assert!(matches!(err, crate::error::HostwireError::ResolutionFailed { .. }));
        assert!(err.to_string().contains("BOT_ID is not set"));
    }

    #[test]
    fn test_non_guid_value_fails() {
        let env = HashMap::from([("BOT_ID".to_string(), "my-bot".to_string())]);
        assert!(resolve("{{BOT_ID}}", &env).is_err());
    }

    #[test]
    fn test_expressions_are_not_evaluated() {
        let env = env_with_bot_id();
        for token in [
            "process.env.BOT_ID || \"x\"",
            "require('child_process').execSync('id')",
            "process.env[BOT_ID]",
            "{{BOT ID}}",
            "",
        ] {
            assert!(resolve(token, &env).is_err(), "{token} should not resolve");
        }
    }

    #[test]
    fn test_placeholder_builder() {
        assert_eq!(placeholder("MICROSOFT_APP_ID"), "{{MICROSOFT_APP_ID}}");
    }

    #[test]
    #[serial]
    fn test_process_environment_lookup() {
        // SAFETY: serialized with the other tests touching the process environment
        unsafe { std::env::set_var("HOSTWIRE_TEST_BOT_ID", BOT_GUID) };
        assert_eq!(resolve("{{HOSTWIRE_TEST_BOT_ID}}", &ProcessEnv).unwrap(), BOT_GUID);
        unsafe { std::env::remove_var("HOSTWIRE_TEST_BOT_ID") };
        assert!(resolve("{{HOSTWIRE_TEST_BOT_ID}}", &ProcessEnv).is_err());
    }
}
