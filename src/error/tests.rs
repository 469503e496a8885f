//! Error type tests
//!
//! Tests for HostwireError enum, its constructors and conversions.

use crate::error::HostwireError;
use crate::error::{config, fs, host, identifier, manifest, source};
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = HostwireError::InvalidVersion {
        value: "2.0".to_string(),
    };
    assert_eq!(err.to_string(), "Invalid manifest version: 2.0");
}

#[test]
fn test_error_code() {
    let err = host::not_found("src/app/**/*.ts", "abc");
    assert_eq!(
        err.code()
            .map(|c: Box<dyn std::fmt::Display>| c.to_string()),
        Some("hostwire::host::not_found".to_string())
    );
}

#[test]
fn test_resolution_help_mentions_placeholder_syntax() {
    let err = identifier::resolution_failed("{{BOT_ID}}", "variable is not set");
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("{{VARIABLE}}"), "got: {help}");
}

#[test]
fn test_malformed_host_is_warning() {
    let err = host::malformed("MyBot", "no constructor");
    assert_eq!(err.severity(), Some(miette::Severity::Warning));
    assert_eq!(manifest::invalid_version("x").severity(), None);
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: HostwireError = io_err.into();
    assert!(matches!(err, HostwireError::IoError { .. }));
}

#[test]
fn test_json_error_conversion() {
    let parse_result: std::result::Result<serde_json::Value, _> =
        serde_json::from_str("invalid json content");
    let err: HostwireError = parse_result.unwrap_err().into();
    assert!(matches!(err, HostwireError::ConfigParseFailed { .. }));
}

test_error_contains!(
    test_resolution_failed,
    identifier::resolution_failed("process.env.BOT_ID", "variable is not set"),
    "process.env.BOT_ID",
    "variable is not set"
);

test_error_contains!(
    test_unsupported_schema,
    manifest::unsupported_schema("https://example.com/schema.json"),
    "Unsupported manifest schema",
    "https://example.com/schema.json"
);

test_error_contains!(
    test_manifest_invalid,
    manifest::invalid("composeExtensions is not an array"),
    "Invalid manifest"
);

test_error_contains!(
    test_host_not_found,
    host::not_found("src/app/**/*.ts", "11111111-1111-1111-1111-111111111111"),
    "src/app/**/*.ts",
    "11111111-1111-1111-1111-111111111111"
);

test_error_contains!(
    test_parse_failed,
    source::parse_failed("src/app/myBot/MyBot.ts", 3, 7),
    "src/app/myBot/MyBot.ts at 3:7"
);

test_error_contains!(
    test_parser_unavailable,
    source::parser_unavailable("incompatible language version"),
    "parser unavailable",
    "incompatible language version"
);

test_error_contains!(
    test_config_parse_failed,
    config::parse_failed(".yo-rc.json", "expected value"),
    "Failed to parse configuration file"
);

test_error_contains!(
    test_config_invalid,
    config::invalid("name must not be empty"),
    "Invalid configuration"
);

test_error_contains!(
    test_file_not_found,
    fs::not_found("src/manifest/manifest.json"),
    "File not found"
);

test_error_contains!(
    test_file_read_failed,
    fs::read_failed("/path/to/file.txt", "permission denied"),
    "Failed to read file"
);

test_error_contains!(
    test_file_write_failed,
    fs::write_failed("/path/to/file.txt", "disk full"),
    "Failed to write file"
);
