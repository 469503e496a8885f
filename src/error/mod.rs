//! Error types and handling for hostwire
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`identifier`]: Bot id resolution errors
//! - [`manifest`]: Manifest version and schema errors
//! - [`host`]: Host class discovery errors
//! - [`source`]: TypeScript parse errors
//! - [`config`]: Project options errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod host;
pub mod identifier;
pub mod manifest;
pub mod source;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for hostwire operations
#[derive(Error, Diagnostic, Debug, Clone)]
pub enum HostwireError {
    // Identifier errors
    #[error("Unable to resolve bot id from '{token}': {reason}")]
    #[diagnostic(
        code(hostwire::identifier::resolution_failed),
        help(
            "Use a literal GUID, {{{{VARIABLE}}}} or process.env.VARIABLE, and make sure the variable is set in the environment or in .env"
        )
    )]
    ResolutionFailed { token: String, reason: String },

    // Manifest errors
    #[error("Invalid manifest version: {value}")]
    #[diagnostic(
        code(hostwire::manifest::invalid_version),
        help("Run 'hostwire versions' to list the supported manifest versions")
    )]
    InvalidVersion { value: String },

    #[error("Unsupported manifest schema: {schema}")]
    #[diagnostic(
        code(hostwire::manifest::unsupported_schema),
        help("Update the $schema of the manifest to one of the versions listed by 'hostwire versions'")
    )]
    UnsupportedSchema { schema: String },

    #[error("Invalid manifest: {message}")]
    #[diagnostic(code(hostwire::manifest::invalid))]
    ManifestInvalid { message: String },

    // Host errors
    #[error("Unable to locate a bot implementation matching '{key}' in {pattern}")]
    #[diagnostic(
        code(hostwire::host::not_found),
        help(
            "Verify that the third argument of @BotDeclaration is a valid GUID or a valid environment variable"
        )
    )]
    HostNotFound { pattern: String, key: String },

    #[error("Host class '{class_name}' is malformed: {reason}")]
    #[diagnostic(code(hostwire::host::malformed), severity(Warning))]
    MalformedHost { class_name: String, reason: String },

    // Source errors
    #[error("Failed to parse {path} at {line}:{column}")]
    #[diagnostic(
        code(hostwire::source::parse_failed),
        help("Fix the syntax error before running hostwire again; the file was not modified")
    )]
    SourceParseFailed {
        path: String,
        line: usize,
        column: usize,
    },

    #[error("TypeScript parser unavailable: {reason}")]
    #[diagnostic(code(hostwire::source::parser_unavailable))]
    ParserUnavailable { reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(hostwire::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(hostwire::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(hostwire::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(hostwire::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(hostwire::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(hostwire::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for HostwireError {
    fn from(err: std::io::Error) -> Self {
        HostwireError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for HostwireError {
    fn from(err: serde_json::Error) -> Self {
        HostwireError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, HostwireError>;

#[cfg(test)]
mod tests;
