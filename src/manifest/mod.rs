//! Teams app manifest
//!
//! This module handles:
//! - Loading and serializing `manifest.json` ([`ManifestDocument`])
//! - The supported manifest versions ([`versions`])
//! - Version specific mutation strategies ([`mutator`])

pub mod mutator;
pub mod versions;

use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;

use versions::is_schema_recognized;

use crate::common::fs::read_text;
use crate::error::{Result, config, manifest};

/// An in-memory manifest document
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    /// Where the document was loaded from
    pub path: PathBuf,
    pub value: JsonValue,
}

impl ManifestDocument {
    /// Load a manifest from disk
    ///
    /// # Errors
    /// `FileNotFound` when the file is missing, `ConfigParseFailed` when it is
    /// not JSON, and `ManifestInvalid` when the root is not an object.
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_text(path)?;
        Self::parse(path, &text)
    }

    /// Parse manifest text read from `path`
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(text)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;
        if !value.is_object() {
            return Err(manifest::invalid(format!(
                "{} does not contain a JSON object",
                path.display()
            )));
        }
        Ok(Self {
            path: path.to_path_buf(),
            value,
        })
    }

    /// Fail unless the declared schema is one of the supported versions
    pub fn ensure_schema_recognized(&self) -> Result<()> {
        if is_schema_recognized(&self.value) {
            return Ok(());
        }
        let schema = match self.value.get("$schema") {
            Some(JsonValue::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        Err(manifest::unsupported_schema(schema))
    }

    /// Pretty printed text with a trailing newline
    pub fn to_text(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(&self.value).map_err(|e| {
            manifest::invalid(format!("failed to serialize manifest: {e}"))
        })?;
        text.push('\n');
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HostwireError;
    use tempfile::TempDir;

    #[test]
    fn test_load_and_serialize_preserves_key_order() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("manifest.json");
        std::fs::write(&path, r#"{"version":"1.0.0","$schema":"x","id":"abc"}"#).unwrap();

        let doc = ManifestDocument::load(&path).unwrap();
        let text = doc.to_text().unwrap();
        assert!(text.ends_with("}\n"));
        let version = text.find("\"version\"").unwrap();
        let schema = text.find("\"$schema\"").unwrap();
        let id = text.find("\"id\"").unwrap();
        assert!(version < schema && schema < id);
        assert!(text.contains("\n  \"id\": \"abc\""));
    }

    #[test]
    fn test_load_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let result = ManifestDocument::load(&temp.path().join("manifest.json"));
        assert!(matches!(result, Err(HostwireError::FileNotFound { .. })));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let path = Path::new("manifest.json");
        assert!(matches!(
            ManifestDocument::parse(path, "[1, 2]"),
            Err(HostwireError::ManifestInvalid { .. })
        ));
        assert!(matches!(
            ManifestDocument::parse(path, "{ not json"),
            Err(HostwireError::ConfigParseFailed { .. })
        ));
    }

    #[test]
    fn test_unsupported_schema() {
        let path = Path::new("manifest.json");
        let doc = ManifestDocument::parse(path, r#"{"$schema": "https://example.com/v1.5.json"}"#)
            .unwrap();
        let err = doc.ensure_schema_recognized().unwrap_err();
        assert!(err.to_string().contains("https://example.com/v1.5.json"));

        let doc = ManifestDocument::parse(path, "{}").unwrap();
        assert!(doc.ensure_schema_recognized().is_ok());
    }
}
