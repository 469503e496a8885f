//! Supported manifest versions
//!
//! A static table maps each manifest version token to its schema URL, the
//! value users type, and the strategy that knows how to mutate manifests of
//! that version. Supporting a new version means adding one row and one
//! strategy constructor; callers only ever go through [`create_mutator`].

use serde_json::Value as JsonValue;

use super::mutator::{ManifestMutator, PreviewMutator, StableMutator};
use crate::error::{Result, manifest::invalid_version};

/// A row of the version table
#[derive(Debug, Clone, Copy)]
pub struct ManifestVersionEntry {
    /// Version token stored in the project options (e.g. `v1.9`)
    pub version: &'static str,
    /// Value of `$schema` in manifests of this version
    pub schema_url: &'static str,
    /// Value shown to and typed by users (e.g. `1.9`)
    pub display_value: &'static str,
    /// Used when nothing else selects a version
    pub default: bool,
    /// Not listed by `hostwire versions`
    pub hidden: bool,
    create: fn() -> Box<dyn ManifestMutator>,
}

impl ManifestVersionEntry {
    /// Instantiate the mutation strategy of this version
    pub fn mutator(&self) -> Box<dyn ManifestMutator> {
        (self.create)()
    }
}

fn v18() -> Box<dyn ManifestMutator> {
    Box::new(StableMutator::new("v1.8"))
}

fn v19() -> Box<dyn ManifestMutator> {
    Box::new(StableMutator::new("v1.9"))
}

fn v110() -> Box<dyn ManifestMutator> {
    Box::new(StableMutator::new("v1.10"))
}

fn v111() -> Box<dyn ManifestMutator> {
    Box::new(StableMutator::new("v1.11"))
}

fn dev_preview() -> Box<dyn ManifestMutator> {
    Box::new(PreviewMutator)
}

/// All supported versions, oldest first
pub const SUPPORTED_VERSIONS: &[ManifestVersionEntry] = &[
    ManifestVersionEntry {
        version: "v1.8",
        schema_url: "https://developer.microsoft.com/en-us/json-schemas/teams/v1.8/MicrosoftTeams.schema.json",
        display_value: "1.8",
        default: false,
        hidden: false,
        create: v18,
    },
    ManifestVersionEntry {
        version: "v1.9",
        schema_url: "https://developer.microsoft.com/en-us/json-schemas/teams/v1.9/MicrosoftTeams.schema.json",
        display_value: "1.9",
        default: true,
        hidden: false,
        create: v19,
    },
    ManifestVersionEntry {
        version: "v1.10",
        schema_url: "https://developer.microsoft.com/en-us/json-schemas/teams/v1.10/MicrosoftTeams.schema.json",
        display_value: "1.10",
        default: false,
        hidden: false,
        create: v110,
    },
    ManifestVersionEntry {
        version: "v1.11",
        schema_url: "https://developer.microsoft.com/en-us/json-schemas/teams/v1.11/MicrosoftTeams.schema.json",
        display_value: "1.11",
        default: false,
        hidden: false,
        create: v111,
    },
    ManifestVersionEntry {
        version: "devPreview",
        schema_url: "https://raw.githubusercontent.com/OfficeDev/microsoft-teams-app-schema/preview/DevPreview/MicrosoftTeams.schema.json",
        display_value: "devPreview",
        default: false,
        hidden: false,
        create: dev_preview,
    },
];

/// Map a user-facing value (e.g. `1.9`) to its version token
///
/// # Errors
/// Returns `InvalidVersion` unless exactly one entry has that display value.
pub fn version_from_value(value: &str) -> Result<&'static str> {
    let mut matches = SUPPORTED_VERSIONS
        .iter()
        .filter(|entry| entry.display_value == value);
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(entry.version),
        _ => Err(invalid_version(value)),
    }
}

/// Look up the table entry of a version token
pub fn entry(version: &str) -> Result<&'static ManifestVersionEntry> {
    SUPPORTED_VERSIONS
        .iter()
        .find(|entry| entry.version == version)
        .ok_or_else(|| invalid_version(version))
}

/// Create the mutation strategy bound to a version token
///
/// # Errors
/// Returns `InvalidVersion` for unknown tokens.
pub fn create_mutator(version: &str) -> Result<Box<dyn ManifestMutator>> {
    entry(version).map(ManifestVersionEntry::mutator)
}

/// The entry used when nothing else selects a version
pub fn default_version() -> &'static ManifestVersionEntry {
    SUPPORTED_VERSIONS
        .iter()
        .find(|entry| entry.default)
        .unwrap_or(&SUPPORTED_VERSIONS[SUPPORTED_VERSIONS.len() - 1])
}

/// Entries listed to users
pub fn visible_versions() -> impl Iterator<Item = &'static ManifestVersionEntry> {
    SUPPORTED_VERSIONS.iter().filter(|entry| !entry.hidden)
}

/// The entry whose schema URL a manifest declares, if any
pub fn version_from_schema(manifest: &JsonValue) -> Option<&'static ManifestVersionEntry> {
    let schema = manifest.get("$schema")?.as_str()?;
    SUPPORTED_VERSIONS
        .iter()
        .find(|entry| entry.schema_url == schema)
}

/// Check that a manifest declares a known schema
///
/// A manifest without `$schema` is assumed compatible.
pub fn is_schema_recognized(manifest: &JsonValue) -> bool {
    match manifest.get("$schema") {
        None => true,
        Some(_) => version_from_schema(manifest).is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_table_invariants() {
        let tokens: HashSet<_> = SUPPORTED_VERSIONS.iter().map(|e| e.version).collect();
        assert_eq!(tokens.len(), SUPPORTED_VERSIONS.len());
        assert_eq!(SUPPORTED_VERSIONS.iter().filter(|e| e.default).count(), 1);
        assert_eq!(default_version().version, "v1.9");
    }

    #[test]
    fn test_version_from_value_all_entries() {
        for entry in SUPPORTED_VERSIONS {
            assert_eq!(version_from_value(entry.display_value).unwrap(), entry.version);
        }
    }

    #[test]
    fn test_version_from_value_unknown() {
        for value in ["1.7", "v1.9", "", "DEVPREVIEW"] {
            let err = version_from_value(value).unwrap_err();
            assert!(matches!(err, crate::error::HostwireError::InvalidVersion { .. }));
        }
    }

    #[test]
    fn test_create_mutator() {
        for entry in SUPPORTED_VERSIONS {
            assert_eq!(create_mutator(entry.version).unwrap().version(), entry.version);
        }
        assert!(create_mutator("v2.0").is_err());
    }

    #[test]
    fn test_only_preview_supports_actions() {
        assert!(create_mutator("devPreview").unwrap().supports_action());
        assert!(!create_mutator("v1.11").unwrap().supports_action());
    }

    #[test]
    fn test_schema_recognition() {
        assert!(is_schema_recognized(&json!({"manifestVersion": "1.9"})));
        for entry in SUPPORTED_VERSIONS {
            assert!(is_schema_recognized(&json!({"$schema": entry.schema_url})));
        }
        assert!(!is_schema_recognized(&json!({
            "$schema": "https://developer.microsoft.com/en-us/json-schemas/teams/v1.5/MicrosoftTeams.schema.json"
        })));
        assert!(!is_schema_recognized(&json!({"$schema": 19})));
    }

    #[test]
    fn test_version_from_schema() {
        let manifest = json!({"$schema": SUPPORTED_VERSIONS[2].schema_url});
        assert_eq!(version_from_schema(&manifest).unwrap().version, "v1.10");
        assert!(version_from_schema(&json!({})).is_none());
    }
}
