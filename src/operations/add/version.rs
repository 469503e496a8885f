//! Manifest version selection for `add`

use crate::error::Result;
use crate::manifest::ManifestDocument;
use crate::manifest::versions;
use crate::project::ProjectOptions;

/// Pick the token of the manifest version to mutate with
///
/// The first available source wins: the `--manifest-version` display value,
/// the version token recorded in the project options, the version whose
/// schema URL the manifest declares, and finally the table default.
///
/// # Errors
/// Returns `InvalidVersion` when the flag or the recorded token names no
/// supported version.
pub fn resolve_manifest_version(
    requested: Option<&str>,
    options: &ProjectOptions,
    manifest: &ManifestDocument,
) -> Result<&'static str> {
    if let Some(value) = requested {
        return versions::version_from_value(value);
    }
    if let Some(token) = options.manifest_version.as_deref() {
        return versions::entry(token).map(|entry| entry.version);
    }
    let entry =
        versions::version_from_schema(&manifest.value).unwrap_or_else(versions::default_version);
    Ok(entry.version)
}
