//! Check operation module
//!
//! Validates that the project manifest declares a supported schema and that
//! the manifest version recorded in the project options exists.

use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::manifest::ManifestDocument;
use crate::manifest::versions::{self, ManifestVersionEntry};
use crate::project::{MANIFEST_PATH, Project};
use crate::ui::Reporter;

/// Outcome of a successful check
#[derive(Debug)]
pub struct CheckReport {
    /// Version matching the manifest's `$schema`, `None` without `$schema`
    pub schema_version: Option<&'static ManifestVersionEntry>,
    /// Version recorded in the project options
    pub configured_version: Option<&'static ManifestVersionEntry>,
    /// `(bot id, command count)` per compose extension
    pub extensions: Vec<(String, usize)>,
}

impl CheckReport {
    /// Whether the recorded version differs from the declared schema
    pub fn is_mismatched(&self) -> bool {
        match (self.schema_version, self.configured_version) {
            (Some(schema), Some(configured)) => schema.version != configured.version,
            _ => false,
        }
    }
}

/// High-level check operation
pub struct CheckOperation<'a> {
    project: &'a Project,
}

impl<'a> CheckOperation<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// Execute check operation
    ///
    /// # Errors
    /// `UnsupportedSchema` when `$schema` names no supported version and
    /// `InvalidVersion` when the project options record an unknown version.
    pub fn execute(&self, reporter: &dyn Reporter) -> Result<CheckReport> {
        let manifest = ManifestDocument::load(&self.project.manifest_path())?;
        manifest.ensure_schema_recognized()?;

        let configured_version = self
            .project
            .options
            .manifest_version
            .as_deref()
            .map(versions::entry)
            .transpose()?;

        let report = CheckReport {
            schema_version: versions::version_from_schema(&manifest.value),
            configured_version,
            extensions: compose_extensions(&manifest.value),
        };
        print_report(reporter, &report);
        Ok(report)
    }
}

fn compose_extensions(manifest: &JsonValue) -> Vec<(String, usize)> {
    manifest
        .get("composeExtensions")
        .and_then(JsonValue::as_array)
        .into_iter()
        .flatten()
        .map(|extension| {
            let bot_id = extension
                .get("botId")
                .and_then(JsonValue::as_str)
                .unwrap_or_default()
                .to_string();
            let commands = extension
                .get("commands")
                .and_then(JsonValue::as_array)
                .map_or(0, Vec::len);
            (bot_id, commands)
        })
        .collect()
}

fn print_report(reporter: &dyn Reporter, report: &CheckReport) {
    match report.schema_version {
        Some(entry) => reporter.success(&format!(
            "{MANIFEST_PATH} uses manifest version {}",
            entry.display_value
        )),
        None => reporter.success(&format!(
            "{MANIFEST_PATH} declares no $schema, assuming a compatible manifest"
        )),
    }

    if report.is_mismatched() {
        if let (Some(schema), Some(configured)) =
            (report.schema_version, report.configured_version)
        {
            reporter.warn(&format!(
                "the project options record manifest version {} but the manifest declares {}",
                configured.display_value, schema.display_value
            ));
        }
    }

    for (bot_id, commands) in &report.extensions {
        reporter.detail(&format!("  bot {bot_id}: {commands} command(s)"));
    }
}
