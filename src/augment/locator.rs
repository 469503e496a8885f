//! Marker-based host class discovery
//!
//! Bot classes are found by their `@BotDeclaration` decorator. The third
//! argument of the decorator is the bot id, which is resolved and used as the
//! correlation key when a message extension is attached to an existing bot.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use super::parser;
use super::plan::HOST_MARKER;
use crate::common::fs::{read_text, to_forward_slashes};
use crate::error::{HostwireError, Result, config, host, source};
use crate::identifier::{self, EnvLookup};
use crate::project::APP_SOURCES_GLOB;
use crate::ui::Reporter;

/// Position of the bot id among the marker's arguments
const KEY_ARGUMENT: usize = 2;

/// A class carrying the host marker with a resolved key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostClassReference {
    /// Path relative to the project root
    pub path: PathBuf,
    pub class_name: String,
    /// Resolved bot id
    pub key: String,
}

/// A marker-carrying class left out of the search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostExclusion {
    pub path: PathBuf,
    pub class_name: String,
    pub reason: String,
}

impl HostExclusion {
    pub fn to_warning(&self) -> HostwireError {
        host::malformed(
            &self.class_name,
            format!("{} ({})", self.reason, to_forward_slashes(&self.path)),
        )
    }
}

/// Everything a scan found
#[derive(Debug, Clone, Default)]
pub struct LocatorScan {
    /// Glob that selected the scanned files
    pub pattern: String,
    pub candidates: Vec<HostClassReference>,
    pub exclusions: Vec<HostExclusion>,
    /// Files scanned despite syntax errors
    pub parse_warnings: Vec<HostwireError>,
}

impl LocatorScan {
    /// The first candidate whose key equals `key`
    ///
    /// # Errors
    /// Returns `HostNotFound` naming the searched pattern and key.
    pub fn select(&self, key: &str) -> Result<&HostClassReference> {
        self.candidates
            .iter()
            .find(|candidate| candidate.key == key)
            .ok_or_else(|| host::not_found(&self.pattern, key))
    }

    /// Parse warnings followed by exclusions, as diagnostics
    pub fn warnings(&self) -> Vec<HostwireError> {
        self.parse_warnings
            .iter()
            .cloned()
            .chain(self.exclusions.iter().map(HostExclusion::to_warning))
            .collect()
    }
}

/// Scans project sources for classes carrying the host marker
pub struct DeclarationLocator<'a> {
    root: &'a Path,
    pattern: String,
    marker: String,
    env: &'a dyn EnvLookup,
}

impl<'a> DeclarationLocator<'a> {
    pub fn new(root: &'a Path, env: &'a dyn EnvLookup) -> Self {
        Self {
            root,
            pattern: APP_SOURCES_GLOB.to_string(),
            marker: HOST_MARKER.to_string(),
            env,
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Project-relative paths matching the pattern, in path order
    pub fn source_files(&self) -> Result<Vec<PathBuf>> {
        let glob = Glob::new(&self.pattern)
            .map_err(|e| config::invalid(format!("invalid glob '{}': {e}", self.pattern)))?;

        let files = WalkDir::new(self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.file_name() != "node_modules")
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let relative = e.path().strip_prefix(self.root).ok()?.to_path_buf();
                let candidate = to_forward_slashes(&relative);
                glob.matched(&CandidatePath::from(candidate.as_str()))
                    .is_some()
                    .then_some(relative)
            })
            .collect();
        Ok(files)
    }

    /// Collect every marker-carrying class with its resolved key
    ///
    /// Unreadable files abort the scan. Files with syntax errors are scanned
    /// best-effort and reported in `parse_warnings`.
    pub fn scan(&self) -> Result<LocatorScan> {
        let mut scan = LocatorScan {
            pattern: self.pattern.clone(),
            ..LocatorScan::default()
        };

        for relative in self.source_files()? {
            let text = read_text(&self.root.join(&relative))?;
            let parsed = parser::parse(&text)?;
            if let Some(position) = parsed.syntax_error {
                scan.parse_warnings.push(source::parse_failed(
                    to_forward_slashes(&relative),
                    position.line,
                    position.column,
                ));
            }

            for class in &parsed.tree.classes {
                let Some(decorator) = class.decorator(&self.marker) else {
                    continue;
                };
                let resolved = match decorator.arguments.get(KEY_ARGUMENT) {
                    Some(token) => identifier::resolve(token, self.env).map_err(|e| e.to_string()),
                    None => Err(format!("@{} has no bot id argument", self.marker)),
                };
                match resolved {
                    Ok(key) => scan.candidates.push(HostClassReference {
                        path: relative.clone(),
                        class_name: class.name.clone(),
                        key,
                    }),
                    Err(reason) => scan.exclusions.push(HostExclusion {
                        path: relative.clone(),
                        class_name: class.name.clone(),
                        reason,
                    }),
                }
            }
        }
        Ok(scan)
    }

    /// Resolve `target` and find the host class it identifies
    ///
    /// Exclusions and parse warnings of the scan are reported before the
    /// selection, so they are visible when nothing matches.
    ///
    /// # Errors
    /// `ResolutionFailed` when `target` cannot be resolved and `HostNotFound`
    /// when no candidate carries the resolved key.
    pub fn find_host(&self, target: &str, reporter: &dyn Reporter) -> Result<HostClassReference> {
        let key = identifier::resolve(target, self.env)?;
        let scan = self.scan()?;
        for warning in scan.warnings() {
            reporter.warn_diagnostic(&warning);
        }
        scan.select(&key).cloned()
    }
}
