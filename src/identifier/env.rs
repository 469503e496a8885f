//! Environment lookup for identifier resolution
//!
//! Bot ids are usually stored in the project's `.env` file and referenced from
//! the sources and the manifest. Lookups consult the process environment
//! first and fall back to `.env`, so an exported variable wins over the file.

use std::collections::HashMap;
use std::path::Path;

use crate::common::fs::read_text_if_exists;
use crate::error::Result;

/// Name of the dotenv file at the project root
pub const DOTENV_FILE: &str = ".env";

/// Source of environment variables
pub trait EnvLookup {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// The environment of the running process
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Process environment overlaid on the project's `.env` values
#[derive(Debug, Default, Clone)]
pub struct ProjectEnv {
    dotenv: HashMap<String, String>,
}

impl ProjectEnv {
    /// Load `.env` from the project root; a missing file yields an empty overlay
    pub fn load(project_root: &Path) -> Result<Self> {
        let dotenv = read_text_if_exists(&project_root.join(DOTENV_FILE))?
            .map(|text| parse_dotenv(&text))
            .unwrap_or_default();
        Ok(Self { dotenv })
    }

    #[cfg(test)]
    pub fn from_dotenv(dotenv: HashMap<String, String>) -> Self {
        Self { dotenv }
    }
}

impl EnvLookup for ProjectEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        ProcessEnv
            .lookup(name)
            .or_else(|| self.dotenv.get(name).cloned())
    }
}

/// Parse `.env` text with dotenv semantics
///
/// Quoted values may span lines and double-quoted values expand escapes.
/// Lines that fail to parse are skipped.
pub fn parse_dotenv(text: &str) -> HashMap<String, String> {
    dotenvy::from_read_iter(text.as_bytes())
        .filter_map(std::result::Result::ok)
        .collect()
}
