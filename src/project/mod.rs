//! Teams app project layout
//!
//! This module handles:
//! - Locating the project root (from `--workspace` or the current directory)
//! - Well-known project paths (manifest, app sources, client script barrel)
//! - The project options store ([`options`])
//! - The message extension descriptor ([`component`])

pub mod component;
pub mod options;

use std::path::{Path, PathBuf};

pub use component::{ComponentDescriptor, HostKind};
pub use options::ProjectOptions;

use crate::error::{HostwireError, Result};

/// Manifest location relative to the project root
pub const MANIFEST_PATH: &str = "src/manifest/manifest.json";

/// Glob selecting the server-side sources that may contain bots
pub const APP_SOURCES_GLOB: &str = "src/app/**/*.ts";

/// Barrel module re-exporting the client-side components
pub const CLIENT_SCRIPT_PATH: &str = "src/app/scripts/client.ts";

/// An opened Teams app project
#[derive(Debug, Clone)]
pub struct Project {
    /// Absolute project root
    pub root: PathBuf,
    /// Options recorded by the project generator
    pub options: ProjectOptions,
}

impl Project {
    /// Open the project at `workspace`, or at the current directory
    pub fn open(workspace: Option<PathBuf>) -> Result<Self> {
        let root = resolve_root(workspace)?;
        let options = ProjectOptions::load(&root)?;
        Ok(Self { root, options })
    }

    /// Absolute path of a project-relative path
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path(MANIFEST_PATH)
    }

    pub fn client_script_path(&self) -> PathBuf {
        self.path(CLIENT_SCRIPT_PATH)
    }
}

fn resolve_root(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let path = match workspace {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| HostwireError::IoError {
            message: format!("Failed to get current directory: {e}"),
        })?,
    };
    if !path.is_dir() {
        return Err(HostwireError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    dunce::canonicalize(&path).map_err(|e| HostwireError::IoError {
        message: format!("Failed to resolve {}: {e}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_explicit_workspace() {
        let temp = TempDir::new().unwrap();
        let project = Project::open(Some(temp.path().to_path_buf())).unwrap();
        assert!(project.root.is_absolute());
        assert!(project.manifest_path().ends_with("src/manifest/manifest.json"));
        assert!(project.client_script_path().ends_with("src/app/scripts/client.ts"));
    }

    #[test]
    fn test_open_missing_workspace() {
        let temp = TempDir::new().unwrap();
        let result = Project::open(Some(temp.path().join("nope")));
        assert!(matches!(result, Err(HostwireError::FileNotFound { .. })));
    }
}
