//! Staged writes with all-or-nothing commit
//!
//! Every file the `add` workflow changes is computed in memory first and
//! staged here. Nothing touches the disk until [`Transaction::commit`], which
//! backs up the current contents, writes each file atomically (temp file in
//! the same directory, then rename) and restores the backups if any write
//! fails.
//!
//! ## Usage
//!
//! ```ignore
//! let mut transaction = Transaction::new();
//! transaction.stage(manifest_path, manifest_text, "register message extension");
//! transaction.stage(host_path, host_text, "wire message extension into MyBot");
//!
//! // Writes both files, or neither
//! let written = transaction.commit()?;
//! ```

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Result, fs::read_failed, fs::write_failed};

/// A file write waiting for commit
#[derive(Debug, Clone)]
pub struct StagedWrite {
    pub path: PathBuf,
    pub content: String,
    /// What the write does, for reporting
    pub description: String,
}

/// Content of a file before the transaction wrote it
#[derive(Debug, Clone)]
struct FileBackup {
    path: PathBuf,
    /// `None` when the file did not exist
    content: Option<Vec<u8>>,
}

/// A set of file writes committed together
#[derive(Debug, Default)]
pub struct Transaction {
    staged: Vec<StagedWrite>,

    /// Files written so far during commit
    written: Vec<FileBackup>,

    /// Directories created during commit
    created_dirs: Vec<PathBuf>,

    /// Whether the transaction has been committed
    committed: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a write, replacing an earlier one for the same path
    pub fn stage(
        &mut self,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
        description: impl Into<String>,
    ) {
        let write = StagedWrite {
            path: path.into(),
            content: content.into(),
            description: description.into(),
        };
        match self.staged.iter_mut().find(|s| s.path == write.path) {
            Some(existing) => *existing = write,
            None => self.staged.push(write),
        }
    }

    pub fn staged(&self) -> &[StagedWrite] {
        &self.staged
    }

    /// Write every staged file
    ///
    /// # Errors
    /// Returns the first read or write failure after restoring every file
    /// already written.
    pub fn commit(mut self) -> Result<Vec<PathBuf>> {
        let backups = self
            .staged
            .iter()
            .map(|staged| backup(&staged.path))
            .collect::<Result<Vec<_>>>()?;

        let staged = std::mem::take(&mut self.staged);
        for (write, backup) in staged.iter().zip(backups) {
            self.written.push(backup);
            if let Err(e) = self.write_atomic(&write.path, &write.content) {
                self.rollback();
                return Err(e);
            }
        }

        self.committed = true;
        Ok(staged.into_iter().map(|s| s.path).collect())
    }

    fn write_atomic(&mut self, path: &Path, content: &str) -> Result<()> {
        let fail = |e: std::io::Error| write_failed(path.display().to_string(), e.to_string());

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let missing: Vec<PathBuf> = dir
            .ancestors()
            .take_while(|a| !a.as_os_str().is_empty() && !a.exists())
            .map(Path::to_path_buf)
            .collect();
        fs::create_dir_all(dir).map_err(fail)?;
        self.created_dirs.extend(missing);

        let mut temp = NamedTempFile::new_in(dir).map_err(fail)?;
        temp.write_all(content.as_bytes()).map_err(fail)?;
        // Temp files are created owner-only; keep the mode of the file being replaced
        if let Ok(metadata) = fs::metadata(path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(fail)?;
        }
        temp.persist(path).map_err(|e| fail(e.error))?;
        Ok(())
    }

    /// Restore every file written so far, newest first
    fn rollback(&mut self) {
        for backup in self.written.drain(..).rev() {
            let restored = match &backup.content {
                Some(content) => fs::write(&backup.path, content),
                None => match fs::remove_file(&backup.path) {
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                    other => other,
                },
            };
            if let Err(e) = restored {
                eprintln!(
                    "Warning: Failed to restore {}: {}",
                    backup.path.display(),
                    e
                );
            }
        }

        // Deepest first; only empty directories are removed
        self.created_dirs
            .sort_by_key(|d| std::cmp::Reverse(d.components().count()));
        for dir in self.created_dirs.drain(..) {
            let _ = fs::remove_dir(dir);
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed && !self.written.is_empty() {
            self.rollback();
        }
    }
}

fn backup(path: &Path) -> Result<FileBackup> {
    let content = if path.exists() {
        Some(fs::read(path).map_err(|e| read_failed(path.display().to_string(), e.to_string()))?)
    } else {
        None
    };
    Ok(FileBackup {
        path: path.to_path_buf(),
        content,
    })
}
