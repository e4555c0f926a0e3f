//! Changelog output
//!
//! The entry is prepended by rewriting the whole file. The new content is
//! composed in memory, written to a temporary file next to the changelog,
//! synced, and renamed over the original. If anything fails before the rename
//! the changelog is left exactly as it was and the temporary file is removed.
//! An existing changelog keeps its permissions.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use prlog_core::{ChangelogError, Result};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

/// Destination for rendered changelog entries
pub trait ChangelogWriter {
    /// Place `entry` above all existing content
    fn prepend(&self, entry: &str) -> Result<()>;
}

/// New changelog content: the entry, one newline, then the previous content
pub fn compose_changelog(entry: &str, existing: &str) -> String {
    let mut content = String::with_capacity(entry.len() + 1 + existing.len());
    content.push_str(entry);
    content.push('\n');
    content.push_str(existing);
    content
}

/// Writes entries to a changelog file on disk
#[derive(Debug, Clone)]
pub struct FileChangelogWriter {
    path: PathBuf,
}

impl FileChangelogWriter {
    /// Create a writer for the given changelog path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Current changelog content, empty when the file does not exist yet
    pub fn read_existing(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "changelog does not exist yet");
                Ok(String::new())
            }
            Err(source) => Err(ChangelogError::ReadFailed {
                path: self.path.clone(),
                source,
            }
            .into()),
        }
    }

    fn write_atomic(&self, content: &str) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if !parent.exists() {
            fs::create_dir_all(&parent).map_err(|e| self.write_failed(e))?;
        }

        let mut temp_file = NamedTempFile::new_in(&parent).map_err(|e| self.write_failed(e))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| self.write_failed(e))?;
        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| self.write_failed(e))?;

        if let Ok(metadata) = fs::metadata(&self.path) {
            temp_file
                .as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| self.write_failed(e))?;
        }

        temp_file
            .persist(&self.path)
            .map_err(|e| self.write_failed(e.error))?;

        Ok(())
    }

    fn write_failed(&self, error: std::io::Error) -> ChangelogError {
        ChangelogError::WriteFailed {
            path: self.path.clone(),
            reason: error.to_string(),
        }
    }
}

impl ChangelogWriter for FileChangelogWriter {
    #[instrument(skip(self, entry), fields(path = %self.path.display(), entry_len = entry.len()))]
    fn prepend(&self, entry: &str) -> Result<()> {
        let existing = self.read_existing()?;
        let content = compose_changelog(entry, &existing);
        self.write_atomic(&content)?;
        info!(path = %self.path.display(), bytes = content.len(), "changelog updated");
        Ok(())
    }
}
