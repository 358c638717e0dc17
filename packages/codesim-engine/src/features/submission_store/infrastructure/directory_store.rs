//! Directory-backed submission store
//!
//! Every regular, non-hidden file directly inside the directory is one
//! submission; its file name is the identifier.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::decode::decode_text;
use crate::errors::{CodesimError, Result};
use crate::features::submission_store::domain::{LoadedSubmissions, SkippedFile};
use crate::shared::{Submission, SubmissionId};

/// Submission directory
#[derive(Debug, Clone)]
pub struct SubmissionStore {
    root: PathBuf,
}

impl SubmissionStore {
    /// Open an existing directory
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(CodesimError::submission(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Stored files in file-name order
    fn entries(&self) -> Result<Vec<DirEntry>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| CodesimError::submission(format!("Walk error: {}", e)))?;
            let hidden = entry.file_name().to_string_lossy().starts_with('.');
            if entry.file_type().is_file() && !hidden {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// Identifiers of all stored files
    pub fn list_submissions(&self) -> Result<Vec<SubmissionId>> {
        Ok(self
            .entries()?
            .iter()
            .map(|entry| SubmissionId::parse(entry.file_name().to_string_lossy().into_owned()))
            .collect())
    }

    /// Read and decode every stored file
    pub fn load(&self) -> Result<LoadedSubmissions> {
        let mut loaded = LoadedSubmissions::default();

        for entry in self.entries()? {
            let identifier = entry.file_name().to_string_lossy().into_owned();

            let decoded = std::fs::read(entry.path())
                .map_err(|e| format!("unreadable: {}", e))
                .and_then(|bytes| decode_text(&bytes));

            match decoded {
                Ok(content) => loaded.submissions.push(Submission::new(identifier, content)),
                Err(reason) => {
                    warn!("Skipping submission {}: {}", identifier, reason);
                    loaded.skipped.push(SkippedFile { identifier, reason });
                }
            }
        }

        debug!(
            "Loaded {} submissions from {} ({} skipped)",
            loaded.submissions.len(),
            self.root.display(),
            loaded.skipped.len()
        );

        Ok(loaded)
    }
}
