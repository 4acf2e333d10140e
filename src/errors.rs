//! Typed error definitions for link_export.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkExportError {
    #[error("No free name for '{name}' in {dir} after {attempts} attempts")]
    SuffixLimit {
        dir: PathBuf,
        name: String,
        attempts: u32,
    },

    #[error("Folder ancestry contains a cycle at folder id '{0}'")]
    FolderCycle(String),

    #[error("Folder ancestry deeper than {0} levels")]
    FolderDepthExceeded(usize),

    #[error("Invalid selection manifest {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },
}

impl LinkExportError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            LinkExportError::SuffixLimit { .. } => 30,
            LinkExportError::FolderCycle(_) => 40,
            LinkExportError::FolderDepthExceeded(_) => 41,
            LinkExportError::Manifest { .. } => 50,
        }
    }
}
