//! File-backed host used by the command-line binary.
//!
//! A selection manifest is the JSON the host would otherwise answer with:
//!
//! ```json
//! {
//!   "items": [{ "id": "1", "name": "cat", "filePath": "/library/cat.png" }],
//!   "folders": [{ "id": "f1", "name": "Pets", "parent": null }],
//!   "selectedFolders": ["f1"]
//! }
//! ```
//!
//! Relative `filePath` values are resolved against the manifest's directory so
//! symbolic links always point at absolute targets.

use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::LinkExportError;
use crate::host::{DirectoryChoice, FolderNode, HostClient, LibraryItem};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct Manifest {
    #[serde(default)]
    items: Vec<LibraryItem>,
    #[serde(default)]
    folders: Vec<FolderNode>,
    #[serde(default)]
    selected_folders: Vec<String>,
}

/// Host answering from a selection manifest and a destination flag or prompt.
#[derive(Debug, Clone, Default)]
pub struct ManifestHost {
    items: Vec<LibraryItem>,
    folders: HashMap<String, FolderNode>,
    selected_folders: Vec<String>,
    destination: Option<PathBuf>,
    interactive: bool,
}

impl ManifestHost {
    /// Parse manifest JSON; relative item paths are joined onto `base_dir`.
    pub fn from_json(text: &str, base_dir: &Path) -> Result<Self, serde_json::Error> {
        let manifest: Manifest = serde_json::from_str(text)?;
        let items = manifest
            .items
            .into_iter()
            .map(|mut item| {
                item.file_path = item
                    .file_path
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| if p.is_relative() { base_dir.join(p) } else { p });
                item
            })
            .collect();
        let folders = manifest
            .folders
            .into_iter()
            .map(|f| (f.id.clone(), f))
            .collect();
        Ok(Self {
            items,
            folders,
            selected_folders: manifest.selected_folders,
            destination: None,
            interactive: false,
        })
    }

    /// Read and parse a manifest file.
    ///
    /// A relative manifest path is made absolute against the current directory
    /// first, so item paths relative to it become absolute too.
    pub fn from_path(path: &Path) -> Result<Self> {
        let manifest_err = |reason: String| LinkExportError::Manifest {
            path: path.to_path_buf(),
            reason,
        };
        let text = fs::read_to_string(path).map_err(|e| manifest_err(e.to_string()))?;
        let absolute = std::path::absolute(path).map_err(|e| manifest_err(e.to_string()))?;
        let base_dir = absolute.parent().unwrap_or(&absolute);
        let host = Self::from_json(&text, base_dir).map_err(|e| manifest_err(e.to_string()))?;
        debug!(
            path = %path.display(),
            items = host.items.len(),
            folders = host.folders.len(),
            "manifest loaded"
        );
        Ok(host)
    }

    /// Preset answer for the directory picker.
    pub fn with_destination(mut self, destination: Option<PathBuf>) -> Self {
        self.destination = destination;
        self
    }

    /// Prompt on stdin when no destination was preset.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    fn prompt_for_directory(&self) -> Result<Option<PathBuf>> {
        let mut stdout = io::stdout();
        write!(stdout, "Destination directory (empty to cancel): ")?;
        stdout.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let answer = line.trim();
        Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
    }
}

impl HostClient for ManifestHost {
    fn selected_items(&self) -> Result<Vec<LibraryItem>> {
        Ok(self.items.clone())
    }

    fn selected_folders(&self) -> Result<Vec<FolderNode>> {
        Ok(self
            .selected_folders
            .iter()
            .filter_map(|id| {
                let folder = self.folders.get(id).cloned();
                if folder.is_none() {
                    warn!(id = %id, "selected folder is not listed in the manifest");
                }
                folder
            })
            .collect())
    }

    fn folder_by_id(&self, id: &str) -> Result<Option<FolderNode>> {
        Ok(self.folders.get(id).cloned())
    }

    /// Like the host's picker, a chosen directory that does not exist yet is created.
    fn pick_directory(&self) -> Result<DirectoryChoice> {
        let chosen = match &self.destination {
            Some(dir) => Some(dir.clone()),
            None if self.interactive => self.prompt_for_directory()?,
            None => None,
        };
        let Some(dir) = chosen else {
            return Ok(DirectoryChoice::Canceled);
        };
        fs::create_dir_all(&dir)
            .map_err(crate::fs_ops::io_error_with_help("create destination", &dir))?;
        Ok(DirectoryChoice::Chosen(dir))
    }
}
