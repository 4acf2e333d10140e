//! Host-facing seams.
//!
//! The exporter never talks to the host application directly. Selection
//! queries, folder lookups, the directory picker and the message surface are
//! reached through the traits below so a CLI, an embedding host or a test fake
//! can stand in.

use anyhow::Result;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A selected library entry. `file_path` is absent for unmanaged items.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub file_path: Option<PathBuf>,
}

impl LibraryItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, file_path: Option<&Path>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            file_path: file_path.map(Path::to_path_buf),
        }
    }

    /// Name shown in error lines when the item has no file: name, else id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { &self.id } else { &self.name }
    }
}

/// A node in the host's folder tree; `parent` is the parent folder's id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub parent: Option<String>,
}

impl FolderNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, parent: Option<&str>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: String::new(),
            parent: parent.map(str::to_owned),
        }
    }

    /// Human-readable label: name, falling back to title, then id.
    pub fn label(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else if !self.title.is_empty() {
            &self.title
        } else {
            &self.id
        }
    }
}

/// Answer from the host's directory picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryChoice {
    Chosen(PathBuf),
    Canceled,
}

/// Severity tag attached to every user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// Queries answered by the host application.
pub trait HostClient {
    /// Currently selected library items, in selection order.
    fn selected_items(&self) -> Result<Vec<LibraryItem>>;

    /// Currently selected folders; only the first one is used for the export path.
    fn selected_folders(&self) -> Result<Vec<FolderNode>>;

    /// Resolve a folder id. `Ok(None)` means the folder is unknown.
    fn folder_by_id(&self, id: &str) -> Result<Option<FolderNode>>;

    /// Ask the user for a destination directory.
    fn pick_directory(&self) -> Result<DirectoryChoice>;
}

/// The single sink for user-facing outcomes.
pub trait Reporter {
    fn report(&self, message: &str, severity: Severity);
}
