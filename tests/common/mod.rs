//! Test doubles for the host, the message surface and the link backend.
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use link_export::{
    DirectoryChoice, FolderNode, HostClient, LibraryItem, LinkBackend, OsLinks, Reporter, Severity,
};

#[derive(Default)]
pub struct FakeHost {
    pub items: Vec<LibraryItem>,
    pub folders: HashMap<String, FolderNode>,
    pub selected_folder: Option<String>,
    pub destination: Option<PathBuf>,
    pub fail_lookups: bool,
    pub fail_selection: bool,
    pub prompts: Cell<usize>,
    pub lookups: Cell<usize>,
}

impl FakeHost {
    pub fn with_items(items: Vec<LibraryItem>, destination: &Path) -> Self {
        Self {
            items,
            destination: Some(destination.to_path_buf()),
            ..Default::default()
        }
    }

    pub fn add_folder(&mut self, id: &str, name: &str, parent: Option<&str>) {
        self.folders
            .insert(id.to_string(), FolderNode::new(id, name, parent));
    }
}

impl HostClient for FakeHost {
    fn selected_items(&self) -> Result<Vec<LibraryItem>> {
        if self.fail_selection {
            return Err(anyhow!("host offline"));
        }
        Ok(self.items.clone())
    }

    fn selected_folders(&self) -> Result<Vec<FolderNode>> {
        Ok(self
            .selected_folder
            .as_ref()
            .and_then(|id| self.folders.get(id).cloned())
            .into_iter()
            .collect())
    }

    fn folder_by_id(&self, id: &str) -> Result<Option<FolderNode>> {
        self.lookups.set(self.lookups.get() + 1);
        if self.fail_lookups {
            return Err(anyhow!("lookup failed"));
        }
        Ok(self.folders.get(id).cloned())
    }

    fn pick_directory(&self) -> Result<DirectoryChoice> {
        self.prompts.set(self.prompts.get() + 1);
        Ok(match &self.destination {
            Some(dir) => DirectoryChoice::Chosen(dir.clone()),
            None => DirectoryChoice::Canceled,
        })
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    pub messages: RefCell<Vec<(String, Severity)>>,
}

impl Reporter for RecordingReporter {
    fn report(&self, message: &str, severity: Severity) {
        self.messages.borrow_mut().push((message.to_string(), severity));
    }
}

/// Real links, except for sources whose file name maps to an injected OS error.
#[derive(Default)]
pub struct ScriptedBackend {
    pub failures: HashMap<String, i32>,
    pub attempted: RefCell<Vec<PathBuf>>,
}

impl ScriptedBackend {
    pub fn failing(name: &str, os_code: i32) -> Self {
        let mut failures = HashMap::new();
        failures.insert(name.to_string(), os_code);
        Self {
            failures,
            ..Default::default()
        }
    }

    fn scripted(&self, original: &Path) -> Option<io::Error> {
        self.attempted.borrow_mut().push(original.to_path_buf());
        let name = original.file_name()?.to_string_lossy().into_owned();
        self.failures
            .get(&name)
            .map(|code| io::Error::from_raw_os_error(*code))
    }
}

impl LinkBackend for ScriptedBackend {
    fn symlink(&self, original: &Path, link: &Path) -> io::Result<()> {
        match self.scripted(original) {
            Some(e) => Err(e),
            None => OsLinks.symlink(original, link),
        }
    }

    fn hard_link(&self, original: &Path, link: &Path) -> io::Result<()> {
        match self.scripted(original) {
            Some(e) => Err(e),
            None => OsLinks.hard_link(original, link),
        }
    }
}

pub fn item(id: &str, name: &str, path: Option<&Path>) -> LibraryItem {
    LibraryItem::new(id, name, path)
}
