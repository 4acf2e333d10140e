//! Core library for `link_export`.
//!
//! Mirrors a media library selection into a destination directory as symbolic
//! or hard links. The host application is reached through the traits in
//! [`host`]; [`export::run_export`] is the batch, [`plugin::LinkExportPlugin`]
//! wraps it in the host's lifecycle hooks.

pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod fs_ops;
pub mod host;
pub mod i18n;
pub mod manifest;
pub mod output;
pub mod platform;
pub mod plugin;

pub use config::{
    default_config_path, default_log_path, load_config_from_xml_path, path_has_symlink_ancestor,
    Config, LinkKind, LogLevel,
};
pub use errors::LinkExportError;
pub use export::{run_export, ExportOptions, ExportOutcome, ExportReport, ItemFailure};
pub use fs_ops::{FailureReason, LinkBackend, OsLinks};
pub use host::{DirectoryChoice, FolderNode, HostClient, LibraryItem, Reporter, Severity};
pub use i18n::{Catalog, KeyOnly, Translator};
pub use manifest::ManifestHost;
pub use plugin::LinkExportPlugin;
