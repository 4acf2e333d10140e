//! Export batch orchestration.
//!
//! One export action runs: selection check → destination prompt → folder path
//! → one link per item in selection order → report. Per-item failures are
//! collected, never propagated; only a missing privilege for symbolic links
//! stops the remaining items. Already-created links are never rolled back.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::config::{Config, LinkKind};
use crate::config::{HELP_URL_DEFAULT, MAX_FOLDER_DEPTH_DEFAULT, MAX_SUFFIX_ATTEMPTS_DEFAULT};
use crate::fs_ops::{
    create_link, folder_path_segments, io_error_with_help, FailureReason, LinkBackend, LinkRequest,
};
use crate::host::{DirectoryChoice, HostClient, LibraryItem, Severity};
use crate::i18n::{keys, Translator};

/// Settings for one export action.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub link_kind: LinkKind,
    pub help_url: String,
    pub max_suffix_attempts: u32,
    pub max_folder_depth: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            link_kind: LinkKind::default(),
            help_url: HELP_URL_DEFAULT.to_string(),
            max_suffix_attempts: MAX_SUFFIX_ATTEMPTS_DEFAULT,
            max_folder_depth: MAX_FOLDER_DEPTH_DEFAULT,
        }
    }
}

impl From<&Config> for ExportOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            link_kind: cfg.link_kind,
            help_url: cfg.help_url.clone(),
            max_suffix_attempts: cfg.max_suffix_attempts,
            max_folder_depth: cfg.max_folder_depth,
        }
    }
}

/// A failed item: what to call it and why it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    /// Item name (or id) for missing paths, the source file name otherwise.
    pub label: String,
    pub reason: FailureReason,
}

impl ItemFailure {
    /// One "label: reason" line.
    pub fn render(&self, t: &dyn Translator) -> String {
        let reason = match &self.reason {
            FailureReason::MissingFilePath => t.translate(keys::MISSING_FILE_PATH, &[]),
            FailureReason::InsufficientPrivilege { help_url } => {
                format!("{} {}", t.translate(keys::ERROR_EPERM, &[]), help_url)
            }
            FailureReason::CrossDevice => t.translate(keys::ERROR_EXDEV, &[]),
            FailureReason::Other(msg) => msg.clone(),
        };
        format!("{}: {}", self.label, reason)
    }
}

/// Counts and failures of a batch that reached the item loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub export_dir: PathBuf,
    pub success_count: usize,
    pub errors: Vec<ItemFailure>,
    pub aborted: bool,
}

impl ExportOutcome {
    fn new(export_dir: PathBuf) -> Self {
        Self {
            export_dir,
            success_count: 0,
            errors: Vec::new(),
            aborted: false,
        }
    }
}

/// Terminal result of one export action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportReport {
    NoItemsSelected,
    Canceled,
    /// Stopped before the item loop (host query, folder path or directory creation).
    Failed(String),
    Finished(ExportOutcome),
}

impl ExportReport {
    /// Message text and severity for the reporter.
    pub fn render(&self, t: &dyn Translator) -> (String, Severity) {
        match self {
            ExportReport::NoItemsSelected => (t.translate(keys::NO_ITEMS_SELECTED, &[]), Severity::Info),
            ExportReport::Canceled => (t.translate(keys::EXPORT_CANCELED, &[]), Severity::Info),
            ExportReport::Failed(reason) => (
                t.translate(keys::EXPORT_FAILED, &[("reason", reason.clone())]),
                Severity::Error,
            ),
            ExportReport::Finished(outcome) => {
                let params = [
                    ("count", outcome.success_count.to_string()),
                    ("dir", outcome.export_dir.display().to_string()),
                ];
                if outcome.errors.is_empty() {
                    return (t.translate(keys::EXPORT_SUCCESS, &params), Severity::Success);
                }
                let mut msg = t.translate(keys::EXPORT_WITH_ERRORS, &params);
                msg.push('\n');
                msg.push_str(&t.translate(keys::ERRORS_TITLE, &[]));
                for failure in &outcome.errors {
                    msg.push_str("\n  - ");
                    msg.push_str(&failure.render(t));
                }
                (msg, Severity::Error)
            }
        }
    }
}

fn failed(context: &str, e: impl std::fmt::Display) -> ExportReport {
    error!(error = %e, "{context}");
    ExportReport::Failed(format!("{context}: {e}"))
}

fn source_label(item: &LibraryItem, source: &Path) -> String {
    source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| item.display_name().to_string())
}

/// Run one export action against the host and filesystem.
pub fn run_export<H, B>(host: &H, backend: &B, options: &ExportOptions) -> ExportReport
where
    H: HostClient + ?Sized,
    B: LinkBackend + ?Sized,
{
    let items = match host.selected_items() {
        Ok(items) => items,
        Err(e) => return failed("Failed to query selected items", format!("{e:#}")),
    };
    if items.is_empty() {
        info!("No items selected; nothing to export");
        return ExportReport::NoItemsSelected;
    }

    let root = match host.pick_directory() {
        Ok(DirectoryChoice::Chosen(dir)) => dir,
        Ok(DirectoryChoice::Canceled) => {
            info!("Destination prompt canceled");
            return ExportReport::Canceled;
        }
        Err(e) => return failed("Directory prompt failed", format!("{e:#}")),
    };

    let folder = match host.selected_folders() {
        Ok(folders) => folders.into_iter().next(),
        Err(e) => return failed("Failed to query selected folders", format!("{e:#}")),
    };
    let segments = match folder_path_segments(host, folder.as_ref(), options.max_folder_depth) {
        Ok(segments) => segments,
        Err(e) => return failed("Cannot mirror folder path", e),
    };

    let export_dir = segments.iter().fold(root, |dir, segment| dir.join(segment));
    if !segments.is_empty() {
        if let Err(e) = fs::create_dir_all(&export_dir)
            .map_err(io_error_with_help("create export directory", &export_dir))
        {
            return failed("Cannot prepare destination", format!("{e:#}"));
        }
        debug!(dir = %export_dir.display(), "export directory ready");
    }

    info!(
        items = items.len(),
        kind = %options.link_kind,
        dir = %export_dir.display(),
        "Exporting links"
    );

    let mut outcome = ExportOutcome::new(export_dir);
    for item in &items {
        let Some(source) = item.file_path.as_deref() else {
            debug!(id = %item.id, "item has no file path");
            outcome.errors.push(ItemFailure {
                label: item.display_name().to_string(),
                reason: FailureReason::MissingFilePath,
            });
            continue;
        };

        let request = LinkRequest {
            source,
            destination_dir: &outcome.export_dir,
            kind: options.link_kind,
        };
        match create_link(backend, &request, options.max_suffix_attempts, &options.help_url) {
            Ok(_) => outcome.success_count += 1,
            Err(reason) => {
                let abort = reason.aborts_batch();
                outcome.errors.push(ItemFailure {
                    label: source_label(item, source),
                    reason,
                });
                if abort {
                    warn!(src = %source.display(), "symbolic links not permitted; aborting remaining items");
                    outcome.aborted = true;
                    break;
                }
            }
        }
    }

    info!(
        created = outcome.success_count,
        failed = outcome.errors.len(),
        aborted = outcome.aborted,
        dir = %outcome.export_dir.display(),
        "Export finished"
    );
    ExportReport::Finished(outcome)
}
