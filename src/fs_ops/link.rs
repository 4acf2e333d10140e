//! Link creation and failure classification.
//!
//! Each request picks a collision-free name in the destination directory and
//! asks the backend for one symbolic or hard link there. Failures are sorted
//! into the few cases the batch treats differently:
//! - symbolic link without the privilege to create one: aborts the batch
//! - hard link across volumes: item fails, batch continues
//! - anything else: item fails with the OS message, batch continues

use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::duplicate::unique_link_path;
use super::helpers::hint_for;
use crate::config::LinkKind;
use crate::platform;

/// Filesystem primitives used to create links.
pub trait LinkBackend {
    fn symlink(&self, original: &Path, link: &Path) -> io::Result<()>;
    fn hard_link(&self, original: &Path, link: &Path) -> io::Result<()>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsLinks;

impl LinkBackend for OsLinks {
    fn symlink(&self, original: &Path, link: &Path) -> io::Result<()> {
        platform::symlink_file(original, link)
    }

    fn hard_link(&self, original: &Path, link: &Path) -> io::Result<()> {
        std::fs::hard_link(original, link)
    }
}

/// One link to create: `source` linked into `destination_dir`.
#[derive(Debug, Clone, Copy)]
pub struct LinkRequest<'a> {
    pub source: &'a Path,
    pub destination_dir: &'a Path,
    pub kind: LinkKind,
}

/// Why a single item was not linked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The library item has no file on disk.
    MissingFilePath,
    /// Symbolic links need a privilege the process lacks.
    InsufficientPrivilege { help_url: String },
    /// Hard link source and destination are on different volumes.
    CrossDevice,
    /// Any other failure, carrying the underlying message.
    Other(String),
}

impl FailureReason {
    /// Whether the remaining items of the batch must be skipped.
    pub fn aborts_batch(&self) -> bool {
        matches!(self, FailureReason::InsufficientPrivilege { .. })
    }
}

/// Sort a link error into the cases the batch handles.
pub fn classify_link_error(kind: LinkKind, e: &io::Error, help_url: &str) -> FailureReason {
    match kind {
        LinkKind::Symbolic if platform::is_insufficient_privilege(e) => {
            FailureReason::InsufficientPrivilege {
                help_url: help_url.to_string(),
            }
        }
        LinkKind::Hard if platform::is_cross_device(e) => FailureReason::CrossDevice,
        _ => FailureReason::Other(e.to_string()),
    }
}

/// Create one link for `request`; returns the path of the new entry.
pub fn create_link<B>(
    backend: &B,
    request: &LinkRequest<'_>,
    max_attempts: u32,
    help_url: &str,
) -> Result<PathBuf, FailureReason>
where
    B: LinkBackend + ?Sized,
{
    let name = request.source.file_name().ok_or_else(|| {
        FailureReason::Other(format!("'{}' has no file name", request.source.display()))
    })?;

    let dest = unique_link_path(request.destination_dir, name, max_attempts)
        .map_err(|e| FailureReason::Other(format!("{e:#}")))?;

    let result = match request.kind {
        LinkKind::Symbolic => backend.symlink(request.source, &dest),
        LinkKind::Hard => backend.hard_link(request.source, &dest),
    };

    match result {
        Ok(()) => {
            debug!(kind = %request.kind, src = %request.source.display(), dest = %dest.display(), "link created");
            Ok(dest)
        }
        Err(e) => {
            warn!(
                kind = %request.kind,
                src = %request.source.display(),
                dest = %dest.display(),
                error = %e,
                hint = hint_for(&e).unwrap_or(""),
                "link failed"
            );
            Err(classify_link_error(request.kind, &e, help_url))
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn eperm_only_special_for_symlinks() {
        let e = io::Error::from_raw_os_error(libc::EPERM);
        assert!(classify_link_error(LinkKind::Symbolic, &e, "u").aborts_batch());
        assert!(matches!(
            classify_link_error(LinkKind::Hard, &e, "u"),
            FailureReason::Other(_)
        ));
    }

    #[test]
    fn exdev_only_special_for_hard_links() {
        let e = io::Error::from_raw_os_error(libc::EXDEV);
        assert_eq!(classify_link_error(LinkKind::Hard, &e, "u"), FailureReason::CrossDevice);
        assert!(matches!(
            classify_link_error(LinkKind::Symbolic, &e, "u"),
            FailureReason::Other(_)
        ));
    }

    #[test]
    fn other_errors_keep_os_message() {
        let e = io::Error::from_raw_os_error(libc::ENOSPC);
        let expected = e.to_string();
        assert_eq!(
            classify_link_error(LinkKind::Symbolic, &e, "u"),
            FailureReason::Other(expected)
        );
    }
}
