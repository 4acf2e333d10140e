//! I/O helper utilities.
//!
//! Enriches io::Error with the failing operation, the path and an actionable
//! hint. Used for terminal failures (export directory creation) and logs.
//!
//! Usage:
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create export directory", dir))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

/// Short remedy for common link/directory failures, if one applies.
pub fn hint_for(e: &io::Error) -> Option<&'static str> {
    if let Some(hint) = e.raw_os_error().and_then(os_hint) {
        return Some(hint);
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; verify it exists"),
        io::ErrorKind::AlreadyExists => Some("already exists; another writer may have taken the name"),
        _ => None,
    }
}

#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    match code {
        libc::EPERM => Some("operation not permitted; the filesystem may not support this link type"),
        libc::EACCES => Some("permission denied; check ownership and write permissions"),
        libc::EXDEV => Some("cross-filesystem; hard links must stay on one volume"),
        libc::EEXIST => Some("already exists; another writer may have taken the name"),
        libc::ENOSPC => Some("insufficient space on device"),
        libc::EROFS => Some("read-only filesystem; cannot write here"),
        libc::ENAMETOOLONG => Some("filename or path too long; shorten folder names"),
        libc::EMLINK => Some("too many hard links to the source file"),
        libc::ENOENT => Some("path not found; verify it exists"),
        _ => None,
    }
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    match code {
        5 => Some("access denied; check permissions"),                         // ERROR_ACCESS_DENIED
        17 => Some("not same device; hard links must stay on one volume"),     // ERROR_NOT_SAME_DEVICE
        80 | 183 => Some("already exists; another writer may have taken the name"), // FILE_EXISTS / ALREADY_EXISTS
        112 => Some("insufficient disk space"),                                // ERROR_DISK_FULL
        206 => Some("filename or path too long (MAX_PATH exceeded)"),          // ERROR_FILENAME_EXCED_RANGE
        1314 => Some("privilege not held; enable Developer Mode for symbolic links"), // ERROR_PRIVILEGE_NOT_HELD
        _ => None,
    }
}

#[cfg(not(any(unix, windows)))]
fn os_hint(_code: i32) -> Option<&'static str> {
    None
}

/// Format "<op> '<path>': <error> — <hint> [os code: n]".
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    if let Some(hint) = hint_for(e) {
        msg.push_str(" — ");
        msg.push_str(hint);
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

/// Returns a closure for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}
