//! Collision-safe link names.
//!
//! Policy: keep the requested name when free, otherwise append " (n)" before
//! the extension with n = 1, 2, 3, ... until a free name turns up.
//!
//! Notes:
//! - Existence is checked with `symlink_metadata`, so a dangling symlink
//!   occupies its name.
//! - The check is not atomic with the later link call; a concurrent writer can
//!   still take the name, which surfaces as an "already exists" error for that item.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::errors::LinkExportError;

/// True when a directory entry exists at `path` (symlinks are not followed).
pub fn entry_exists(path: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Return `dir/name`, or the first free `stem (n).ext` after it.
///
/// Gives up with `SuffixLimit` once `max_attempts` suffixes were taken.
///
/// Examples:
/// - "photo.png" -> "photo (1).png", "photo (2).png", ...
/// - ".env" -> ".env (1)"
/// - "archive.tar.gz" -> "archive.tar (1).gz"
pub fn unique_link_path(dir: &Path, name: &OsStr, max_attempts: u32) -> anyhow::Result<PathBuf> {
    let candidate = dir.join(name);
    if !entry_exists(&candidate)? {
        return Ok(candidate);
    }

    let base = Path::new(name);
    let stem: OsString = base
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_else(|| name.to_os_string());
    let ext = base.extension();

    for n in 1..=max_attempts {
        let candidate = dir.join(name_with_suffix(&stem, ext, n));
        if !entry_exists(&candidate)? {
            return Ok(candidate);
        }
        trace!(candidate = %candidate.display(), "name taken");
    }

    Err(LinkExportError::SuffixLimit {
        dir: dir.to_path_buf(),
        name: name.to_string_lossy().into_owned(),
        attempts: max_attempts,
    }
    .into())
}

fn name_with_suffix(stem: &OsStr, ext: Option<&OsStr>, n: u32) -> OsString {
    let mut out = stem.to_os_string();
    out.push(format!(" ({n})"));
    if let Some(e) = ext {
        out.push(".");
        out.push(e);
    }
    out
}
