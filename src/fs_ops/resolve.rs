//! Folder ancestry → export sub-path.
//! - Labels are sanitized into names every common filesystem accepts.
//! - The walk goes leaf → root through host lookups and returns root → leaf.
//!
//! Notes:
//! - A parent the host cannot resolve ends the walk; the segments gathered so
//!   far are still used.
//! - Cycles and runaway depth are reported as errors instead of looping.

use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace, warn};

use crate::errors::LinkExportError;
use crate::host::{FolderNode, HostClient};

/// Placeholder used when a label sanitizes to nothing.
pub const UNTITLED: &str = "Untitled";

const ILLEGAL_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace characters illegal in file names with `_`, trim, and fall back to "Untitled".
///
/// A name made only of illegal characters and whitespace also becomes "Untitled",
/// as do `.` and `..`, which would not stay below the export root.
pub fn sanitize_dir_name(name: &str) -> String {
    if name.chars().all(|c| ILLEGAL_CHARS.contains(&c) || c.is_whitespace()) {
        return UNTITLED.to_string();
    }
    let replaced: String = name
        .chars()
        .map(|c| if ILLEGAL_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let trimmed = replaced.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Sanitized folder names from the root ancestor down to `folder` (inclusive).
///
/// `None` yields an empty sequence. At most `max_depth` segments are produced;
/// a deeper chain is `FolderDepthExceeded`, a revisited id is `FolderCycle`.
pub fn folder_path_segments<H>(
    host: &H,
    folder: Option<&FolderNode>,
    max_depth: usize,
) -> Result<Vec<String>, LinkExportError>
where
    H: HostClient + ?Sized,
{
    let Some(start) = folder else {
        return Ok(Vec::new());
    };

    let mut segments = VecDeque::new();
    let mut visited = HashSet::new();
    let mut current = start.clone();

    loop {
        if !visited.insert(current.id.clone()) {
            return Err(LinkExportError::FolderCycle(current.id));
        }
        if segments.len() >= max_depth {
            return Err(LinkExportError::FolderDepthExceeded(max_depth));
        }
        let segment = sanitize_dir_name(current.label());
        trace!(id = %current.id, segment = %segment, "folder segment");
        segments.push_front(segment);

        let Some(parent_id) = current.parent.as_deref().filter(|p| !p.is_empty()) else {
            break;
        };
        match host.folder_by_id(parent_id) {
            Ok(Some(parent)) => current = parent,
            Ok(None) => {
                debug!(parent = parent_id, "parent folder not found; ancestry truncated");
                break;
            }
            Err(e) => {
                warn!(parent = parent_id, error = %e, "parent folder lookup failed; ancestry truncated");
                break;
            }
        }
    }

    Ok(segments.into())
}
