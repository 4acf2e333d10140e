//! Filesystem operations: folder paths, collision-safe names and link creation.

mod duplicate;
mod helpers;
mod link;
mod resolve;

pub use duplicate::{entry_exists, unique_link_path};
pub use helpers::{hint_for, io_error_with_help};
pub use link::{classify_link_error, create_link, FailureReason, LinkBackend, LinkRequest, OsLinks};
pub use resolve::{folder_path_segments, sanitize_dir_name, UNTITLED};
