//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic.

mod temp;
#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{
    is_cross_device, is_insufficient_privilege, open_log_file_secure_append, set_dir_mode_0700,
    set_file_mode_0600, symlink_file, write_config_secure_new_0600,
};

#[cfg(not(unix))]
pub use windows::{
    is_cross_device, is_insufficient_privilege, open_log_file_secure_append, set_dir_mode_0700,
    set_file_mode_0600, symlink_file, write_config_secure_new_0600,
};
