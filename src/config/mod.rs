//! Config module.
//! Provides configuration types, default paths and XML loading.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use types::{Config, LinkKind, LogLevel};
pub use xml::{create_template_config, load_config_from_xml_path, load_or_init, LoadResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "LINK_EXPORT_CONFIG";
/// Page linked from the "insufficient privilege" error line.
pub const HELP_URL_DEFAULT: &str = "https://learn.microsoft.com/windows/apps/get-started/enable-your-device-for-development";
/// Upper bound on " (n)" suffixes tried per file name.
pub const MAX_SUFFIX_ATTEMPTS_DEFAULT: u32 = 10_000;
/// Upper bound on folder ancestry depth.
pub const MAX_FOLDER_DEPTH_DEFAULT: usize = 64;
