//! CLI definition and parsing.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - Without --dest the destination is asked for on stdin (TTY only).

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LinkKind, LogLevel};

/// CLI wrapper for the link_export library.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Export a library selection as symbolic or hard links"
)]
pub struct Args {
    /// Selection manifest (JSON with items, folders and selectedFolders).
    #[arg(
        value_name = "MANIFEST",
        value_hint = ValueHint::FilePath,
        required_unless_present = "print_config"
    )]
    pub manifest: Option<PathBuf>,

    /// Destination root directory; skips the interactive prompt.
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub dest: Option<PathBuf>,

    /// Link kind: symlink or hardlink.
    #[arg(long, value_name = "KIND")]
    pub link_kind: Option<LinkKind>,

    /// i18next-style JSON locale file for messages.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub locale: Option<PathBuf>,

    /// Never prompt for a destination; a missing --dest cancels the export.
    #[arg(long)]
    pub no_prompt: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where link_export looks for its config file, then exit.
    #[arg(long, help = "Print the config file location used by link_export and exit")]
    pub print_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(kind) = self.link_kind {
            cfg.link_kind = kind;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(path) = &self.log_file {
            cfg.log_file = Some(path.clone());
        }
        if let Some(path) = &self.locale {
            cfg.locale_file = Some(path.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
