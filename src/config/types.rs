//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.
//! - LinkKind selects symbolic or hard links.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::paths;
use super::{HELP_URL_DEFAULT, MAX_FOLDER_DEPTH_DEFAULT, MAX_SUFFIX_ATTEMPTS_DEFAULT};

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Kind of filesystem link created for each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkKind {
    #[default]
    Symbolic,
    Hard,
}

impl LinkKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "symlink" | "symbolic" | "soft" => Some(LinkKind::Symbolic),
            "hardlink" | "hard" => Some(LinkKind::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LinkKind::Symbolic => "symlink",
            LinkKind::Hard => "hardlink",
        })
    }
}

impl FromStr for LinkKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid link kind: '{s}' (expected symlink or hardlink)"))
    }
}

/// Runtime configuration used by the exporter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Symbolic or hard links
    pub link_kind: LinkKind,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Optional i18next-style locale file; built-in English otherwise
    pub locale_file: Option<PathBuf>,
    /// Help page shown when symlink creation lacks privilege
    pub help_url: String,
    /// Bound on collision suffixes per item
    pub max_suffix_attempts: u32,
    /// Bound on folder ancestry walk
    pub max_folder_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            link_kind: LinkKind::default(),
            log_level: LogLevel::Normal,
            log_file: paths::default_log_path().ok(),
            locale_file: None,
            help_url: HELP_URL_DEFAULT.to_string(),
            max_suffix_attempts: MAX_SUFFIX_ATTEMPTS_DEFAULT,
            max_folder_depth: MAX_FOLDER_DEPTH_DEFAULT,
        }
    }
}
