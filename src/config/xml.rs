//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a secure template if missing (unless LINK_EXPORT_CONFIG is set).
//!
//! Notes:
//! - Unknown XML fields are rejected so misspelled settings surface early.
//! - Empty elements are treated as "not set".

use anyhow::{bail, Context, Result};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::paths::{default_config_path, default_log_path, path_has_symlink_ancestor};
use super::types::{Config, LinkKind, LogLevel};
use super::{CONFIG_ENV, HELP_URL_DEFAULT, MAX_FOLDER_DEPTH_DEFAULT, MAX_SUFFIX_ATTEMPTS_DEFAULT};

use crate::platform::{set_dir_mode_0700, set_file_mode_0600, write_config_secure_new_0600};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    link_kind: Option<String>,
    log_level: Option<String>,
    log_file: Option<String>,
    locale_file: Option<String>,
    help_url: Option<String>,
    #[serde(default, deserialize_with = "de_trimmed_opt")]
    max_suffix_attempts: Option<u32>,
    #[serde(default, deserialize_with = "de_trimmed_opt")]
    max_folder_depth: Option<usize>,
}

// Trims surrounding whitespace before parsing an optional number.
fn de_trimmed_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| s.trim().parse::<T>().ok()))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Outcome of looking for a config file at startup.
#[derive(Debug)]
pub enum LoadResult {
    /// Config file found and parsed.
    Loaded(Config),
    /// No file (explicit path missing); defaults apply.
    Defaults,
    /// No file at the default location; a template was written there.
    CreatedTemplate(PathBuf),
}

// Map XmlConfig -> Config
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = non_empty(parsed.link_kind.as_deref()) {
        cfg.link_kind = s.parse::<LinkKind>().map_err(anyhow::Error::msg)?;
    }
    if let Some(s) = non_empty(parsed.log_level.as_deref()) {
        cfg.log_level = s.parse::<LogLevel>().map_err(anyhow::Error::msg)?;
    }
    if let Some(s) = non_empty(parsed.log_file.as_deref()) {
        cfg.log_file = Some(PathBuf::from(s));
    }
    cfg.locale_file = non_empty(parsed.locale_file.as_deref()).map(PathBuf::from);
    if let Some(s) = non_empty(parsed.help_url.as_deref()) {
        cfg.help_url = s.to_string();
    }
    if let Some(n) = parsed.max_suffix_attempts {
        if n == 0 {
            bail!("max_suffix_attempts must be at least 1");
        }
        cfg.max_suffix_attempts = n;
    }
    if let Some(n) = parsed.max_folder_depth {
        if n == 0 {
            bail!("max_folder_depth must be at least 1");
        }
        cfg.max_folder_depth = n;
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid config xml '{}'", path.display()))
}

/// Load the config file, writing a template first when the default location is empty.
pub fn load_or_init() -> Result<LoadResult> {
    let env_set = env::var_os(CONFIG_ENV).is_some();
    let cfg_path = default_config_path()?;

    if !cfg_path.exists() {
        if env_set {
            debug!("{} points at missing file {}; using defaults", CONFIG_ENV, cfg_path.display());
            return Ok(LoadResult::Defaults);
        }
        create_template_config(&cfg_path)?;
        return Ok(LoadResult::CreatedTemplate(cfg_path));
    }

    debug!("Loading config from {}", cfg_path.display());
    load_config_from_xml_path(&cfg_path).map(LoadResult::Loaded)
}

/// Create default template config file and parent directory (best-effort permissions).
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
        let _ = set_dir_mode_0700(parent);
    }

    let suggested_log = default_log_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "/path/to/link_export.log".into());

    let content = format!(
        "<!--\n  link_export configuration (XML)\n\n    link_kind            -> symlink | hardlink\n    log_level            -> quiet | normal | info | debug\n    log_file             -> path to log file (optional; stdout/stderr still used)\n    locale_file          -> i18next-style JSON messages (optional; English built in)\n    help_url             -> page linked when symbolic links need more privileges\n    max_suffix_attempts  -> how many \" (n)\" names to try before giving up on an item\n    max_folder_depth     -> deepest folder ancestry mirrored under the destination\n\n  CLI flags override XML values.\n-->\n<config>\n  <link_kind>symlink</link_kind>\n  <log_level>normal</log_level>\n  <log_file>{}</log_file>\n  <help_url>{}</help_url>\n  <max_suffix_attempts>{}</max_suffix_attempts>\n  <max_folder_depth>{}</max_folder_depth>\n</config>\n",
        suggested_log,
        HELP_URL_DEFAULT,
        MAX_SUFFIX_ATTEMPTS_DEFAULT,
        MAX_FOLDER_DEPTH_DEFAULT
    );

    write_config_secure_new_0600(path, content.as_bytes())?;
    let _ = set_file_mode_0600(path);

    info!("Created template config at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn template_parses_back() {
        let td = tempdir().unwrap();
        let path = td.path().join("cfg").join("config.xml");
        create_template_config(&path).unwrap();
        let cfg = load_config_from_xml_path(&path).unwrap();
        assert_eq!(cfg.link_kind, LinkKind::Symbolic);
        assert_eq!(cfg.log_level, LogLevel::Normal);
        assert_eq!(cfg.max_suffix_attempts, MAX_SUFFIX_ATTEMPTS_DEFAULT);
        assert_eq!(cfg.max_folder_depth, MAX_FOLDER_DEPTH_DEFAULT);
    }

    #[test]
    fn zero_bounds_rejected() {
        let td = tempdir().unwrap();
        let path = td.path().join("config.xml");
        fs::write(&path, "<config><max_folder_depth>0</max_folder_depth></config>").unwrap();
        assert!(load_config_from_xml_path(&path).is_err());
    }
}
