//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - Creates a commented template if missing (unless FILESMITH_CONFIG is set).
//!
//! Unknown XML fields are a hard load failure so misconfigurations surface
//! early instead of being silently ignored.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use tracing::{debug, info};

use super::CONFIG_ENV;
use super::paths::{default_config_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    /// Repeated `<root>` elements, one per workspace root.
    #[serde(rename = "root", default)]
    roots: Vec<String>,
    #[serde(rename = "typeahead_enabled")]
    typeahead_enabled: Option<bool>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
}

impl XmlConfig {
    fn into_config(self) -> Config {
        let mut cfg = Config::default();
        cfg.roots = self
            .roots
            .iter()
            .map(|s| PathBuf::from(s.trim()))
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        cfg.typeahead_enabled = self.typeahead_enabled.unwrap_or(false);
        if let Some(s) = self.log_level.as_deref()
            && let Some(level) = LogLevel::parse(s.trim())
        {
            cfg.log_level = level;
        }
        if let Some(s) = self.log_file.as_deref() {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                cfg.log_file = Some(PathBuf::from(trimmed));
            }
        }
        cfg
    }
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(parsed.into_config())
}

/// Load the effective Config.
///
/// FILESMITH_CONFIG, when set, names the file and must parse; otherwise the
/// platform default path is consulted and a missing file just yields defaults.
pub fn load_config() -> Result<Config> {
    if let Some(explicit) = env::var_os(CONFIG_ENV) {
        return load_config_from_path(Path::new(&explicit));
    }
    let path = default_config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config_from_path(&path)
}

/// Write a commented template config, refusing symlinked ancestors.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path_has_symlink_ancestor(path)? {
        bail!(
            "Refusing to create config: ancestor of {} is a symlink",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory '{}'", parent.display()))?;
    }

    let content = "\
<!--
  filesmith configuration (XML)

  Fields:
    root               -> a workspace root; repeat the element for several
    typeahead_enabled  -> true/false: incremental directory picker before the
                          free-text path prompt
    log_level          -> quiet | normal | info | debug
    log_file           -> path to a log file (optional; stdout is always used)

  CLI flags override these values.
-->
<config>
  <typeahead_enabled>false</typeahead_enabled>
  <log_level>normal</log_level>
</config>
";
    fs::write(path, content)
        .with_context(|| format!("write template config '{}'", path.display()))?;
    info!("Created template config at {}", path.display());
    Ok(())
}

/// Create the default config if FILESMITH_CONFIG is not set and none exists;
/// returns the created path so the CLI can inform the user.
pub fn ensure_default_config_exists() -> Option<PathBuf> {
    if env::var_os(CONFIG_ENV).is_some() {
        return None;
    }
    let path = default_config_path().ok()?;
    if path.exists() {
        return None;
    }
    match create_template_config(&path) {
        Ok(()) => Some(path),
        Err(e) => {
            eprintln!(
                "Failed to create template config at {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}
