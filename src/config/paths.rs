//! Default path helpers and symlink checks.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::{config_dir, data_dir};

const APP_DIR: &str = "filesmith";

/// OS-appropriate default config file path.
pub fn default_config_path() -> Result<PathBuf> {
    let base = config_dir()
        .or_else(|| {
            std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config"))
        })
        .context("could not determine a configuration directory")?;
    Ok(base.join(APP_DIR).join("config.xml"))
}

/// OS-appropriate default log file path (data dir).
pub fn default_log_path() -> Result<PathBuf> {
    let base = data_dir()
        .or_else(|| {
            std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".local").join("share"))
        })
        .context("could not determine a data directory")?;
    Ok(base.join(APP_DIR).join("filesmith.log"))
}

/// Return true if any existing ancestor of `path` is a symlink.
/// Used to refuse config/log writes through attacker-controlled links.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut current = path.parent();
    while let Some(ancestor) = current {
        if ancestor.exists()
            && fs::symlink_metadata(ancestor)?.file_type().is_symlink()
        {
            return Ok(true);
        }
        current = ancestor.parent();
    }
    Ok(false)
}
