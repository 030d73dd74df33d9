//! Standard on-disk locations for rulebox documents.
//!
//! `RULEBOX_HOME` overrides both directories, which keeps tests and
//! sandboxed runs away from the user's real configuration.

use anyhow::{Context, Result};
use std::path::PathBuf;

const HOME_OVERRIDE: &str = "RULEBOX_HOME";

/// Directory holding the preference document.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_OVERRIDE) {
        return Ok(PathBuf::from(home));
    }
    dirs::config_dir()
        .map(|d| d.join("rulebox"))
        .context("could not determine the user config directory")
}

/// Directory holding the rule and log documents.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var(HOME_OVERRIDE) {
        return Ok(PathBuf::from(home));
    }
    dirs::data_dir()
        .map(|d| d.join("rulebox"))
        .context("could not determine the user data directory")
}
