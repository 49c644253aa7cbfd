//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Returns the configuration directory for bn2hi.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/bn2hi` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/bn2hi` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join("bn2hi")),
        _ => Ok(home_dir()?.join(".config").join("bn2hi")),
    }
}

/// Expands a leading `~` to the home directory.
///
/// Paths without `~`, or when no home directory is known, are returned as is.
pub fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
