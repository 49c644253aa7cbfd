//! Subcommand implementations.

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Chat mode command handler.
pub mod chat;

/// Provider listing command handler.
pub mod providers;

/// Speech synthesis command handler.
pub mod speak;

/// Translation command handler.
pub mod translate;

/// Loads the config file and applies the CLI overrides.
pub fn load_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    resolve_config(options, &file_config)
}
