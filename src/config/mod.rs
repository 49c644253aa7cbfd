//! Configuration file loading and CLI override resolution.

mod manager;

pub use manager::{
    AudioSection, Bn2hiConfig, ConfigFile, ConfigManager, DEFAULT_PROVIDER, ProviderConfig,
    ProviderKind, ResolveOptions, ResolvedConfig, ResolvedProvider, resolve_config,
};
