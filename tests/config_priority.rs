#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use std::collections::BTreeMap;

use bn2hi::config::{
    AudioSection, Bn2hiConfig, ConfigFile, ProviderConfig, ProviderKind, ResolveOptions,
    ResolvedProvider, resolve_config,
};

fn make_config_with_defaults() -> ConfigFile {
    let mut providers = BTreeMap::new();
    providers.insert(
        "local".to_string(),
        ProviderConfig {
            kind: ProviderKind::Llm,
            endpoint: "http://test.local".to_string(),
            model: Some("config_model".to_string()),
            api_key: Some("test_key".to_string()),
            api_key_env: None,
        },
    );
    providers.insert(
        "mirror".to_string(),
        ProviderConfig {
            kind: ProviderKind::Google,
            endpoint: "http://mirror.local".to_string(),
            model: None,
            api_key: None,
            api_key_env: None,
        },
    );

    ConfigFile {
        bn2hi: Bn2hiConfig {
            provider: Some("local".to_string()),
            transliteration: Some(false),
            dictionary: None,
        },
        providers,
        audio: AudioSection {
            endpoint: None,
            languages: Some(vec!["bn".to_string()]),
            temp_dir: None,
        },
    }
}

#[test]
fn test_cli_provider_overrides_config_provider() {
    let options = ResolveOptions {
        provider: Some("mirror".to_string()),
        offline: false,
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.provider_name, "mirror");
    assert_eq!(
        resolved.provider,
        ResolvedProvider::Google {
            endpoint: "http://mirror.local".to_string()
        }
    );
}

#[test]
fn test_config_provider_used_when_cli_silent() {
    let resolved =
        resolve_config(&ResolveOptions::default(), &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.provider_name, "local");
    assert_eq!(
        resolved.provider,
        ResolvedProvider::Llm {
            name: "local".to_string(),
            endpoint: "http://test.local".to_string(),
            model: "config_model".to_string(),
            api_key: Some("test_key".to_string()),
            requires_api_key: true,
        }
    );
}

#[test]
fn test_cli_offline_overrides_config_provider() {
    let options = ResolveOptions {
        provider: None,
        offline: true,
    };

    let resolved = resolve_config(&options, &make_config_with_defaults()).unwrap();

    assert_eq!(resolved.provider, ResolvedProvider::Offline);
    // File settings unrelated to the provider still apply.
    assert!(!resolved.transliteration);
    assert_eq!(resolved.audio.languages, vec!["bn".to_string()]);
}

#[test]
fn test_builtin_defaults_without_config() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.provider_name, "google");
    assert!(resolved.transliteration);
    assert!(resolved.audio.supports("bn"));
    assert!(resolved.audio.supports("hi"));
    assert!(resolved.dictionary.is_none());
}

#[test]
fn test_config_can_override_builtin_provider() {
    let mut config = ConfigFile::default();
    config.providers.insert(
        "google".to_string(),
        ProviderConfig {
            kind: ProviderKind::Google,
            endpoint: "http://proxy.local".to_string(),
            model: None,
            api_key: None,
            api_key_env: None,
        },
    );

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(
        resolved.provider,
        ResolvedProvider::Google {
            endpoint: "http://proxy.local".to_string()
        }
    );
}
