use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::audio::{AudioConfig, DEFAULT_TTS_ENDPOINT};
use crate::paths;
use crate::translation::{GOOGLE_ENDPOINT, GoogleClient, LlmClient, RemoteClient};

/// Name of the provider that works without any configuration.
pub const DEFAULT_PROVIDER: &str = "google";

/// Default settings in the `[bn2hi]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Bn2hiConfig {
    /// Default provider name.
    pub provider: Option<String>,
    /// Whether the transliteration fallback tier is enabled.
    pub transliteration: Option<bool>,
    /// Extra phrase table merged over the built-in dictionary.
    pub dictionary: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Bulk machine translation (Google `gtx` endpoint).
    Google,
    /// OpenAI-compatible chat completion endpoint.
    Llm,
}

/// Configuration for a translation provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub endpoint: String,
    /// Model name; required for `llm` providers.
    #[serde(default)]
    pub model: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ProviderConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }

    /// Returns `true` if this provider requires an API key.
    pub const fn requires_api_key(&self) -> bool {
        self.api_key.is_some() || self.api_key_env.is_some()
    }
}

/// The `[audio]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AudioSection {
    pub endpoint: Option<String>,
    pub languages: Option<Vec<String>>,
    pub temp_dir: Option<PathBuf>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/bn2hi/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub bn2hi: Bn2hiConfig,
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: BTreeMap<String, ProviderConfig>,
    #[serde(default)]
    pub audio: AudioSection,
}

impl ConfigFile {
    /// Configured providers plus the built-in one when not overridden.
    pub fn all_providers(&self) -> BTreeMap<String, ProviderConfig> {
        let mut providers = self.providers.clone();
        providers
            .entry(DEFAULT_PROVIDER.to_string())
            .or_insert_with(builtin_provider);
        providers
    }
}

fn builtin_provider() -> ProviderConfig {
    ProviderConfig {
        kind: ProviderKind::Google,
        endpoint: GOOGLE_ENDPOINT.to_string(),
        model: None,
        api_key: None,
        api_key_env: None,
    }
}

/// The remote tier selected after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedProvider {
    Google {
        endpoint: String,
    },
    Llm {
        name: String,
        endpoint: String,
        model: String,
        api_key: Option<String>,
        requires_api_key: bool,
    },
    Offline,
}

impl ResolvedProvider {
    pub fn client(&self) -> RemoteClient {
        match self {
            Self::Google { endpoint } => RemoteClient::Google(GoogleClient::new(endpoint.clone())),
            Self::Llm {
                name,
                endpoint,
                model,
                api_key,
                requires_api_key,
            } => RemoteClient::Llm(LlmClient::new(
                name.clone(),
                endpoint.clone(),
                model.clone(),
                api_key.clone(),
                *requires_api_key,
            )),
            Self::Offline => RemoteClient::Offline,
        }
    }
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The selected provider name (`offline` in offline mode).
    pub provider_name: String,
    pub provider: ResolvedProvider,
    pub transliteration: bool,
    pub dictionary: Option<PathBuf>,
    pub audio: AudioConfig,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Provider name override.
    pub provider: Option<String>,
    /// Disable the remote tier entirely.
    pub offline: bool,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults. A missing API key is not an error here;
/// the provider reports it when called.
///
/// # Errors
///
/// Returns an error if the selected provider is not configured or an `llm`
/// provider has no model.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let audio = resolve_audio(&config_file.audio);
    let transliteration = config_file.bn2hi.transliteration.unwrap_or(true);
    let dictionary = config_file.bn2hi.dictionary.as_deref().map(paths::expand_home);

    if options.offline {
        return Ok(ResolvedConfig {
            provider_name: "offline".to_string(),
            provider: ResolvedProvider::Offline,
            transliteration,
            dictionary,
            audio,
        });
    }

    let provider_name = options
        .provider
        .as_ref()
        .or(config_file.bn2hi.provider.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

    let providers = config_file.all_providers();
    let provider_config = providers.get(&provider_name).ok_or_else(|| {
        anyhow::anyhow!(
            "Provider '{provider_name}' not found\n\n\
             Available providers:\n  \
             - {}\n\n\
             Add providers to ~/.config/bn2hi/config.toml",
            providers
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("\n  - ")
        )
    })?;

    let provider = match provider_config.kind {
        ProviderKind::Google => ResolvedProvider::Google {
            endpoint: provider_config.endpoint.clone(),
        },
        ProviderKind::Llm => {
            let Some(model) = provider_config.model.clone() else {
                bail!(
                    "Provider '{provider_name}' is missing required setting 'model'\n\n\
                     Add it to the [providers.{provider_name}] section:\n  \
                     model = \"gpt-4o-mini\""
                );
            };
            ResolvedProvider::Llm {
                name: provider_name.clone(),
                endpoint: provider_config.endpoint.clone(),
                model,
                api_key: provider_config.get_api_key(),
                requires_api_key: provider_config.requires_api_key(),
            }
        }
    };

    Ok(ResolvedConfig {
        provider_name,
        provider,
        transliteration,
        dictionary,
        audio,
    })
}

fn resolve_audio(section: &AudioSection) -> AudioConfig {
    let defaults = AudioConfig::default();
    AudioConfig {
        endpoint: section
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_TTS_ENDPOINT.to_string()),
        languages: section.languages.clone().unwrap_or(defaults.languages),
        temp_dir: section.temp_dir.as_deref().map(paths::expand_home),
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/bn2hi/config.toml`
    /// or `~/.config/bn2hi/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, or the defaults when none exists.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    fn llm_provider(api_key_env: Option<&str>) -> ProviderConfig {
        ProviderConfig {
            kind: ProviderKind::Llm,
            endpoint: "http://localhost:11434".to_string(),
            model: Some("gemma3:12b".to_string()),
            api_key: None,
            api_key_env: api_key_env.map(str::to_string),
        }
    }

    fn create_test_config() -> ConfigFile {
        let mut providers = BTreeMap::new();
        providers.insert("ollama".to_string(), llm_provider(None));
        providers.insert(
            "openrouter".to_string(),
            llm_provider(Some("BN2HI_TEST_NONEXISTENT_API_KEY")),
        );

        ConfigFile {
            bn2hi: Bn2hiConfig {
                provider: Some("ollama".to_string()),
                transliteration: None,
                dictionary: None,
            },
            providers,
            audio: AudioSection::default(),
        }
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(
            manager.config_path(),
            r#"
            [bn2hi]
            provider = "ollama"

            [providers.ollama]
            kind = "llm"
            endpoint = "http://localhost:11434"
            model = "gemma3:12b"
            "#,
        )
        .unwrap();

        let loaded = manager.load().unwrap();

        assert_eq!(loaded.bn2hi.provider, Some("ollama".to_string()));
        assert_eq!(loaded.providers["ollama"].kind, ProviderKind::Llm);
        assert!(loaded.audio.languages.is_none());
    }

    #[test]
    fn test_parse_documented_layout() {
        let config: ConfigFile = toml::from_str(
            r#"
            [bn2hi]
            provider = "openai"
            transliteration = false

            [providers.openai]
            kind = "llm"
            endpoint = "https://api.openai.com"
            model = "gpt-4o-mini"
            api_key_env = "OPENAI_API_KEY"

            [audio]
            languages = ["bn"]
            "#,
        )
        .unwrap();

        assert_eq!(config.bn2hi.transliteration, Some(false));
        assert_eq!(config.providers["openai"].model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.audio.languages, Some(vec!["bn".to_string()]));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        let config = manager.load_or_default().unwrap();
        assert!(config.providers.is_empty());
    }

    #[test]
    fn test_load_or_default_reports_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[bn2hi\nprovider =").unwrap();

        assert!(manager.load_or_default().is_err());
    }

    #[test]
    #[serial]
    fn test_provider_get_api_key_from_env() {
        // SAFETY: serialized with other tests touching the environment
        unsafe {
            std::env::set_var("BN2HI_TEST_API_KEY", "test-key-value");
        }

        let mut provider = llm_provider(Some("BN2HI_TEST_API_KEY"));
        provider.api_key = Some("fallback-key".to_string());

        // Environment variable takes priority
        assert_eq!(provider.get_api_key(), Some("test-key-value".to_string()));

        // SAFETY: serialized with other tests touching the environment
        unsafe {
            std::env::remove_var("BN2HI_TEST_API_KEY");
        }
    }

    #[test]
    fn test_provider_get_api_key_fallback() {
        let mut provider = llm_provider(Some("BN2HI_TEST_NONEXISTENT_API_KEY"));
        provider.api_key = Some("fallback-key".to_string());

        assert_eq!(provider.get_api_key(), Some("fallback-key".to_string()));
    }

    #[test]
    fn test_provider_requires_api_key() {
        assert!(llm_provider(Some("API_KEY")).requires_api_key());
        assert!(!llm_provider(None).requires_api_key());
    }

    // resolve_config tests

    #[test]
    fn test_resolve_config_defaults_to_google() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.provider_name, "google");
        assert_eq!(
            resolved.provider,
            ResolvedProvider::Google {
                endpoint: GOOGLE_ENDPOINT.to_string()
            }
        );
        assert!(resolved.transliteration);
        assert_eq!(resolved.audio, AudioConfig::default());
    }

    #[test]
    fn test_resolve_config_falls_back_to_file() {
        let resolved = resolve_config(&ResolveOptions::default(), &create_test_config()).unwrap();

        assert_eq!(resolved.provider_name, "ollama");
        assert!(matches!(
            resolved.provider,
            ResolvedProvider::Llm { ref model, .. } if model == "gemma3:12b"
        ));
    }

    #[test]
    fn test_resolve_config_cli_overrides_file() {
        let options = ResolveOptions {
            provider: Some("google".to_string()),
            offline: false,
        };

        let resolved = resolve_config(&options, &create_test_config()).unwrap();

        assert_eq!(resolved.provider_name, "google");
    }

    #[test]
    fn test_resolve_config_offline_wins() {
        let options = ResolveOptions {
            provider: Some("nonexistent".to_string()),
            offline: true,
        };

        let resolved = resolve_config(&options, &create_test_config()).unwrap();

        assert_eq!(resolved.provider, ResolvedProvider::Offline);
        assert!(matches!(resolved.provider.client(), RemoteClient::Offline));
    }

    #[test]
    fn test_resolve_config_provider_not_found() {
        let options = ResolveOptions {
            provider: Some("nonexistent".to_string()),
            offline: false,
        };

        let result = resolve_config(&options, &create_test_config());

        let message = result.unwrap_err().to_string();
        assert!(message.contains("not found"));
        assert!(message.contains("google"));
        assert!(message.contains("ollama"));
    }

    #[test]
    fn test_resolve_config_llm_without_model() {
        let mut config = create_test_config();
        if let Some(provider) = config.providers.get_mut("ollama") {
            provider.model = None;
        }

        let result = resolve_config(&ResolveOptions::default(), &config);

        assert!(result.unwrap_err().to_string().contains("model"));
    }

    #[test]
    fn test_resolve_config_missing_api_key_is_deferred() {
        let options = ResolveOptions {
            provider: Some("openrouter".to_string()),
            offline: false,
        };

        let resolved = resolve_config(&options, &create_test_config()).unwrap();

        assert!(matches!(
            resolved.provider,
            ResolvedProvider::Llm {
                api_key: None,
                requires_api_key: true,
                ..
            }
        ));
    }

    #[test]
    fn test_resolve_config_transliteration_can_be_disabled() {
        let mut config = create_test_config();
        config.bn2hi.transliteration = Some(false);

        let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

        assert!(!resolved.transliteration);
    }
}
