//! Provider listing command handler.

use anyhow::Result;

use crate::config::{ConfigManager, DEFAULT_PROVIDER, ProviderConfig, ProviderKind};
use crate::ui::Style;

/// Prints configured providers to stdout.
///
/// If `specific_provider` is provided, shows detailed information for that provider.
/// Otherwise, lists every provider (the built-in `google` one included).
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;
    let providers = config.all_providers();

    let default_provider = config.bn2hi.provider.as_deref().unwrap_or(DEFAULT_PROVIDER);

    if let Some(provider_name) = specific_provider {
        let Some(provider) = providers.get(provider_name) else {
            anyhow::bail!("Provider '{provider_name}' not found");
        };
        let is_default = default_provider == provider_name;
        println!(
            "Provider: {}{}",
            Style::value(provider_name),
            if is_default { " (default)" } else { "" }
        );
        print_details(provider, "  ");
    } else {
        println!("{}\n", Style::header("Configured providers:"));
        for (name, provider) in &providers {
            let marker = if name == default_provider {
                format!(" {}", Style::default_marker())
            } else {
                String::new()
            };
            println!("  {}{marker}", Style::value(name));
            print_details(provider, "    ");
        }
    }

    Ok(())
}

fn print_details(provider: &ProviderConfig, indent: &str) {
    let kind = match provider.kind {
        ProviderKind::Google => "google",
        ProviderKind::Llm => "llm",
    };
    println!("{indent}{}     {kind}", Style::label("kind"));
    println!(
        "{indent}{} {}",
        Style::label("endpoint"),
        Style::secondary(&provider.endpoint)
    );
    if let Some(model) = &provider.model {
        println!("{indent}{}    {model}", Style::label("model"));
    }
    if provider.requires_api_key() {
        let has_key = provider.get_api_key().is_some();
        println!(
            "{indent}{}  {}",
            Style::label("api_key"),
            if has_key {
                Style::success("(set)")
            } else {
                Style::warning("(not set)")
            }
        );
    }
}
