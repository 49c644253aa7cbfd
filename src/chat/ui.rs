//! Chat mode UI components.

use crate::config::{ResolvedConfig, ResolvedProvider};
use crate::engine::SessionStats;
use crate::ui::{Style, View};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Bengali → Hindi Translation",
        Style::header("bn2hi"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &ResolvedConfig, view: View) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("provider"),
        Style::value(&config.provider_name)
    );
    match &config.provider {
        ResolvedProvider::Google { endpoint } => {
            println!("  {}   {}", Style::label("endpoint"), Style::secondary(endpoint));
        }
        ResolvedProvider::Llm {
            endpoint, model, ..
        } => {
            println!("  {}      {}", Style::label("model"), Style::value(model));
            println!("  {}   {}", Style::label("endpoint"), Style::secondary(endpoint));
        }
        ResolvedProvider::Offline => {}
    }
    println!(
        "  {}   {}",
        Style::label("fallback"),
        Style::value(if config.transliteration { "transliteration" } else { "off" })
    );
    println!(
        "  {}      {}",
        Style::label("audio"),
        Style::value(config.audio.languages.join(", "))
    );
    println!("  {}       {}", Style::label("view"), Style::value(view.as_str()));
    println!();
}

pub fn print_stats(stats: &SessionStats) {
    println!("{}", Style::header("Session"));
    println!("  {}        {}", Style::label("lines"), Style::value(stats.lines));
    println!("  {}        {}", Style::label("words"), Style::value(stats.words));
    println!(
        "  {}        {} entries, {} hits, {} misses",
        Style::label("cache"),
        Style::value(stats.cache.entries),
        stats.cache.hits,
        stats.cache.misses
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let commands = [
        ("/view [line|word]", "Switch view (toggles without argument)"),
        ("/speak [bn|hi] [text]", "Save speech for the last input or given text"),
        ("/stats", "Show session statistics"),
        ("/reset", "Clear cached translations and history"),
        ("/config", "Show current configuration"),
        ("/help", "Show this help"),
        ("/quit", "Exit chat mode"),
    ];
    for (command, description) in commands {
        println!(
            "  {}{}",
            Style::command(format!("{command:<24}")),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_success(message: &str) {
    println!("{} {message}", Style::success("✓"));
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
