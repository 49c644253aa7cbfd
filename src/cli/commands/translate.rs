use anyhow::Result;
use std::io::{self, Write};

use crate::config::ResolveOptions;
use crate::engine::Engine;
use crate::input::InputReader;
use crate::ui::{Spinner, View, render};

pub struct TranslateOptions {
    pub file: Option<String>,
    pub view: View,
    pub provider: Option<String>,
    pub offline: bool,
    pub show_tiers: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = super::load_config(&ResolveOptions {
        provider: options.provider.clone(),
        offline: options.offline,
    })?;

    let source_text = InputReader::read(options.file.as_deref())?;

    let mut engine = Engine::from_config(&config)?;

    let spinner = Spinner::new("Translating...");
    let lines = engine.resolve_block(&source_text).await;
    spinner.stop();

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render(&lines, options.view, options.show_tiers))?;
    stdout.flush()?;
    drop(stdout);

    let unresolved = lines.iter().filter(|line| !line.is_complete()).count();
    if unresolved > 0 {
        crate::warn!("Warning: {unresolved} line(s) contain unresolved text");
    }

    let stats = engine.session().stats();
    crate::status!(
        "{} lines, {} words via {}",
        stats.lines,
        stats.words,
        config.provider_name
    );

    Ok(())
}
