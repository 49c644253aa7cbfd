use anyhow::{Context, Result};
use std::path::Path;

use crate::config::ResolveOptions;
use crate::engine::{Engine, TextUnit};
use crate::fs::atomic_write;
use crate::translation::validate_language;
use crate::ui::{Spinner, Style};

pub struct SpeakOptions {
    pub text: String,
    pub language: String,
    pub output: String,
    pub provider: Option<String>,
    pub offline: bool,
}

pub async fn run_speak(options: SpeakOptions) -> Result<()> {
    validate_language(&options.language)?;

    let config = super::load_config(&ResolveOptions {
        provider: options.provider.clone(),
        offline: options.offline,
    })?;
    let engine = Engine::from_config(&config)?;

    let spinner = Spinner::new("Synthesizing...");
    let audio = engine
        .resolve_audio(&TextUnit::new(options.text), &options.language)
        .await;
    spinner.stop();

    let bytes = audio.context("Failed to synthesize speech")?;
    atomic_write(Path::new(&options.output), &bytes)?;

    crate::status!(
        "{} Wrote {} ({} bytes)",
        Style::success("✓"),
        Style::value(&options.output),
        bytes.len()
    );
    Ok(())
}
