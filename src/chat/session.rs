use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::path::PathBuf;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::audio::SpeechBackend;
use crate::config::ResolvedConfig;
use crate::engine::{Engine, LineTranslation, TextUnit};
use crate::fs::atomic_write;
use crate::translation::{RemoteTranslator, SOURCE_LANGUAGE, TARGET_LANGUAGE};
use crate::ui::{Spinner, View, is_prompt_cancelled, render};

/// An interactive translation session.
///
/// Every input is resolved through the same engine, so repeated lines and
/// words are served from the session cache until `/reset`.
pub struct ChatSession<R, S> {
    engine: Engine<R, S>,
    config: ResolvedConfig,
    view: View,
    show_tiers: bool,
    last_block: Vec<LineTranslation>,
}

impl<R: RemoteTranslator, S: SpeechBackend> ChatSession<R, S> {
    pub const fn new(
        engine: Engine<R, S>,
        config: ResolvedConfig,
        view: View,
        show_tiers: bool,
    ) -> Self {
        Self {
            engine,
            config,
            view,
            show_tiers,
            last_block: Vec::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type Bengali text, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.translate_and_print(&text).await;
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Returns `false` when the session should end.
    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => ui::print_config(&self.config, self.view),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::Quit => return false,
            SlashCommand::Stats => ui::print_stats(&self.engine.session().stats()),
            SlashCommand::Reset => {
                self.engine.reset_cache();
                self.last_block.clear();
                ui::print_success("Session cleared");
            }
            SlashCommand::View(name) => match next_view(self.view, name.as_deref()) {
                Ok(view) => {
                    self.view = view;
                    ui::print_success(&format!("View set to {}", view.as_str()));
                    if !self.last_block.is_empty() {
                        self.print_block();
                    }
                }
                Err(message) => ui::print_error(&message),
            },
            SlashCommand::Speak { language, text } => {
                self.speak(language.as_deref(), text.as_deref()).await;
            }
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
            }
        }
        true
    }

    async fn translate_and_print(&mut self, text: &str) {
        let spinner = Spinner::new("Translating...");
        let block = self.engine.resolve_block(text).await;
        spinner.stop();

        self.last_block = block;
        self.print_block();
    }

    fn print_block(&self) {
        println!("{}", render(&self.last_block, self.view, self.show_tiers));
        println!();
    }

    async fn speak(&self, language: Option<&str>, text: Option<&str>) {
        let (language, text) = match speech_request(language, text, &self.last_block) {
            Ok(request) => request,
            Err(message) => {
                ui::print_error(&message);
                return;
            }
        };

        let spinner = Spinner::new("Synthesizing...");
        let audio = self
            .engine
            .resolve_audio(&TextUnit::new(text), &language)
            .await;
        spinner.stop();

        let path = PathBuf::from(format!("speech-{language}.mp3"));
        match audio.map_err(anyhow::Error::from).and_then(|bytes| {
            atomic_write(&path, &bytes)?;
            Ok(bytes.len())
        }) {
            Ok(size) => {
                ui::print_success(&format!("Saved {} ({size} bytes)", path.display()));
            }
            Err(err) => ui::print_error(&format!("{err:#}")),
        }
    }
}

/// Picks the requested view, or the other one when none is named.
fn next_view(current: View, requested: Option<&str>) -> Result<View, String> {
    match requested {
        None => Ok(match current {
            View::Line => View::Word,
            View::Word => View::Line,
        }),
        Some(name) => {
            View::parse(name).ok_or_else(|| format!("Unknown view '{name}' (use line or word)"))
        }
    }
}

/// Works out what `/speak` should say.
///
/// Without explicit text, Bengali speaks the last input and Hindi speaks its
/// translation, skipping unresolved lines.
fn speech_request(
    language: Option<&str>,
    text: Option<&str>,
    last_block: &[LineTranslation],
) -> Result<(String, String), String> {
    let language = language.unwrap_or(SOURCE_LANGUAGE).to_string();

    if let Some(text) = text {
        return Ok((language, text.to_string()));
    }

    let lines: Vec<&str> = if language == TARGET_LANGUAGE {
        last_block
            .iter()
            .filter(|line| !line.line_result.is_unresolved())
            .map(|line| line.line_result.translated.as_str())
            .collect()
    } else {
        last_block.iter().map(|line| line.line.as_str()).collect()
    };

    if lines.is_empty() {
        Err("Nothing to speak yet; type some Bengali text first".to_string())
    } else {
        Ok((language, lines.join("\n")))
    }
}
