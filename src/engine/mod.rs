//! The translation engine: the only surface a presentation shell talks to.
//!
//! An [`Engine`] owns one [`Session`] and resolves text blocks through the
//! tier chain, synthesizes audio on demand and resets its session state.

mod orchestrator;
mod session;
mod types;

use std::collections::HashSet;

use anyhow::Result;
use tracing::{debug, info};

use crate::audio::{AudioSynthesizer, GoogleSpeech, SpeechBackend};
use crate::config::ResolvedConfig;
use crate::dictionary::Dictionary;
use crate::error::SynthesisError;
use crate::tokenizer::segment_lines;
use crate::translation::{RemoteClient, RemoteTranslator};

pub use orchestrator::Resolver;
pub use session::{Session, SessionStats};
pub use types::{LineTranslation, SENTINEL, TextUnit, Tier, TranslationResult};

#[derive(Debug)]
pub struct Engine<R, S> {
    resolver: Resolver<R>,
    audio: AudioSynthesizer<S>,
    session: Session,
}

impl<R: RemoteTranslator, S: SpeechBackend> Engine<R, S> {
    pub fn new(resolver: Resolver<R>, audio: AudioSynthesizer<S>) -> Self {
        Self {
            resolver,
            audio,
            session: Session::new(),
        }
    }

    /// Resolves every distinct non-empty line of `raw_text`, in input order.
    ///
    /// Lines the session already resolved completely are returned as they are
    /// without touching any tier. Never fails; unresolvable units carry the
    /// sentinel.
    pub async fn resolve_block(&mut self, raw_text: &str) -> Vec<LineTranslation> {
        let mut seen = HashSet::new();
        let mut translations = Vec::new();

        for line in segment_lines(raw_text) {
            if !seen.insert(line.clone()) {
                continue;
            }

            if let Some(existing) = self.session.line(&line)
                && existing.is_complete()
            {
                debug!(line = %line, "line already resolved in session");
                translations.push(existing.clone());
                continue;
            }

            let translation = self
                .resolver
                .resolve_line(&mut self.session.cache, line)
                .await;
            self.session.record(translation.clone());
            translations.push(translation);
        }

        translations
    }

    /// Synthesizes speech for `unit` in `language` and returns the audio bytes.
    pub async fn resolve_audio(
        &self,
        unit: &TextUnit,
        language: &str,
    ) -> Result<Vec<u8>, SynthesisError> {
        let asset = self.audio.synthesize(unit, language).await?;
        Ok(asset.bytes)
    }

    /// Drops every cached translation and accumulated line.
    pub fn reset_cache(&mut self) {
        self.session.reset();
        info!("session reset");
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn resolver(&self) -> &Resolver<R> {
        &self.resolver
    }

    pub const fn audio(&self) -> &AudioSynthesizer<S> {
        &self.audio
    }
}

impl Engine<RemoteClient, GoogleSpeech> {
    /// Builds an engine with the backends selected by `config`.
    pub fn from_config(config: &ResolvedConfig) -> Result<Self> {
        let mut dictionary = Dictionary::builtin();
        if let Some(path) = &config.dictionary {
            dictionary.merge_file(path)?;
        }
        debug!(entries = dictionary.len(), "dictionary loaded");

        let resolver = Resolver::new(
            dictionary,
            config.provider.client(),
            config.transliteration,
        );
        let speech = GoogleSpeech::new(config.audio.endpoint.clone());
        let audio = AudioSynthesizer::new(speech, config.audio.clone());

        Ok(Self::new(resolver, audio))
    }
}
