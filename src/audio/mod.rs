//! On-demand speech synthesis.
//!
//! Every request renders into its own transient file, reads the payload back
//! and deletes the file before returning. The file is also deleted when the
//! request fails or its future is dropped midway, since the slot is owned by a
//! [`tempfile::NamedTempFile`] for the whole request.

mod google;

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::engine::TextUnit;
use crate::error::SynthesisError;

pub use google::{DEFAULT_TTS_ENDPOINT, GoogleSpeech, split_for_speech};

/// Process-wide sequence number for transient slot names.
static SLOT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// A text-to-speech service.
pub trait SpeechBackend: Send + Sync {
    /// Renders `text` spoken in `language` into the file at `path`.
    ///
    /// The file already exists and is empty; implementations append to it.
    fn synthesize_to(
        &self,
        text: &str,
        language: &str,
        path: &Path,
    ) -> impl Future<Output = Result<(), SynthesisError>> + Send;
}

/// Which languages can be spoken and where transient files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioConfig {
    pub endpoint: String,
    pub languages: Vec<String>,
    /// Directory for transient files; the system temp dir when unset.
    pub temp_dir: Option<PathBuf>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_TTS_ENDPOINT.to_string(),
            languages: vec!["bn".to_string(), "hi".to_string()],
            temp_dir: None,
        }
    }
}

impl AudioConfig {
    pub fn supports(&self, language: &str) -> bool {
        self.languages.iter().any(|enabled| enabled == language)
    }
}

/// Synthesized speech for one text unit. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioAsset {
    pub text: TextUnit,
    pub language: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug)]
pub struct AudioSynthesizer<S> {
    backend: S,
    config: AudioConfig,
}

impl<S: SpeechBackend> AudioSynthesizer<S> {
    pub const fn new(backend: S, config: AudioConfig) -> Self {
        Self { backend, config }
    }

    pub const fn config(&self) -> &AudioConfig {
        &self.config
    }

    /// Synthesizes `text` in `language`.
    ///
    /// Nothing is cached: repeated requests render again.
    pub async fn synthesize(
        &self,
        text: &TextUnit,
        language: &str,
    ) -> Result<AudioAsset, SynthesisError> {
        let content = text.normalized();
        if content.is_empty() {
            return Err(SynthesisError::EmptyText);
        }
        if !self.config.supports(language) {
            return Err(SynthesisError::UnsupportedLanguage(language.to_string()));
        }

        let slot = self.acquire_slot(language)?;
        debug!(path = %slot.path().display(), language, "acquired audio slot");

        self.backend
            .synthesize_to(content, language, slot.path())
            .await?;

        let bytes = tokio::fs::read(slot.path()).await?;
        if bytes.is_empty() {
            return Err(SynthesisError::EmptyPayload);
        }

        let path = slot.path().to_path_buf();
        if let Err(err) = slot.close() {
            warn!(path = %path.display(), error = %err, "failed to remove audio slot");
        }

        Ok(AudioAsset {
            text: TextUnit::new(content),
            language: language.to_string(),
            bytes,
        })
    }

    fn acquire_slot(&self, language: &str) -> Result<NamedTempFile, SynthesisError> {
        let seq = SLOT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let prefix = format!("bn2hi-{language}-{seq}-");

        let mut builder = tempfile::Builder::new();
        builder.prefix(&prefix).suffix(".mp3");

        let slot = match &self.config.temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        Ok(slot)
    }
}
