use std::path::Path;

use reqwest::{Client, Url};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::SpeechBackend;
use crate::error::SynthesisError;

pub const DEFAULT_TTS_ENDPOINT: &str = "https://translate.google.com";

/// Longest text the speech endpoint accepts per request, in characters.
const MAX_CHUNK_CHARS: usize = 100;

/// Speech through the public Google Translate TTS endpoint.
#[derive(Debug, Clone)]
pub struct GoogleSpeech {
    client: Client,
    endpoint: String,
}

impl GoogleSpeech {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    fn chunk_url(&self, chunk: &str, language: &str) -> Result<Url, SynthesisError> {
        let base = format!("{}/translate_tts", self.endpoint.trim_end_matches('/'));
        Url::parse_with_params(
            &base,
            &[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", chunk),
            ],
        )
        .map_err(|e| SynthesisError::Backend(format!("invalid endpoint '{base}': {e}")))
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: &str,
    ) -> Result<bytes::Bytes, SynthesisError> {
        let url = self.chunk_url(chunk, language)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SynthesisError::Backend(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SynthesisError::Backend(format!(
                "speech service responded with {status}"
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Backend(e.to_string()))
    }
}

impl SpeechBackend for GoogleSpeech {
    async fn synthesize_to(
        &self,
        text: &str,
        language: &str,
        path: &Path,
    ) -> Result<(), SynthesisError> {
        let chunks = split_for_speech(text, MAX_CHUNK_CHARS);
        debug!(chunks = chunks.len(), language, "requesting speech");

        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .open(path)
            .await?;

        // MP3 frames concatenate into a playable stream.
        for chunk in &chunks {
            let audio = self.fetch_chunk(chunk, language).await?;
            file.write_all(&audio).await?;
        }

        file.flush().await?;
        Ok(())
    }
}

/// Splits text into pieces of at most `max_chars` characters.
///
/// Breaks at whitespace and after sentence terminators (`।`, `.`, `?`, `!`).
/// A single word longer than `max_chars` is split between characters.
pub fn split_for_speech(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            chunks.extend(chars.chunks(max_chars).map(|piece| piece.iter().collect()));
            continue;
        }

        let needed = if current.is_empty() { word_len } else { word_len + 1 };
        if current_len + needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;

        if word.ends_with(['।', '.', '?', '!']) {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
