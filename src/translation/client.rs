use futures_util::StreamExt;
use reqwest::Client;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::batch::{match_pairs, parse_batch_response};
use super::language::language_name;
use super::prompt::{build_batch_prompt, build_line_prompt};
use super::sse_parser::sse_to_text_stream;
use super::{RemoteTranslator, clean_translation, status_error};
use crate::error::RemoteError;

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

/// Prompt-based translation through an OpenAI-compatible chat endpoint.
#[derive(Debug, Clone)]
pub struct LlmClient {
    client: Client,
    provider_name: String,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    requires_api_key: bool,
}

impl LlmClient {
    pub fn new(
        provider_name: String,
        endpoint: String,
        model: String,
        api_key: Option<String>,
        requires_api_key: bool,
    ) -> Self {
        Self {
            client: Client::new(),
            provider_name,
            endpoint,
            model,
            api_key,
            requires_api_key,
        }
    }

    /// Sends one system/user exchange and returns the full streamed answer.
    async fn complete(
        &self,
        system_prompt: String,
        user_content: &str,
    ) -> Result<String, RemoteError> {
        if self.requires_api_key && self.api_key.is_none() {
            return Err(RemoteError::MissingCredential {
                provider: self.provider_name.clone(),
            });
        }

        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Owned(system_prompt),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(user_content),
                },
            ],
            stream: true,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        // Add Authorization header if API key is present
        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        debug!(provider = %self.provider_name, model = %self.model, "requesting chat completion");

        let response = http_request
            .send()
            .await
            .map_err(|e| RemoteError::Connection(format!("{url}: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        let mut stream = std::pin::pin!(sse_to_text_stream(response.bytes_stream()));
        let mut full_response = String::new();

        while let Some(chunk) = stream.next().await {
            full_response.push_str(&chunk?);
        }

        Ok(full_response)
    }
}

impl RemoteTranslator for LlmClient {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, RemoteError> {
        let system_prompt = build_line_prompt(
            language_name(source_language).unwrap_or(source_language),
            language_name(target_language).unwrap_or(target_language),
        );

        let answer = self.complete(system_prompt, text).await?;
        clean_translation(&answer)
    }

    async fn translate_batch(
        &self,
        tokens: &[String],
        source_language: &str,
        target_language: &str,
    ) -> Result<HashMap<String, String>, RemoteError> {
        let system_prompt = build_batch_prompt(
            language_name(source_language).unwrap_or(source_language),
            language_name(target_language).unwrap_or(target_language),
        );
        let user_content = serde_json::to_string(tokens)
            .map_err(|e| RemoteError::InvalidResponse(format!("cannot encode tokens: {e}")))?;

        let answer = self.complete(system_prompt, &user_content).await?;

        let pairs = parse_batch_response(&answer).inspect_err(|err| {
            warn!(provider = %self.provider_name, error = %err, "could not extract word pairs");
        })?;

        let matched = match_pairs(tokens, pairs);
        if matched.len() < tokens.len() {
            debug!(
                requested = tokens.len(),
                matched = matched.len(),
                "model omitted some tokens"
            );
        }

        Ok(matched)
    }
}
