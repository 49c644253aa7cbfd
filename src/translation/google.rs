//! Generic machine-translation backend (Google Translate `gtx` endpoint).

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use super::{RemoteTranslator, clean_translation, status_error};
use crate::error::RemoteError;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

#[derive(Debug, Clone)]
pub struct GoogleClient {
    client: Client,
    endpoint: String,
}

impl GoogleClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    fn request_url(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<Url, RemoteError> {
        let base = format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'));
        Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("sl", source_language),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| RemoteError::Connection(format!("invalid endpoint '{base}': {e}")))
    }
}

impl RemoteTranslator for GoogleClient {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, RemoteError> {
        let url = self.request_url(text, source_language, target_language)?;
        debug!(endpoint = %self.endpoint, "requesting machine translation");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RemoteError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::Connection(e.to_string()))?;

        parse_response(&body)
    }
}

/// Joins the translated segments of a `translate_a/single` response.
///
/// The body is a nested array whose first element lists one
/// `[translated, source, ...]` entry per sentence.
fn parse_response(body: &str) -> Result<String, RemoteError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| RemoteError::InvalidResponse(format!("not JSON: {e}")))?;

    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| RemoteError::InvalidResponse("missing translation segments".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    clean_translation(&text)
}
