//! Remote translation backends.
//!
//! The resolution pipeline only talks to [`RemoteTranslator`]. Backends never
//! cache; every call goes to the service.

mod batch;
mod client;
mod google;
mod language;
mod prompt;
mod sse_parser;

use std::collections::HashMap;
use std::future::Future;

use reqwest::StatusCode;
use tracing::debug;

use crate::error::RemoteError;

pub use batch::{BatchPair, match_pairs, parse_batch_response};
pub use client::LlmClient;
pub use google::{DEFAULT_ENDPOINT as GOOGLE_ENDPOINT, GoogleClient};
pub use language::{
    SOURCE_LANGUAGE, SUPPORTED_LANGUAGES, TARGET_LANGUAGE, language_name, validate_language,
};

/// A translation service reached over the network.
pub trait RemoteTranslator: Send + Sync {
    /// Translates one text unit.
    fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> impl Future<Output = Result<String, RemoteError>> + Send;

    /// Translates the tokens of one line.
    ///
    /// The returned map is keyed by token; tokens the service did not answer
    /// for are absent. The default issues one request per token and only fails
    /// when no token could be translated.
    fn translate_batch(
        &self,
        tokens: &[String],
        source_language: &str,
        target_language: &str,
    ) -> impl Future<Output = Result<HashMap<String, String>, RemoteError>> + Send {
        async move {
            let mut translated = HashMap::new();
            let mut last_error = None;

            for token in tokens {
                match self.translate(token, source_language, target_language).await {
                    Ok(text) => {
                        translated.insert(token.clone(), text);
                    }
                    Err(err) => {
                        debug!(token = %token, error = %err, "token translation failed");
                        last_error = Some(err);
                    }
                }
            }

            match last_error {
                Some(err) if translated.is_empty() => Err(err),
                _ => Ok(translated),
            }
        }
    }
}

/// The backend selected by configuration.
#[derive(Debug)]
pub enum RemoteClient {
    Google(GoogleClient),
    Llm(LlmClient),
    /// No remote tier: every call is unavailable.
    Offline,
}

impl RemoteTranslator for RemoteClient {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, RemoteError> {
        match self {
            Self::Google(client) => client.translate(text, source_language, target_language).await,
            Self::Llm(client) => client.translate(text, source_language, target_language).await,
            Self::Offline => Err(RemoteError::Offline),
        }
    }

    async fn translate_batch(
        &self,
        tokens: &[String],
        source_language: &str,
        target_language: &str,
    ) -> Result<HashMap<String, String>, RemoteError> {
        match self {
            Self::Google(client) => {
                client.translate_batch(tokens, source_language, target_language).await
            }
            Self::Llm(client) => {
                client.translate_batch(tokens, source_language, target_language).await
            }
            Self::Offline => Err(RemoteError::Offline),
        }
    }
}

/// Maps a non-success HTTP status to the matching unavailability reason.
pub(crate) fn status_error(status: StatusCode, body: String) -> RemoteError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => RemoteError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            RemoteError::Unauthorized(status.as_u16())
        }
        _ => RemoteError::Status {
            status: status.as_u16(),
            body,
        },
    }
}

/// Trims model or service output and rejects empty answers.
pub(crate) fn clean_translation(text: &str) -> Result<String, RemoteError> {
    let cleaned = batch::strip_code_fence(text)
        .trim_matches(|c| c == '"' || c == '\u{201C}' || c == '\u{201D}')
        .trim();

    if cleaned.is_empty() {
        Err(RemoteError::InvalidResponse("empty translation".to_string()))
    } else {
        Ok(cleaned.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct PerToken {
        calls: AtomicUsize,
    }

    impl RemoteTranslator for PerToken {
        async fn translate(&self, text: &str, _: &str, _: &str) -> Result<String, RemoteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match text {
                "রাজা" => Ok("राजा".to_string()),
                _ => Err(RemoteError::InvalidResponse("unknown".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_default_batch_calls_per_token() {
        let remote = PerToken {
            calls: AtomicUsize::new(0),
        };
        let tokens = vec!["রাজা".to_string(), "অজানা".to_string()];

        let translated = remote.translate_batch(&tokens, "bn", "hi").await.unwrap();

        assert_eq!(remote.calls.load(Ordering::SeqCst), 2);
        assert_eq!(translated.len(), 1);
        assert_eq!(translated["রাজা"], "राजा");
    }

    #[tokio::test]
    async fn test_default_batch_fails_when_nothing_translated() {
        let remote = PerToken {
            calls: AtomicUsize::new(0),
        };
        let tokens = vec!["অজানা".to_string()];

        let result = remote.translate_batch(&tokens, "bn", "hi").await;
        assert!(matches!(result, Err(RemoteError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_offline_client_is_unavailable() {
        let client = RemoteClient::Offline;
        assert!(matches!(
            client.translate("ক", "bn", "hi").await,
            Err(RemoteError::Offline)
        ));
        assert!(matches!(
            client.translate_batch(&["ক".to_string()], "bn", "hi").await,
            Err(RemoteError::Offline)
        ));
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, String::new()),
            RemoteError::RateLimited
        ));
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, String::new()),
            RemoteError::Unauthorized(401)
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, "upstream".to_string()),
            RemoteError::Status { status: 502, .. }
        ));
    }

    #[test]
    fn test_clean_translation() {
        assert_eq!(clean_translation("  \"नमस्ते\"\n").unwrap(), "नमस्ते");
        assert_eq!(clean_translation("```\nनमस्ते\n```").unwrap(), "नमस्ते");
        assert!(clean_translation("   ").is_err());
        assert!(clean_translation("\"\"").is_err());
    }
}
