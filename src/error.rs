//! Error taxonomy of the translation engine.
//!
//! Remote failures never escape the resolution pipeline: they are recovered by
//! falling through to the next tier. Synthesis failures are surfaced to the
//! caller because no degraded audio exists.

use thiserror::Error;

/// A remote translation backend could not produce a usable answer.
///
/// Every variant means "remote unavailable" to the resolution pipeline.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// The service could not be reached or the connection dropped.
    #[error("Failed to reach translation service: {0}")]
    Connection(String),

    /// The service answered with a non-success status.
    #[error("Translation service responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Translation service rate limit exceeded")]
    RateLimited,

    /// The credential was rejected by the service.
    #[error("Translation service rejected the credential ({0})")]
    Unauthorized(u16),

    /// The provider needs an API key and none is configured.
    #[error("Provider '{provider}' requires an API key but none is set")]
    MissingCredential { provider: String },

    /// The response body could not be interpreted as a translation.
    #[error("Invalid response from translation service: {0}")]
    InvalidResponse(String),

    #[error("Malformed batch response: {0}")]
    MalformedBatch(#[from] BatchParseError),

    /// Remote translation is disabled for this session.
    #[error("Remote translation is disabled (offline mode)")]
    Offline,
}

/// Structured output could not be extracted from a model response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchParseError {
    #[error("no JSON array or object found in model response")]
    NoStructure,

    #[error("JSON in model response holds no source/translation pairs")]
    NoPairs,
}

/// Audio could not be produced for a text unit.
#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Audio is not enabled for language '{0}'")]
    UnsupportedLanguage(String),

    #[error("Nothing to synthesize: text is empty")]
    EmptyText,

    /// The speech service failed or answered with an error.
    #[error("Speech service failed: {0}")]
    Backend(String),

    /// The transient audio file could not be created, written or read.
    #[error("Transient audio storage failed: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Speech service returned an empty payload")]
    EmptyPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_error_converts_into_remote_error() {
        let err: RemoteError = BatchParseError::NoStructure.into();
        assert!(matches!(err, RemoteError::MalformedBatch(_)));
        assert!(err.to_string().contains("no JSON array"));
    }

    #[test]
    fn test_missing_credential_names_provider() {
        let err = RemoteError::MissingCredential {
            provider: "openai".to_string(),
        };
        assert!(err.to_string().contains("openai"));
    }

    #[test]
    fn test_io_error_converts_into_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SynthesisError = io.into();
        assert!(matches!(err, SynthesisError::Storage(_)));
    }
}
