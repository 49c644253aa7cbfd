//! Language codes understood by the engine.

use anyhow::Result;

/// Language the input text is written in (ISO 639-1).
pub const SOURCE_LANGUAGE: &str = "bn";

/// Language translations are produced in (ISO 639-1).
pub const TARGET_LANGUAGE: &str = "hi";

/// Supported language codes and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] =
    &[(SOURCE_LANGUAGE, "Bengali"), (TARGET_LANGUAGE, "Hindi")];

/// Returns the English name of a supported language code.
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(supported, _)| *supported == code)
        .map(|(_, name)| *name)
}

/// Validates that the given language code is supported.
///
/// # Errors
///
/// Returns an error if the language code is not in the supported list.
pub fn validate_language(lang: &str) -> Result<()> {
    if language_name(lang).is_some() {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes: bn (Bengali), hi (Hindi)"
        )
    }
}
