//! Strict extraction of word pairs from free-form model output.
//!
//! Model output is untrusted: it may wrap the JSON in prose or code fences,
//! reorder entries, add unrelated ones, or omit some. The parser either finds
//! a well-formed structure or reports why it could not.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::BatchParseError;

const SOURCE_KEYS: &[&str] = &["bengali", "source"];
const TRANSLATION_KEYS: &[&str] = &["hindi", "translation"];

/// One `{source, translation}` pair reported by the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPair {
    pub source: String,
    pub translation: String,
}

/// Extracts the pairs from the first well-formed JSON array or object in `raw`.
///
/// Accepted shapes are an array of pair objects, a single pair object, or an
/// object wrapping such an array under any key. Objects without both a source
/// and a translation key are skipped.
pub fn parse_batch_response(raw: &str) -> Result<Vec<BatchPair>, BatchParseError> {
    let text = strip_code_fence(raw);
    let mut found_json = false;

    for (idx, ch) in text.char_indices() {
        if ch != '[' && ch != '{' {
            continue;
        }

        let mut de = serde_json::Deserializer::from_str(&text[idx..]);
        let Ok(value) = Value::deserialize(&mut de) else {
            continue;
        };
        found_json = true;

        if let Some(pairs) = pairs_from_value(&value) {
            return Ok(pairs);
        }
    }

    if found_json {
        Err(BatchParseError::NoPairs)
    } else {
        Err(BatchParseError::NoStructure)
    }
}

/// Maps each requested token to its translation by source key.
///
/// Position in the response is ignored. The first pair for a key wins;
/// tokens without a pair are absent from the result.
pub fn match_pairs(tokens: &[String], pairs: Vec<BatchPair>) -> HashMap<String, String> {
    let mut by_source: HashMap<String, String> = HashMap::new();
    for pair in pairs {
        by_source
            .entry(pair.source.trim().to_string())
            .or_insert(pair.translation);
    }

    tokens
        .iter()
        .filter_map(|token| {
            by_source
                .get(token.trim())
                .map(|translation| (token.clone(), translation.clone()))
        })
        .collect()
}

fn pairs_from_value(value: &Value) -> Option<Vec<BatchPair>> {
    match value {
        Value::Array(items) => {
            let pairs: Vec<BatchPair> = items.iter().filter_map(pair_from_object).collect();
            (items.is_empty() || !pairs.is_empty()).then_some(pairs)
        }
        Value::Object(map) => pair_from_object(value)
            .map(|pair| vec![pair])
            .or_else(|| map.values().find_map(|nested| match nested {
                Value::Array(_) => pairs_from_value(nested),
                _ => None,
            })),
        _ => None,
    }
}

fn pair_from_object(value: &Value) -> Option<BatchPair> {
    let object = value.as_object()?;
    let field = |keys: &[&str]| {
        keys.iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    };

    Some(BatchPair {
        source: field(SOURCE_KEYS)?,
        translation: field(TRANSLATION_KEYS)?,
    })
}

/// Removes a surrounding Markdown code fence, if any.
pub(crate) fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. "json") on the opening fence line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
