use std::fmt;
use std::ops::Deref;

/// Placeholder shown for a unit no tier could resolve.
pub const SENTINEL: &str = "?";

/// A line or token of source text, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextUnit(String);

impl TextUnit {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cache key for this unit: the content without surrounding whitespace.
    pub fn normalized(&self) -> &str {
        self.0.trim()
    }
}

impl Deref for TextUnit {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TextUnit {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for TextUnit {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for TextUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The resolution strategy that produced a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Dictionary,
    Remote,
    Fallback,
    Error,
}

impl Tier {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dictionary => "dictionary",
            Self::Remote => "remote",
            Self::Fallback => "fallback",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved translation together with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub source: TextUnit,
    pub translated: String,
    pub tier: Tier,
}

impl TranslationResult {
    pub fn new(source: TextUnit, translated: impl Into<String>, tier: Tier) -> Self {
        Self {
            source,
            translated: translated.into(),
            tier,
        }
    }

    /// Result for a unit that every tier failed on.
    pub fn unresolved(source: TextUnit) -> Self {
        Self::new(source, SENTINEL, Tier::Error)
    }

    pub fn is_unresolved(&self) -> bool {
        self.tier == Tier::Error
    }
}

/// Translation of one input line and of each of its tokens, in token order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTranslation {
    pub line: TextUnit,
    pub line_result: TranslationResult,
    pub word_results: Vec<TranslationResult>,
}

impl LineTranslation {
    /// True when neither the line nor any of its tokens fell to the error tier.
    pub fn is_complete(&self) -> bool {
        !self.line_result.is_unresolved()
            && self.word_results.iter().all(|word| !word.is_unresolved())
    }
}
