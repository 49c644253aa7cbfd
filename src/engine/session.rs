use std::collections::HashMap;

use crate::cache::{CacheStats, TranslationCache};

use super::types::LineTranslation;

/// Totals over the lines accumulated in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub lines: usize,
    pub words: usize,
    pub cache: CacheStats,
}

/// Per-session state: the translation cache and every line resolved so far.
///
/// Created empty, mutated only by the engine, cleared by [`Session::reset`].
#[derive(Debug, Default)]
pub struct Session {
    pub(super) cache: TranslationCache,
    lines: Vec<LineTranslation>,
    index: HashMap<String, usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in the order they were first resolved.
    pub fn lines(&self) -> &[LineTranslation] {
        &self.lines
    }

    pub fn line(&self, line: &str) -> Option<&LineTranslation> {
        self.index.get(line.trim()).map(|&i| &self.lines[i])
    }

    pub const fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Stores a resolved line, replacing an earlier resolution of the same line.
    pub(super) fn record(&mut self, translation: LineTranslation) {
        let key = translation.line.normalized().to_string();
        match self.index.get(&key) {
            Some(&i) => self.lines[i] = translation,
            None => {
                self.index.insert(key, self.lines.len());
                self.lines.push(translation);
            }
        }
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            lines: self.lines.len(),
            words: self.lines.iter().map(|l| l.word_results.len()).sum(),
            cache: self.cache.stats(),
        }
    }

    pub fn reset(&mut self) {
        self.cache.clear();
        self.lines.clear();
        self.index.clear();
    }
}
