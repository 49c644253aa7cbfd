use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use crate::engine::{TextUnit, TranslationResult};

/// Hit and miss counters since the cache was created or last cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: usize,
    pub misses: usize,
}

/// Session-lifetime translation cache keyed by trimmed unit content.
///
/// Entries are never evicted; `clear` is the only way to drop them.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: HashMap<String, TranslationResult>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, unit: &TextUnit) -> Option<&TranslationResult> {
        let result = self.entries.get(unit.normalized());

        if result.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(unit = %unit, "cache hit");
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(unit = %unit, "cache miss");
        }

        result
    }

    /// Stores `result`, replacing any previous entry for the same unit.
    pub fn put(&mut self, unit: &TextUnit, result: TranslationResult) {
        self.entries.insert(unit.normalized().to_string(), result);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        debug!("translation cache cleared");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
