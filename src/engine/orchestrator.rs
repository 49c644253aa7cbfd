//! Tiered resolution: cache, dictionary, remote, transliteration, sentinel.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::types::{LineTranslation, TextUnit, Tier, TranslationResult};
use crate::cache::TranslationCache;
use crate::dictionary::Dictionary;
use crate::tokenizer::segment_words;
use crate::translation::{RemoteTranslator, SOURCE_LANGUAGE, TARGET_LANGUAGE};
use crate::transliterate::transliterate;

/// Walks the resolution tiers for single units and whole lines.
///
/// The resolver owns the read-only tiers; the cache is passed in by the
/// session so that every write is visible to the next lookup.
#[derive(Debug)]
pub struct Resolver<R> {
    dictionary: Dictionary,
    remote: R,
    transliteration: bool,
}

impl<R: RemoteTranslator> Resolver<R> {
    pub const fn new(dictionary: Dictionary, remote: R, transliteration: bool) -> Self {
        Self {
            dictionary,
            remote,
            transliteration,
        }
    }

    pub const fn remote(&self) -> &R {
        &self.remote
    }

    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Resolves one unit, trying each tier in order until one succeeds.
    ///
    /// Never fails: when no tier applies the result carries the sentinel and
    /// is left out of the cache so that a later attempt can still succeed.
    pub async fn resolve_unit(
        &self,
        cache: &mut TranslationCache,
        unit: &TextUnit,
    ) -> TranslationResult {
        if let Some(result) = self.resolve_local(cache, unit) {
            return result;
        }

        let result = match self
            .remote
            .translate(unit.normalized(), SOURCE_LANGUAGE, TARGET_LANGUAGE)
            .await
        {
            Ok(translated) => {
                debug!(unit = %unit, "resolved by remote");
                TranslationResult::new(unit.clone(), translated, Tier::Remote)
            }
            Err(err) => {
                debug!(unit = %unit, error = %err, "remote unavailable");
                self.fallback(unit)
            }
        };

        settle(cache, unit, result)
    }

    /// Resolves a line and each of its tokens.
    pub async fn resolve_line(
        &self,
        cache: &mut TranslationCache,
        line: TextUnit,
    ) -> LineTranslation {
        let line_result = self.resolve_unit(cache, &line).await;
        let tokens = segment_words(&line);
        let word_results = self.resolve_words(cache, &tokens).await;

        LineTranslation {
            line,
            line_result,
            word_results,
        }
    }

    /// Resolves the tokens of one line, in order.
    ///
    /// Tokens that the cache or dictionary cannot answer are sent to the
    /// remote tier in a single batch. Tokens missing from the batch answer,
    /// or all of them when the batch fails, continue to the fallback tier.
    pub async fn resolve_words(
        &self,
        cache: &mut TranslationCache,
        tokens: &[TextUnit],
    ) -> Vec<TranslationResult> {
        let mut results: Vec<Option<TranslationResult>> = Vec::with_capacity(tokens.len());
        let mut pending: Vec<String> = Vec::new();

        for token in tokens {
            let local = self.resolve_local(cache, token);
            if local.is_none() && !pending.iter().any(|p| p == token.normalized()) {
                pending.push(token.normalized().to_string());
            }
            results.push(local);
        }

        if pending.is_empty() {
            return results.into_iter().flatten().collect();
        }

        let mut remote = match self
            .remote
            .translate_batch(&pending, SOURCE_LANGUAGE, TARGET_LANGUAGE)
            .await
        {
            Ok(translated) => translated,
            Err(err) => {
                warn!(tokens = pending.len(), error = %err, "batch translation unavailable");
                HashMap::new()
            }
        };

        let mut settled: HashMap<String, TranslationResult> = HashMap::new();

        tokens
            .iter()
            .zip(results)
            .map(|(token, local)| {
                if let Some(result) = local {
                    return result;
                }
                let key = token.normalized();
                if let Some(result) = settled.get(key) {
                    return TranslationResult::new(token.clone(), &result.translated, result.tier);
                }

                let result = match remote.remove(key) {
                    Some(translated) => {
                        TranslationResult::new(token.clone(), translated, Tier::Remote)
                    }
                    None => self.fallback(token),
                };
                let result = settle(cache, token, result);
                settled.insert(key.to_string(), result.clone());
                result
            })
            .collect()
    }

    /// Cache, then dictionary. A dictionary hit is cached.
    fn resolve_local(
        &self,
        cache: &mut TranslationCache,
        unit: &TextUnit,
    ) -> Option<TranslationResult> {
        if let Some(cached) = cache.get(unit) {
            return Some(cached.clone());
        }

        let translated = self.dictionary.lookup(unit.normalized())?;
        debug!(unit = %unit, "resolved by dictionary");
        let result = TranslationResult::new(unit.clone(), translated, Tier::Dictionary);
        Some(settle(cache, unit, result))
    }

    fn fallback(&self, unit: &TextUnit) -> TranslationResult {
        let content = unit.normalized();
        if !self.transliteration || content.is_empty() {
            debug!(unit = %unit, "no tier could resolve unit");
            return TranslationResult::unresolved(unit.clone());
        }

        debug!(unit = %unit, "resolved by transliteration");
        TranslationResult::new(unit.clone(), transliterate(content), Tier::Fallback)
    }
}

/// Caches `result` unless it is the error tier.
fn settle(
    cache: &mut TranslationCache,
    unit: &TextUnit,
    result: TranslationResult,
) -> TranslationResult {
    if !result.is_unresolved() {
        cache.put(unit, result.clone());
    }
    result
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RemoteError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers from a fixed table and counts every call.
    #[derive(Default)]
    struct MockRemote {
        answers: HashMap<String, String>,
        available: bool,
        single_calls: AtomicUsize,
        batch_calls: AtomicUsize,
        batch_sizes: std::sync::Mutex<Vec<usize>>,
    }

    impl MockRemote {
        fn with(answers: &[(&str, &str)]) -> Self {
            Self {
                answers: answers
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                    .collect(),
                available: true,
                ..Self::default()
            }
        }

        fn unavailable() -> Self {
            Self::default()
        }

        fn calls(&self) -> usize {
            self.single_calls.load(Ordering::SeqCst) + self.batch_calls.load(Ordering::SeqCst)
        }
    }

    impl RemoteTranslator for MockRemote {
        async fn translate(&self, text: &str, _: &str, _: &str) -> Result<String, RemoteError> {
            self.single_calls.fetch_add(1, Ordering::SeqCst);
            if !self.available {
                return Err(RemoteError::Connection("unreachable".to_string()));
            }
            self.answers
                .get(text)
                .cloned()
                .ok_or_else(|| RemoteError::InvalidResponse("unknown".to_string()))
        }

        async fn translate_batch(
            &self,
            tokens: &[String],
            _: &str,
            _: &str,
        ) -> Result<HashMap<String, String>, RemoteError> {
            self.batch_calls.fetch_add(1, Ordering::SeqCst);
            self.batch_sizes.lock().unwrap().push(tokens.len());
            if !self.available {
                return Err(RemoteError::RateLimited);
            }
            Ok(tokens
                .iter()
                .filter_map(|t| self.answers.get(t).map(|v| (t.clone(), v.clone())))
                .collect())
        }
    }

    fn resolver(remote: MockRemote) -> Resolver<MockRemote> {
        let dictionary = Dictionary::from_entries([("নমস্কার", "नमस्कार")]);
        Resolver::new(dictionary, remote, true)
    }

    #[tokio::test]
    async fn test_dictionary_tier_skips_remote() {
        let resolver = resolver(MockRemote::with(&[]));
        let mut cache = TranslationCache::new();

        let result = resolver
            .resolve_unit(&mut cache, &TextUnit::from("নমস্কার"))
            .await;

        assert_eq!(result.translated, "नमस्कार");
        assert_eq!(result.tier, Tier::Dictionary);
        assert_eq!(resolver.remote().calls(), 0);
    }

    #[tokio::test]
    async fn test_remote_tier_is_cached() {
        let resolver = resolver(MockRemote::with(&[("রাজা", "राजा")]));
        let mut cache = TranslationCache::new();
        let unit = TextUnit::from("রাজা");

        let first = resolver.resolve_unit(&mut cache, &unit).await;
        let second = resolver.resolve_unit(&mut cache, &unit).await;

        assert_eq!(first.tier, Tier::Remote);
        assert_eq!(first, second);
        assert_eq!(resolver.remote().calls(), 1);
    }

    #[tokio::test]
    async fn test_remote_unavailable_falls_back_to_transliteration() {
        let resolver = resolver(MockRemote::unavailable());
        let mut cache = TranslationCache::new();

        let result = resolver.resolve_unit(&mut cache, &TextUnit::from("ক")).await;

        assert_eq!(result.translated, "क");
        assert_eq!(result.tier, Tier::Fallback);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_error_tier_is_not_cached() {
        let dictionary = Dictionary::empty();
        let resolver = Resolver::new(dictionary, MockRemote::unavailable(), false);
        let mut cache = TranslationCache::new();
        let unit = TextUnit::from("ক");

        let first = resolver.resolve_unit(&mut cache, &unit).await;
        let second = resolver.resolve_unit(&mut cache, &unit).await;

        assert!(first.is_unresolved());
        assert_eq!(first.translated, "?");
        assert!(second.is_unresolved());
        assert!(cache.is_empty());
        assert_eq!(resolver.remote().calls(), 2);
    }

    #[tokio::test]
    async fn test_words_are_sent_in_one_deduplicated_batch() {
        let resolver = resolver(MockRemote::with(&[("রাজা", "राजा"), ("রানী", "रानी")]));
        let mut cache = TranslationCache::new();
        let tokens = segment_words("রাজা রানী রাজা নমস্কার");

        let results = resolver.resolve_words(&mut cache, &tokens).await;

        let translated: Vec<&str> = results.iter().map(|r| r.translated.as_str()).collect();
        assert_eq!(translated, vec!["राजा", "रानी", "राजा", "नमस्कार"]);
        assert_eq!(results[3].tier, Tier::Dictionary);
        assert_eq!(resolver.remote().batch_calls.load(Ordering::SeqCst), 1);
        assert_eq!(*resolver.remote().batch_sizes.lock().unwrap(), vec![2]);
    }

    #[tokio::test]
    async fn test_unmatched_batch_tokens_fall_back() {
        let resolver = resolver(MockRemote::with(&[("রাজা", "राजा")]));
        let mut cache = TranslationCache::new();
        let tokens = segment_words("রাজা ক");

        let results = resolver.resolve_words(&mut cache, &tokens).await;

        assert_eq!(results[0].tier, Tier::Remote);
        assert_eq!(results[1].tier, Tier::Fallback);
        assert_eq!(results[1].translated, "क");
    }

    #[tokio::test]
    async fn test_failed_batch_falls_back_for_every_token() {
        let resolver = resolver(MockRemote::unavailable());
        let mut cache = TranslationCache::new();
        let tokens = segment_words("ক, খ");

        let results = resolver.resolve_words(&mut cache, &tokens).await;

        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.tier == Tier::Fallback));
        assert_eq!(results[1].translated, ",");
    }

    #[tokio::test]
    async fn test_cached_tokens_skip_batch() {
        let resolver = resolver(MockRemote::with(&[("রাজা", "राजा")]));
        let mut cache = TranslationCache::new();
        let tokens = segment_words("রাজা");

        resolver.resolve_words(&mut cache, &tokens).await;
        resolver.resolve_words(&mut cache, &tokens).await;

        assert_eq!(resolver.remote().batch_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_resolve_line_keeps_token_order() {
        let resolver = resolver(MockRemote::unavailable());
        let mut cache = TranslationCache::new();

        let line = resolver
            .resolve_line(&mut cache, TextUnit::from("কী?"))
            .await;

        let sources: Vec<&str> = line.word_results.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["কী", "?"]);
        assert_eq!(line.line_result.tier, Tier::Fallback);
    }
}
