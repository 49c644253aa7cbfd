//! Exact-match phrase dictionary, the first resolution tier.

mod phrases;

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub use phrases::BUILTIN_PHRASES;

/// Curated phrase table with exact, whole-unit matching.
///
/// A unit either matches an entry verbatim after trimming or is not found;
/// there is no prefix or fuzzy lookup.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// An empty dictionary. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in phrase table.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_PHRASES.iter().copied())
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut dictionary = Self::empty();
        dictionary.extend(entries);
        dictionary
    }

    /// Adds entries, replacing existing translations for the same phrase.
    pub fn extend<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (source, target) in entries {
            let source = source.as_ref().trim();
            let target = target.as_ref().trim();
            if source.is_empty() || target.is_empty() {
                continue;
            }
            self.entries.insert(source.to_string(), target.to_string());
        }
    }

    /// Merges a TOML file of `"bengali" = "hindi"` pairs over this dictionary.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary file: {}", path.display()))?;

        let entries: HashMap<String, String> = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse dictionary file: {}\n\n\
                 Expected one `\"bengali\" = \"hindi\"` pair per line.",
                path.display()
            )
        })?;

        self.extend(entries);
        Ok(())
    }

    pub fn lookup(&self, unit: &str) -> Option<&str> {
        self.entries.get(unit.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
