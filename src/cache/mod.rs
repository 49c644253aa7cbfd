mod memory;

pub use memory::{CacheStats, TranslationCache};
