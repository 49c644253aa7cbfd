//! # bn2hi - Bengali to Hindi translation engine
//!
//! Resolves Bengali text line by line and word by word through an ordered
//! chain of tiers, caching every successful result for the session:
//!
//! 1. an exact-match phrase dictionary,
//! 2. a remote translator (Google `gtx` or an OpenAI-compatible LLM),
//! 3. character-level Bengali → Devanagari transliteration.
//!
//! Units no tier can resolve carry the `"?"` sentinel. Speech for any unit can
//! be synthesized on demand.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a file
//! bn2hi ./poem.txt
//!
//! # Word-by-word view from stdin, without network access
//! echo "আমার সোনার বাংলা" | bn2hi --view word --offline
//!
//! # Save Bengali speech
//! bn2hi speak "নমস্কার" --lang bn -o hello.mp3
//!
//! # Interactive session
//! bn2hi chat
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/bn2hi/config.toml`:
//!
//! ```toml
//! [bn2hi]
//! provider = "openai"
//!
//! [providers.openai]
//! kind = "llm"
//! endpoint = "https://api.openai.com"
//! model = "gpt-4o-mini"
//! api_key_env = "OPENAI_API_KEY"
//! ```

/// Speech synthesis with transient file handling.
pub mod audio;

/// Session translation cache.
pub mod cache;

/// Interactive chat mode for translation sessions.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and provider settings.
pub mod config;

/// Curated exact-match phrase table.
pub mod dictionary;

/// The resolution engine and its public surface.
pub mod engine;

/// Error types of the translation and speech backends.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities.
pub mod paths;

/// Line and word segmentation.
pub mod tokenizer;

/// Remote translation backends.
pub mod translation;

/// Bengali → Devanagari transliteration.
pub mod transliterate;

/// Terminal UI components (spinner, colors, rendering).
pub mod ui;
