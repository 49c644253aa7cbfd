//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper
//! returns plain text when colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::engine::Tier;
use crate::output;

fn paint<T: Display>(text: T, style: impl FnOnce(&T) -> String) -> String {
    if output::is_no_color() {
        text.to_string()
    } else {
        style(&text)
    }
}

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers (e.g., "Session", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        paint(text, |t| t.bold().to_string())
    }

    /// Style for labels/keys (e.g., "provider", "lines")
    pub fn label<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().to_string())
    }

    /// Style for primary values (e.g., provider names, counts)
    pub fn value<T: Display>(text: T) -> String {
        paint(text, |t| t.cyan().to_string())
    }

    /// Style for secondary/supplementary info (e.g., endpoints, source text)
    pub fn secondary<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().to_string())
    }

    pub fn success<T: Display>(text: T) -> String {
        paint(text, |t| t.green().to_string())
    }

    pub fn error<T: Display>(text: T) -> String {
        paint(text, |t| t.red().bold().to_string())
    }

    pub fn warning<T: Display>(text: T) -> String {
        paint(text, |t| t.yellow().to_string())
    }

    /// Style for commands (e.g., "/view", "/help")
    pub fn command<T: Display>(text: T) -> String {
        paint(text, |t| t.green().to_string())
    }

    pub fn default_marker() -> String {
        Self::secondary("(default)")
    }

    pub fn version<T: Display>(text: T) -> String {
        paint(text, |t| t.dimmed().to_string())
    }

    /// Tier tag shown next to a translation, colored by how it was produced.
    pub fn tier(tier: Tier) -> String {
        let tag = format!("[{tier}]");
        match tier {
            Tier::Dictionary => paint(tag, |t| t.blue().to_string()),
            Tier::Remote => paint(tag, |t| t.green().to_string()),
            Tier::Fallback => paint(tag, |t| t.yellow().to_string()),
            Tier::Error => paint(tag, |t| t.red().to_string()),
        }
    }
}
