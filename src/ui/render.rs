//! Text rendering of resolved lines.

use clap::ValueEnum;

use super::Style;
use crate::engine::{LineTranslation, TranslationResult};

/// How resolved lines are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// One translated line per source line.
    #[default]
    Line,
    /// Each line followed by its token-by-token translation.
    Word,
}

impl View {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Word => "word",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "line" => Some(Self::Line),
            "word" => Some(Self::Word),
            _ => None,
        }
    }
}

/// Renders lines in the given view, one block per line.
pub fn render(lines: &[LineTranslation], view: View, show_tiers: bool) -> String {
    let blocks: Vec<String> = lines
        .iter()
        .map(|line| match view {
            View::Line => render_line(line, show_tiers),
            View::Word => render_words(line, show_tiers),
        })
        .collect();

    match view {
        View::Line => blocks.join("\n"),
        View::Word => blocks.join("\n\n"),
    }
}

fn render_line(line: &LineTranslation, show_tiers: bool) -> String {
    with_tier(&line.line_result, show_tiers)
}

fn render_words(line: &LineTranslation, show_tiers: bool) -> String {
    let mut out = format!(
        "{}\n{}",
        Style::header(&line.line),
        with_tier(&line.line_result, show_tiers)
    );

    for word in &line.word_results {
        out.push_str(&format!(
            "\n  {} {} {}",
            word.source,
            Style::secondary("→"),
            with_tier(word, show_tiers)
        ));
    }
    out
}

fn with_tier(result: &TranslationResult, show_tiers: bool) -> String {
    if show_tiers {
        format!("{} {}", result.translated, Style::tier(result.tier))
    } else {
        result.translated.clone()
    }
}
