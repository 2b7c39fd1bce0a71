//! Terminal rendering of analysis output
//!
//! The generation service answers with light markdown: `**bold**` spans
//! and newlines. This module converts that markup to ANSI styling and
//! formats the section panels, chat turns, and the document comparison
//! preview printed by the command handlers.

use crate::documents::Document;
use crate::session::{AnalysisResult, ChatRole, ChatTurn, Section};
use colored::Colorize;

/// Characters of each document shown in the comparison preview
const COMPARISON_PREVIEW_CHARS: usize = 500;

/// Convert `**bold**` spans to ANSI bold, preserving newlines
///
/// Pairs are matched non-greedily; a trailing unmatched `**` is kept
/// literal.
///
/// # Examples
///
/// ```
/// use legalens::render::render_markup;
///
/// colored::control::set_override(false);
/// assert_eq!(render_markup("a **b** c"), "a b c");
/// assert_eq!(render_markup("odd **out"), "odd **out");
/// ```
pub fn render_markup(text: &str) -> String {
    let segments: Vec<&str> = text.split("**").collect();
    let mut out = String::with_capacity(text.len());
    for (i, segment) in segments.iter().enumerate() {
        if i % 2 == 1 {
            if i == segments.len() - 1 {
                // Unmatched opening delimiter stays literal
                out.push_str("**");
                out.push_str(segment);
            } else {
                out.push_str(&segment.bold().to_string());
            }
        } else {
            out.push_str(segment);
        }
    }
    out
}

/// Format one analysis section as a titled panel
pub fn section_panel(section: Section, text: &str) -> String {
    format!(
        "{}\n{}\n{}\n",
        section.title().cyan().bold(),
        "-".repeat(section.title().len()),
        render_markup(text)
    )
}

/// Format a complete analysis, sections in rendering order
pub fn analysis_panels(analysis: &AnalysisResult) -> String {
    analysis
        .sections()
        .map(|(section, text)| section_panel(section, text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one chat turn with a speaker tag
pub fn chat_turn_line(turn: &ChatTurn) -> String {
    let tag = match turn.role {
        ChatRole::User => "you".green().bold().to_string(),
        ChatRole::Assistant => "ai".blue().bold().to_string(),
    };
    format!("[{}] {}", tag, render_markup(&turn.text))
}

/// Format the side-by-side comparison preview of the first two documents
///
/// Returns `None` when fewer than two documents are loaded.
pub fn comparison_panel(documents: &[Document]) -> Option<String> {
    if documents.len() < 2 {
        return None;
    }
    let preview = |doc: &Document| {
        let prefix: String = doc.content.chars().take(COMPARISON_PREVIEW_CHARS).collect();
        format!("{}\n{}...", doc.name.bold(), prefix)
    };
    Some(format!(
        "{}\n{}\n\n{}\n",
        "Document Comparison".cyan().bold(),
        preview(&documents[0]),
        preview(&documents[1])
    ))
}
