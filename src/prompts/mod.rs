//! Prompt assembly for the generation API
//!
//! `build_prompt` is a pure function: the same kind and document set always
//! produce an identical prompt string, which keeps golden-output tests
//! stable. Templates live in [`templates`] and are selected by
//! [`PromptKind`].

pub mod templates;

use crate::documents::Document;
use std::fmt;

/// Separator between documents in an assembled prompt
pub const DOCUMENT_SEPARATOR: &str = "\n\n---\n\n";

/// Per-document content prefix length used for chat-answer prompts
///
/// Chat prompts carry the whole document set on every turn, so each
/// document is truncated to keep the prompt bounded. This trades answer
/// quality on long documents for a predictable request size.
pub const CHAT_CONTEXT_CHARS: usize = 2000;

/// The kind of prompt to build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Comprehensive document summary
    Summary,
    /// Risk and red-flag review
    RedFlags,
    /// Key terms and provisions extraction
    KeyTerms,
    /// Actionable recommendations
    Recommendations,
    /// Plain-English translation
    PlainSummary,
    /// Legal-terms glossary
    Glossary,
    /// Answer a user question over the document set
    ChatAnswer {
        /// The user's question, interpolated into the template
        question: String,
    },
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::RedFlags => write!(f, "red-flags"),
            Self::KeyTerms => write!(f, "key-terms"),
            Self::Recommendations => write!(f, "recommendations"),
            Self::PlainSummary => write!(f, "plain-summary"),
            Self::Glossary => write!(f, "glossary"),
            Self::ChatAnswer { .. } => write!(f, "chat-answer"),
        }
    }
}

/// Assemble the document block used by the analysis templates
///
/// Each document renders as `Document: <name>` followed by its full
/// content, joined by [`DOCUMENT_SEPARATOR`].
fn join_documents(documents: &[Document]) -> String {
    documents
        .iter()
        .map(|doc| format!("Document: {}\n\n{}", doc.name, doc.content))
        .collect::<Vec<_>>()
        .join(DOCUMENT_SEPARATOR)
}

/// Assemble the bounded document context used by chat-answer prompts
fn chat_context(documents: &[Document]) -> String {
    documents
        .iter()
        .map(|doc| {
            let prefix: String = doc.content.chars().take(CHAT_CONTEXT_CHARS).collect();
            format!("{}: {}", doc.name, prefix)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build a complete prompt for the given kind and document set
///
/// Pure and deterministic: no I/O, no clock, no randomness.
///
/// # Examples
///
/// ```
/// use legalens::documents::Document;
/// use legalens::prompts::{build_prompt, PromptKind};
///
/// let docs = vec![Document::new("a.txt", "Pay $500 by Jan 1.", "text/plain", 18)];
/// let prompt = build_prompt(&PromptKind::Summary, &docs);
/// assert!(prompt.contains("Document: a.txt"));
/// assert!(prompt.contains("Pay $500 by Jan 1."));
/// ```
pub fn build_prompt(kind: &PromptKind, documents: &[Document]) -> String {
    match kind {
        PromptKind::ChatAnswer { question } => format!(
            "Based on the following legal documents, answer the user's question: \"{}\"\n\nDocuments:\n{}\n\n{}",
            question,
            chat_context(documents),
            templates::CHAT_GUIDANCE
        ),
        _ => {
            let template = match kind {
                PromptKind::Summary => templates::SUMMARY,
                PromptKind::RedFlags => templates::RED_FLAGS,
                PromptKind::KeyTerms => templates::KEY_TERMS,
                PromptKind::Recommendations => templates::RECOMMENDATIONS,
                PromptKind::PlainSummary => templates::PLAIN_SUMMARY,
                PromptKind::Glossary => templates::GLOSSARY,
                PromptKind::ChatAnswer { .. } => unreachable!("handled above"),
            };
            format!(
                "{}\n\nDocuments:\n{}",
                template,
                join_documents(documents)
            )
        }
    }
}
