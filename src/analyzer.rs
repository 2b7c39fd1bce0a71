//! Analysis orchestration
//!
//! The orchestrator builds prompts for a chosen workflow, dispatches them
//! through the generation client, and merges the outcome into the session.
//! Terminal errors from the client arrive as displayable text, so every
//! run completes with a full result; there is no failed state.
//!
//! Exclusive mutable access to the session during a run makes superseded
//! concurrent runs impossible by construction.

use crate::client::GenerationClient;
use crate::prompts::{build_prompt, PromptKind};
use crate::session::{AnalysisMode, AnalysisResult, ChatTurn, RunState, Section, Session};
use futures::future::join_all;

/// Placeholder text for the transient assistant turn shown while a chat
/// answer is awaited
pub const PENDING_PLACEHOLDER: &str = "AI is analyzing your question...";

/// Orchestrates analysis workflows against one session at a time
pub struct Analyzer {
    client: GenerationClient,
}

impl Analyzer {
    /// Creates an orchestrator over the given generation client
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    /// Run the full four-section analysis
    ///
    /// Builds the summary, red-flags, key-terms, and recommendations
    /// prompts from the same document set and dispatches all four
    /// concurrently. Sections fail independently: one section's terminal
    /// error text does not affect the others. The merged result replaces
    /// the session's current analysis.
    ///
    /// A session without documents is left untouched.
    pub async fn run_full_analysis(&self, session: &mut Session) {
        if !session.has_documents() {
            tracing::debug!("Full analysis requested with no documents; skipping");
            return;
        }

        session.set_run_state(RunState::Running);
        tracing::info!(
            "Starting full analysis over {} documents",
            session.documents().len()
        );

        let documents = session.documents().to_vec();
        let client = &self.client;
        let tasks = [
            (Section::Summary, PromptKind::Summary),
            (Section::RedFlags, PromptKind::RedFlags),
            (Section::KeyTerms, PromptKind::KeyTerms),
            (Section::Recommendations, PromptKind::Recommendations),
        ]
        .map(|(section, kind)| {
            let prompt = build_prompt(&kind, &documents);
            async move { (section, client.generate(&prompt).await) }
        });

        let sections = join_all(tasks).await;

        session.set_analysis(
            AnalysisMode::Analyzer,
            AnalysisResult::new(sections, documents),
        );
        session.set_run_state(RunState::Complete);
        tracing::info!("Full analysis complete");
    }

    /// Run the plain-language summary workflow
    ///
    /// Dispatches the plain-English summary and then the glossary prompt,
    /// one after the other. The two prompts share the same input and could
    /// run concurrently; sequential dispatch is a design choice, not a
    /// dependency.
    pub async fn run_plain_summary(&self, session: &mut Session) {
        if !session.has_documents() {
            tracing::debug!("Plain summary requested with no documents; skipping");
            return;
        }

        session.set_run_state(RunState::Running);
        tracing::info!(
            "Starting plain-language summary over {} documents",
            session.documents().len()
        );

        let documents = session.documents().to_vec();
        let plain = self
            .client
            .generate(&build_prompt(&PromptKind::PlainSummary, &documents))
            .await;
        let glossary = self
            .client
            .generate(&build_prompt(&PromptKind::Glossary, &documents))
            .await;

        session.set_analysis(
            AnalysisMode::Summarizer,
            AnalysisResult::new(
                vec![
                    (Section::PlainSummary, plain),
                    (Section::Glossary, glossary),
                ],
                documents,
            ),
        );
        session.set_run_state(RunState::Complete);
        tracing::info!("Plain-language summary complete");
    }

    /// Answer a user question over the loaded documents
    ///
    /// With no documents (or a blank question) this is a strict no-op: no
    /// turn is appended and no request is made. Otherwise the user turn
    /// and a pending placeholder turn are appended, and the placeholder is
    /// replaced in place once the response (or terminal error text)
    /// arrives.
    ///
    /// Returns the assistant's text, or `None` for the no-op case.
    pub async fn answer_question(&self, session: &mut Session, question: &str) -> Option<String> {
        let question = question.trim();
        if question.is_empty() || !session.has_documents() {
            tracing::debug!("Chat turn skipped: no question or no documents");
            return None;
        }

        session.set_run_state(RunState::Running);
        session.push_turn(ChatTurn::user(question));
        let pending = session.push_turn(ChatTurn::assistant(PENDING_PLACEHOLDER));

        let prompt = build_prompt(
            &PromptKind::ChatAnswer {
                question: question.to_string(),
            },
            session.documents(),
        );
        let answer = self.client.generate(&prompt).await;

        session.replace_turn_text(pending, answer.clone());
        session.set_run_state(RunState::Complete);
        Some(answer)
    }
}
