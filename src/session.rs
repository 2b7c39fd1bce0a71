//! Session state: documents, analysis results, and chat transcript
//!
//! A `Session` is an explicit owned state object passed by mutable
//! reference into the orchestrator. There are no ambient globals; tests
//! construct sessions in isolation. A new upload batch reinitializes the
//! whole session.

use crate::documents::{Document, DocumentStore};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Named slice of a full analysis
///
/// Ordering of the variants fixes the rendering order of result sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    /// Comprehensive document summary
    Summary,
    /// Risks and problematic clauses
    RedFlags,
    /// Important terms and provisions
    KeyTerms,
    /// Recommendations and next steps
    Recommendations,
    /// Plain-English translation
    PlainSummary,
    /// Legal-terms glossary
    Glossary,
}

impl Section {
    /// Panel title shown above the section's text
    pub fn title(&self) -> &'static str {
        match self {
            Self::Summary => "Legal Document Summary",
            Self::RedFlags => "Identified Legal Red Flags",
            Self::KeyTerms => "Key Terms Analysis",
            Self::Recommendations => "Legal Recommendations",
            Self::PlainSummary => "Your Legal Document in Plain English",
            Self::Glossary => "Legal Terms Dictionary",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::RedFlags => write!(f, "redFlags"),
            Self::KeyTerms => write!(f, "keyTerms"),
            Self::Recommendations => write!(f, "recommendations"),
            Self::PlainSummary => write!(f, "plainSummary"),
            Self::Glossary => write!(f, "glossary"),
        }
    }
}

/// The generated text of one orchestration run, keyed by section
///
/// Created once per run and replaced wholesale; never partially mutated.
/// Keeps the document set it was computed from.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    sections: BTreeMap<Section, String>,
    documents: Vec<Document>,
}

impl AnalysisResult {
    /// Create a result from section texts and the source documents
    pub fn new(sections: Vec<(Section, String)>, documents: Vec<Document>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
            documents,
        }
    }

    /// Text for one section, if present in this run
    pub fn section(&self, section: Section) -> Option<&str> {
        self.sections.get(&section).map(|s| s.as_str())
    }

    /// All sections in rendering order
    pub fn sections(&self) -> impl Iterator<Item = (Section, &str)> {
        self.sections.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// The document set this result was computed from
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }
}

/// Which analysis workflow produced the current result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisMode {
    /// No orchestration has run for the current document set
    #[default]
    None,
    /// Full four-section analysis
    Analyzer,
    /// Plain-language summary with glossary
    Summarizer,
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Analyzer => write!(f, "analyzer"),
            Self::Summarizer => write!(f, "summarizer"),
        }
    }
}

/// State of the current orchestration run
///
/// There is deliberately no failed state: total failures surface as
/// error text inside a complete result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// No run in progress
    #[default]
    Idle,
    /// A run is dispatching prompts
    Running,
    /// The last run produced a result
    Complete,
}

/// Who produced a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The person asking questions
    User,
    /// The generation service
    Assistant,
}

/// One entry in the chat transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    /// Speaker of this turn
    pub role: ChatRole,
    /// Turn text; for the transient pending turn this is a placeholder
    /// replaced in place when the response arrives
    pub text: String,
}

impl ChatTurn {
    /// Creates a user turn
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    /// Creates an assistant turn
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// All state for one review session
///
/// Single active session per process; lives only in memory.
#[derive(Debug, Default)]
pub struct Session {
    documents: DocumentStore,
    current_analysis: Option<AnalysisResult>,
    mode: AnalysisMode,
    transcript: Vec<ChatTurn>,
    run_state: RunState,
}

impl Session {
    /// Creates an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document set, reinitializing the rest of the session
    ///
    /// A new upload batch supersedes everything computed from the old
    /// documents: the current analysis, mode, transcript, and run state
    /// are all reset.
    pub fn replace_documents(&mut self, documents: Vec<Document>) {
        self.documents.replace_all(documents);
        self.current_analysis = None;
        self.mode = AnalysisMode::None;
        self.transcript.clear();
        self.run_state = RunState::Idle;
    }

    /// The current ordered document set
    pub fn documents(&self) -> &[Document] {
        self.documents.all()
    }

    /// True once documents are loaded and orchestration is available
    pub fn has_documents(&self) -> bool {
        !self.documents.is_empty()
    }

    /// The result of the latest completed run, if any
    pub fn current_analysis(&self) -> Option<&AnalysisResult> {
        self.current_analysis.as_ref()
    }

    /// Replace the analysis result wholesale and record the producing mode
    pub(crate) fn set_analysis(&mut self, mode: AnalysisMode, result: AnalysisResult) {
        self.mode = mode;
        self.current_analysis = Some(result);
    }

    /// The mode of the latest run
    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    /// State of the current orchestration run
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub(crate) fn set_run_state(&mut self, state: RunState) {
        self.run_state = state;
    }

    /// The chat transcript in order
    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    /// Append a turn and return its index
    pub(crate) fn push_turn(&mut self, turn: ChatTurn) -> usize {
        self.transcript.push(turn);
        self.transcript.len() - 1
    }

    /// Replace the text of an existing turn in place
    ///
    /// Used only to resolve the pending placeholder turn.
    pub(crate) fn replace_turn_text(&mut self, index: usize, text: impl Into<String>) {
        if let Some(turn) = self.transcript.get_mut(index) {
            turn.text = text.into();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> Document {
        Document::new(name, "content", "text/plain", 7)
    }

    #[test]
    fn test_section_ordering_fixes_render_order() {
        let result = AnalysisResult::new(
            vec![
                (Section::Recommendations, "r".to_string()),
                (Section::Summary, "s".to_string()),
                (Section::KeyTerms, "k".to_string()),
                (Section::RedFlags, "f".to_string()),
            ],
            vec![],
        );
        let order: Vec<Section> = result.sections().map(|(s, _)| s).collect();
        assert_eq!(
            order,
            vec![
                Section::Summary,
                Section::RedFlags,
                Section::KeyTerms,
                Section::Recommendations
            ]
        );
    }

    #[test]
    fn test_section_display_keys() {
        assert_eq!(Section::Summary.to_string(), "summary");
        assert_eq!(Section::RedFlags.to_string(), "redFlags");
        assert_eq!(Section::KeyTerms.to_string(), "keyTerms");
        assert_eq!(Section::Recommendations.to_string(), "recommendations");
        assert_eq!(Section::PlainSummary.to_string(), "plainSummary");
        assert_eq!(Section::Glossary.to_string(), "glossary");
    }

    #[test]
    fn test_section_titles() {
        assert_eq!(Section::Summary.title(), "Legal Document Summary");
        assert_eq!(Section::Glossary.title(), "Legal Terms Dictionary");
    }

    #[test]
    fn test_analysis_result_section_lookup() {
        let result = AnalysisResult::new(
            vec![(Section::Summary, "the summary".to_string())],
            vec![doc("a.txt")],
        );
        assert_eq!(result.section(Section::Summary), Some("the summary"));
        assert_eq!(result.section(Section::Glossary), None);
        assert_eq!(result.documents().len(), 1);
    }

    #[test]
    fn test_analysis_result_serializes_camel_case_keys() {
        let result = AnalysisResult::new(
            vec![
                (Section::RedFlags, "flags".to_string()),
                (Section::PlainSummary, "plain".to_string()),
            ],
            vec![],
        );
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"redFlags\":\"flags\""));
        assert!(json.contains("\"plainSummary\":\"plain\""));
    }

    #[test]
    fn test_session_starts_empty() {
        let session = Session::new();
        assert!(!session.has_documents());
        assert!(session.current_analysis().is_none());
        assert_eq!(session.mode(), AnalysisMode::None);
        assert_eq!(session.run_state(), RunState::Idle);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_replace_documents_reinitializes_session() {
        let mut session = Session::new();
        session.replace_documents(vec![doc("a.txt")]);
        session.set_analysis(
            AnalysisMode::Analyzer,
            AnalysisResult::new(vec![(Section::Summary, "s".to_string())], vec![doc("a.txt")]),
        );
        session.set_run_state(RunState::Complete);
        session.push_turn(ChatTurn::user("question"));

        session.replace_documents(vec![doc("b.txt")]);

        assert_eq!(session.documents().len(), 1);
        assert_eq!(session.documents()[0].name, "b.txt");
        assert!(session.current_analysis().is_none());
        assert_eq!(session.mode(), AnalysisMode::None);
        assert_eq!(session.run_state(), RunState::Idle);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_set_analysis_replaces_wholesale() {
        let mut session = Session::new();
        session.replace_documents(vec![doc("a.txt")]);

        session.set_analysis(
            AnalysisMode::Analyzer,
            AnalysisResult::new(vec![(Section::Summary, "old".to_string())], vec![]),
        );
        session.set_analysis(
            AnalysisMode::Summarizer,
            AnalysisResult::new(vec![(Section::Glossary, "new".to_string())], vec![]),
        );

        let analysis = session.current_analysis().unwrap();
        assert_eq!(analysis.section(Section::Glossary), Some("new"));
        assert_eq!(analysis.section(Section::Summary), None);
        assert_eq!(session.mode(), AnalysisMode::Summarizer);
    }

    #[test]
    fn test_transcript_push_and_replace() {
        let mut session = Session::new();
        let user_idx = session.push_turn(ChatTurn::user("q"));
        let pending_idx = session.push_turn(ChatTurn::assistant("..."));
        assert_eq!(user_idx, 0);
        assert_eq!(pending_idx, 1);

        session.replace_turn_text(pending_idx, "answer");

        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[0], ChatTurn::user("q"));
        assert_eq!(session.transcript()[1], ChatTurn::assistant("answer"));
    }

    #[test]
    fn test_replace_turn_text_out_of_range_is_noop() {
        let mut session = Session::new();
        session.replace_turn_text(5, "nothing");
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(AnalysisMode::None.to_string(), "none");
        assert_eq!(AnalysisMode::Analyzer.to_string(), "analyzer");
        assert_eq!(AnalysisMode::Summarizer.to_string(), "summarizer");
    }
}
