/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level handlers:

- `run_analyze`   — full four-section analysis
- `run_summarize` — plain-English summary with glossary
- `run_chat`      — interactive Q&A over the loaded documents

Each handler loads the document batch into a fresh session, runs the
requested orchestration, and prints the rendered result.
*/

use crate::analyzer::Analyzer;
use crate::client::GenerationClient;
use crate::config::Config;
use crate::error::{LegalensError, Result};
use crate::render;
use crate::session::Session;
use crate::upload;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Load an upload batch into a fresh session
///
/// Per-file rejections are printed and skipped; the batch only fails as a
/// whole when no file passes the type/size filter or nothing readable
/// remains after extraction.
fn load_session(files: &[PathBuf], config: &Config) -> Result<Session> {
    let outcome = upload::load_documents(files, &config.upload);

    for rejection in &outcome.rejected {
        eprintln!("{} {}: {}", "skipped".yellow(), rejection.name, rejection.reason);
    }

    if !outcome.has_candidates() {
        return Err(LegalensError::Validation(
            "Please provide valid legal document files (PDF, DOC, DOCX, TXT) under 10MB."
                .to_string(),
        )
        .into());
    }

    let mut session = Session::new();
    session.replace_documents(outcome.documents);

    if !session.has_documents() {
        return Err(LegalensError::Validation(
            "No readable content found in the provided documents.".to_string(),
        )
        .into());
    }

    println!(
        "Loaded {} document(s): {}",
        session.documents().len(),
        session
            .documents()
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(session)
}

/// Build the orchestrator from configuration
fn build_analyzer(config: &Config) -> Result<Analyzer> {
    let client = GenerationClient::from_config(config)?;
    Ok(Analyzer::new(client))
}

/// Run the full analysis command
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `files` - Document files to analyze
/// * `chat` - Drop into the interactive chat once results are printed
pub async fn run_analyze(config: Config, files: Vec<PathBuf>, chat: bool) -> Result<()> {
    let mut session = load_session(&files, &config)?;
    let analyzer = build_analyzer(&config)?;

    println!("Performing comprehensive legal analysis...");
    analyzer.run_full_analysis(&mut session).await;

    if let Some(analysis) = session.current_analysis() {
        println!("\n{}", render::analysis_panels(analysis));
        if let Some(comparison) = render::comparison_panel(analysis.documents()) {
            println!("{}", comparison);
        }
    }

    if chat {
        chat_loop(&analyzer, &mut session).await?;
    }
    Ok(())
}

/// Run the plain-language summary command
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `files` - Document files to summarize
/// * `chat` - Drop into the interactive chat once results are printed
pub async fn run_summarize(config: Config, files: Vec<PathBuf>, chat: bool) -> Result<()> {
    let mut session = load_session(&files, &config)?;
    let analyzer = build_analyzer(&config)?;

    println!("Translating legal terms to plain English...");
    analyzer.run_plain_summary(&mut session).await;

    if let Some(analysis) = session.current_analysis() {
        println!("\n{}", render::analysis_panels(analysis));
    }

    if chat {
        chat_loop(&analyzer, &mut session).await?;
    }
    Ok(())
}

/// Run the interactive chat command
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `files` - Document files to load as chat context
pub async fn run_chat(config: Config, files: Vec<PathBuf>) -> Result<()> {
    let mut session = load_session(&files, &config)?;
    let analyzer = build_analyzer(&config)?;
    chat_loop(&analyzer, &mut session).await
}

/// Readline loop asking questions against the loaded documents
///
/// Runs until EOF, Ctrl-C, or an `exit`/`quit` command.
async fn chat_loop(analyzer: &Analyzer, session: &mut Session) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!(
        "\n{}",
        "Ask questions about your documents. Type 'exit' to quit.".cyan()
    );

    loop {
        match rl.readline(&format!("{} ", "[chat] >>".green())) {
            Ok(line) => {
                let question = line.trim().to_string();
                if question.is_empty() {
                    continue;
                }
                if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
                    break;
                }
                let _ = rl.add_history_entry(&question);

                let answer = analyzer.answer_question(session, &question).await;
                if answer.is_some() {
                    if let Some(turn) = session.transcript().last() {
                        println!("{}\n", render::chat_turn_line(turn));
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                tracing::error!("Readline error: {}", err);
                break;
            }
        }
    }

    println!("Goodbye.");
    Ok(())
}
