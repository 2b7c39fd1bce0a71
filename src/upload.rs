//! Upload filtering and text extraction
//!
//! Candidate files are filtered by extension and size before their text is
//! extracted. Extraction is a pass-through read of the raw bytes: real
//! binary parsing of PDF/DOC is out of scope, so non-plain-text files may
//! yield garbled content. Documents whose extracted content is empty are
//! dropped before they reach the store.

use crate::config::UploadConfig;
use crate::documents::Document;
use crate::error::{LegalensError, Result};
use std::path::{Path, PathBuf};

/// Accepted file extensions, lowercase, without the leading dot
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt"];

/// One file rejected by the upload filter or failed during extraction
#[derive(Debug, Clone)]
pub struct Rejection {
    /// File name as presented by the caller
    pub name: String,
    /// Human-readable reason for the rejection
    pub reason: String,
}

/// Result of processing one upload batch
///
/// `documents` is the successfully-extracted subset in original order.
/// A batch where no file even passes the type/size filter leaves the
/// session untouched; callers check [`UploadOutcome::has_candidates`].
#[derive(Debug, Default)]
pub struct UploadOutcome {
    /// Documents ready to enter the store, in original order
    pub documents: Vec<Document>,
    /// Per-file rejections, reported without aborting the batch
    pub rejected: Vec<Rejection>,
    accepted_candidates: usize,
}

impl UploadOutcome {
    /// True when at least one file passed the type/size filter
    ///
    /// Only then does the batch replace the session's document set.
    pub fn has_candidates(&self) -> bool {
        self.accepted_candidates > 0
    }
}

/// Map a file extension to a media type
fn media_type_for(extension: &str) -> &'static str {
    match extension {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Lowercased extension of a path, if any
fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Display name of a path (file name component, falling back to the path)
fn name_of(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Check a candidate against the extension and size filter
///
/// # Errors
///
/// Returns a validation error naming the offending property
pub fn validate_candidate(path: &Path, size_bytes: u64, config: &UploadConfig) -> Result<()> {
    let name = name_of(path);
    match extension_of(path) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => {}
        _ => {
            return Err(LegalensError::Validation(format!(
                "{}: unsupported file type (expected .pdf, .doc, .docx, or .txt)",
                name
            ))
            .into());
        }
    }
    if size_bytes > config.max_file_size_bytes {
        return Err(LegalensError::Validation(format!(
            "{}: file exceeds the {} byte limit",
            name, config.max_file_size_bytes
        ))
        .into());
    }
    Ok(())
}

/// Extract text from a file
///
/// Plain pass-through: the raw bytes are read and interpreted as UTF-8,
/// lossily. This matches the upstream stub behavior for binary formats.
fn extract_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Process an upload batch into documents ready for the store
///
/// Each file is validated and extracted independently: a rejected or
/// unreadable file is reported and skipped without affecting the rest of
/// the batch. Files whose extracted content is empty (after trimming) are
/// dropped. Order of the input paths is preserved in the output.
///
/// # Arguments
///
/// * `paths` - Candidate files in upload order
/// * `config` - Upload filter settings
pub fn load_documents(paths: &[PathBuf], config: &UploadConfig) -> UploadOutcome {
    let mut outcome = UploadOutcome::default();

    for path in paths {
        let name = name_of(path);

        let size_bytes = match std::fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(err) => {
                tracing::warn!("Cannot stat {}: {}", path.display(), err);
                outcome.rejected.push(Rejection {
                    name,
                    reason: format!("unreadable: {}", err),
                });
                continue;
            }
        };

        if let Err(err) = validate_candidate(path, size_bytes, config) {
            tracing::warn!("Rejected {}: {}", path.display(), err);
            outcome.rejected.push(Rejection {
                name,
                reason: err.to_string(),
            });
            continue;
        }
        outcome.accepted_candidates += 1;

        let content = match extract_text(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Error processing {}: {}", path.display(), err);
                outcome.rejected.push(Rejection {
                    name,
                    reason: format!("extraction failed: {}", err),
                });
                continue;
            }
        };

        if content.trim().is_empty() {
            tracing::debug!("Dropping {}: empty extracted content", path.display());
            continue;
        }

        let extension = extension_of(path).unwrap_or_default();
        outcome.documents.push(Document::new(
            name,
            content,
            media_type_for(&extension),
            size_bytes,
        ));
    }

    tracing::info!(
        "Upload batch: {} loaded, {} rejected",
        outcome.documents.len(),
        outcome.rejected.len()
    );
    outcome
}
