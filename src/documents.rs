//! Document model and session document store
//!
//! A `Document` is the extracted text of one uploaded file. The
//! `DocumentStore` holds the ordered document set for the current session;
//! each new upload batch replaces the whole set.

use serde::{Deserialize, Serialize};

/// One uploaded document with its extracted text
///
/// Immutable once stored. `content` is guaranteed non-empty for documents
/// that made it into the store; empty extractions are dropped upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Original file name, including extension
    pub name: String,
    /// Raw extracted text
    pub content: String,
    /// Media type derived from the file extension
    pub media_type: String,
    /// Size of the original file in bytes
    pub size_bytes: u64,
}

impl Document {
    /// Creates a new document
    ///
    /// # Examples
    ///
    /// ```
    /// use legalens::documents::Document;
    ///
    /// let doc = Document::new("lease.txt", "Tenant shall pay...", "text/plain", 19);
    /// assert_eq!(doc.name, "lease.txt");
    /// ```
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        media_type: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            media_type: media_type.into(),
            size_bytes,
        }
    }
}

/// Ordered set of documents for the current session
///
/// The store performs no deduplication and no validation; upload filtering
/// happens before documents reach it. Each upload batch replaces the prior
/// set wholesale.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
}

impl DocumentStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards prior documents and stores the new set, preserving order
    ///
    /// # Examples
    ///
    /// ```
    /// use legalens::documents::{Document, DocumentStore};
    ///
    /// let mut store = DocumentStore::new();
    /// store.replace_all(vec![Document::new("a.txt", "text", "text/plain", 4)]);
    /// assert_eq!(store.len(), 1);
    /// store.replace_all(vec![]);
    /// assert!(store.is_empty());
    /// ```
    pub fn replace_all(&mut self, documents: Vec<Document>) {
        tracing::debug!(
            "Replacing document store: {} -> {} documents",
            self.documents.len(),
            documents.len()
        );
        self.documents = documents;
    }

    /// Returns the current ordered document sequence
    pub fn all(&self) -> &[Document] {
        &self.documents
    }

    /// Returns true when no documents are loaded
    ///
    /// Downstream orchestration is only available once this is false.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of documents currently stored
    pub fn len(&self) -> usize {
        self.documents.len()
    }
}
