//! Core data structures for tracked-changes extraction
//!
//! This module defines all the public types used to represent the tracked
//! changes found in a document, including the before/after text pair for
//! each changed paragraph and the document-level metadata.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub metadata: DocumentMetadata,
    pub changes: Vec<ChangedParagraph>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_path: String,
    pub file_size: u64,
    /// Total paragraphs seen, including paragraphs nested in table cells
    pub paragraph_count: usize,
    /// Paragraphs that carry at least one insertion or deletion marker
    pub changed_count: usize,
}

/// A paragraph containing at least one tracked insertion or deletion,
/// reconstructed as it read before and after the revisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedParagraph {
    /// 1-based position within the extracted sequence, in document order
    pub index: usize,
    /// Paragraph text with insertions removed and deletions kept
    pub before: String,
    /// Paragraph text with deletions removed and insertions kept
    pub after: String,
}

/// Which revision state the reconstructed text represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevisionView {
    /// The paragraph as it read before the tracked changes were made
    Before,
    /// The paragraph as it reads with all tracked changes applied
    After,
}
