//! redline: tracked-changes extractor for .docx files
//!
//! This library provides functionality for pulling the paragraphs of a
//! Microsoft Word document that carry tracked changes and reconstructing
//! each one as it read before and after the revisions were made.

pub mod document;

// Re-export commonly used types
pub use document::{ChangedParagraph, Document, FormatError, RevisionView, load_document};
