//! Document loading and orchestration
//!
//! This module contains the main `load_document()` function that validates
//! the input package, parses the document markup, and collects the changed
//! paragraphs into our internal Document representation.

use anyhow::Result;
use std::path::Path;

use super::io::{FormatError, validate_docx_file};
use super::models::{Document, DocumentMetadata};
use super::revisions::collect_with_counts;

/// Load a .docx file and extract its tracked changes.
///
/// This function:
/// 1. Validates that the path names a readable .docx package
/// 2. Parses word/document.xml into a document tree
/// 3. Collects the before/after text of every changed paragraph
/// 4. Returns a fully assembled Document with metadata
///
/// Any failure to open or parse the package surfaces as a [`FormatError`]
/// before a single paragraph is produced.
pub fn load_document(file_path: &Path) -> Result<Document> {
    // Validate file type before attempting to parse
    validate_docx_file(file_path)?;

    let unreadable = |source| FormatError::Unreadable {
        path: file_path.display().to_string(),
        source,
    };
    let file_size = std::fs::metadata(file_path).map_err(unreadable)?.len();
    let file_data = std::fs::read(file_path).map_err(unreadable)?;
    let docx = docx_rs::read_docx(&file_data)
        .map_err(|err| FormatError::UnparsableMarkup(err.to_string()))?;

    let title = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled Document")
        .to_string();

    let (changes, paragraph_count) = collect_with_counts(&docx.document);

    let metadata = DocumentMetadata {
        file_path: file_path.to_string_lossy().to_string(),
        file_size,
        paragraph_count,
        changed_count: changes.len(),
    };

    Ok(Document {
        title,
        metadata,
        changes,
    })
}
