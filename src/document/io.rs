//! File I/O operations and validation
//!
//! This module handles validation of the input archive before any parsing
//! is attempted, so that a bad file fails fast with a useful message and
//! the caller never sees partial results.

use std::fs::File;
use std::path::Path;
use thiserror::Error;
use zip::ZipArchive;

/// The input is not a readable .docx package.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(
        "Invalid file format. Expected .docx file, got .{0}\n\
        Note: redline only supports Word .docx files (not .doc, .xlsx, .zip, etc.)"
    )]
    UnsupportedExtension(String),

    #[error("Cannot open {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Not a valid .docx file: {0}\n\
        This file may be corrupted or is not a ZIP archive."
    )]
    InvalidArchive(#[from] zip::result::ZipError),

    #[error(
        "This appears to be an Excel file (.xlsx).\n\
        redline only supports Word documents (.docx)."
    )]
    ExcelWorkbook,

    #[error(
        "Invalid .docx file: missing word/document.xml\n\
        This file may be corrupted or is not a valid Word document."
    )]
    MissingDocumentEntry,

    #[error("Cannot parse word/document.xml: {0}")]
    UnparsableMarkup(String),
}

/// Validates that the file is a legitimate .docx file
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<(), FormatError> {
    // Check file extension
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if extension != "docx" {
        return Err(FormatError::UnsupportedExtension(extension.to_string()));
    }

    // Check ZIP structure contains word/document.xml
    let file = File::open(file_path).map_err(|source| FormatError::Unreadable {
        path: file_path.display().to_string(),
        source,
    })?;
    let mut archive = ZipArchive::new(file)?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(FormatError::ExcelWorkbook);
        }

        return Err(FormatError::MissingDocumentEntry);
    }

    Ok(())
}
