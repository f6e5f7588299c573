use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use docx_rs::{Delete, Docx, Insert, Paragraph, Run};
use redline::{FormatError, load_document};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

/// Write raw bytes to a named file inside a fresh temp directory.
fn write_fixture(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).expect("Failed to create fixture");
    file.write_all(bytes).expect("Failed to write fixture");
    path
}

/// Build a minimal ZIP archive containing a single named entry.
fn write_zip_fixture(dir: &TempDir, name: &str, entry: &str) -> PathBuf {
    let path = dir.path().join(name);
    let file = File::create(&path).expect("Failed to create fixture");
    let mut archive = zip::ZipWriter::new(file);
    archive
        .start_file(entry, SimpleFileOptions::default())
        .expect("Failed to start entry");
    archive.write_all(b"<x/>").expect("Failed to write entry");
    archive.finish().expect("Failed to finish archive");
    path
}

#[cfg(test)]
mod format_error_tests {
    use super::*;

    #[test]
    fn test_missing_file_fails() {
        let err = load_document("tests/fixtures/does-not-exist.docx".as_ref())
            .expect_err("missing file must not load");

        assert!(matches!(
            err.downcast_ref::<FormatError>(),
            Some(FormatError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_wrong_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "notes.txt", b"just some text");

        let err = load_document(&path).expect_err("non-docx extension must not load");

        assert!(matches!(
            err.downcast_ref::<FormatError>(),
            Some(FormatError::UnsupportedExtension(ext)) if ext == "txt"
        ));
    }

    #[test]
    fn test_non_archive_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "garbage.docx", b"this is not a zip archive");

        let err = load_document(&path).expect_err("non-archive must not load");

        assert!(matches!(
            err.downcast_ref::<FormatError>(),
            Some(FormatError::InvalidArchive(_))
        ));
    }

    #[test]
    fn test_archive_without_document_entry_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_zip_fixture(&dir, "hollow.docx", "docProps/core.xml");

        let err = load_document(&path).expect_err("archive without word/document.xml must not load");

        assert!(matches!(
            err.downcast_ref::<FormatError>(),
            Some(FormatError::MissingDocumentEntry)
        ));
    }

    #[test]
    fn test_excel_workbook_is_diagnosed() {
        let dir = TempDir::new().unwrap();
        let path = write_zip_fixture(&dir, "renamed.docx", "xl/workbook.xml");

        let err = load_document(&path).expect_err("xlsx content must not load");

        assert!(matches!(
            err.downcast_ref::<FormatError>(),
            Some(FormatError::ExcelWorkbook)
        ));
    }
}

#[cfg(test)]
mod end_to_end_tests {
    use super::*;

    #[test]
    fn test_packed_document_round_trips_through_loader() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tracked.docx");
        let file = File::create(&path).unwrap();

        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Untouched intro")))
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Hello "))
                    .add_delete(Delete::new().add_run(Run::new().add_delete_text("old")))
                    .add_insert(Insert::new(Run::new().add_text("new")))
                    .add_run(Run::new().add_text(" world")),
            )
            .build()
            .pack(file)
            .expect("Failed to pack test document");

        let document = load_document(&path).expect("Failed to load packed document");

        assert_eq!(document.title, "tracked");
        assert_eq!(document.metadata.changed_count, 1);
        assert_eq!(document.changes.len(), 1);
        assert_eq!(document.changes[0].index, 1);
        assert_eq!(document.changes[0].before, "Hello old world");
        assert_eq!(document.changes[0].after, "Hello new world");
    }
}
