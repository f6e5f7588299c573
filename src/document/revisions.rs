//! Revision-aware text reconstruction
//!
//! This module walks the paragraph trees produced by docx-rs, derives the
//! revision status of every text-bearing node from the `w:ins`/`w:del`
//! wrappers above it, and reconstructs the paragraph text for either side
//! of the tracked changes. The status is carried top-down through the
//! traversal as a pair of inherited flags, so no node is re-scanned.

use super::models::{ChangedParagraph, RevisionView};

/// Inherited revision flags for the node currently being visited.
#[derive(Debug, Clone, Copy, Default)]
struct RevisionContext {
    inserted: bool,
    deleted: bool,
}

impl RevisionContext {
    /// Whether text under this context belongs in the given view.
    ///
    /// Before keeps everything not inserted; After keeps everything not
    /// deleted. Text under both an insertion and a deletion wrapper is
    /// therefore part of neither view.
    fn includes(self, view: RevisionView) -> bool {
        match view {
            RevisionView::Before => !self.inserted,
            RevisionView::After => !self.deleted,
        }
    }
}

/// Reconstruct a paragraph's text as it reads in the given revision view.
///
/// Text fragments are concatenated in document order with no separator.
/// The result may be empty if every fragment is excluded under the view.
pub fn reconstruct(para: &docx_rs::Paragraph, view: RevisionView) -> String {
    let mut text = String::new();
    collect_paragraph_children(&para.children, RevisionContext::default(), view, &mut text);
    text
}

fn collect_paragraph_children(
    children: &[docx_rs::ParagraphChild],
    ctx: RevisionContext,
    view: RevisionView,
    text: &mut String,
) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                collect_run_text(run, ctx, view, text);
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                let ctx = RevisionContext {
                    inserted: true,
                    ..ctx
                };
                for child in &insert.children {
                    match child {
                        docx_rs::InsertChild::Run(run) => {
                            collect_run_text(run, ctx, view, text);
                        }
                        docx_rs::InsertChild::Delete(delete) => {
                            collect_delete_text(delete, ctx, view, text);
                        }
                        _ => {}
                    }
                }
            }
            docx_rs::ParagraphChild::Delete(delete) => {
                collect_delete_text(delete, ctx, view, text);
            }
            docx_rs::ParagraphChild::Hyperlink(link) => {
                // Hyperlinks wrap ordinary paragraph children
                collect_paragraph_children(&link.children, ctx, view, text);
            }
            _ => {
                // Bookmarks, comment ranges, and the rest carry no text
            }
        }
    }
}

fn collect_delete_text(
    delete: &docx_rs::Delete,
    ctx: RevisionContext,
    view: RevisionView,
    text: &mut String,
) {
    let ctx = RevisionContext {
        deleted: true,
        ..ctx
    };
    for child in &delete.children {
        if let docx_rs::DeleteChild::Run(run) = child {
            collect_run_text(run, ctx, view, text);
        }
    }
}

/// Append a run's literal text if its revision context belongs in the view.
fn collect_run_text(
    run: &docx_rs::Run,
    ctx: RevisionContext,
    view: RevisionView,
    text: &mut String,
) {
    if !ctx.includes(view) {
        return;
    }

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            // Deleted literal text lives in w:delText rather than w:t
            docx_rs::RunChild::DeleteText(text_elem) => {
                text.push_str(&delete_text_content(text_elem));
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                text.push('\n');
            }
            _ => {
                // Drawings and other non-text run children contribute nothing
            }
        }
    }
}

/// Extract the literal content of a w:delText node.
///
/// docx-rs keeps the `DeleteText` text field private, so the content is
/// read through the node's serde representation as a workaround for the
/// missing accessor. A node that fails to serialize contributes nothing.
fn delete_text_content(text_elem: &docx_rs::DeleteText) -> String {
    serde_json::to_value(text_elem)
        .ok()
        .and_then(|value| {
            value
                .get("text")
                .and_then(|text| text.as_str())
                .map(str::to_string)
        })
        .unwrap_or_default()
}

/// Whether a paragraph carries at least one insertion or deletion marker
/// anywhere in its subtree.
pub(crate) fn has_tracked_changes(para: &docx_rs::Paragraph) -> bool {
    fn scan(children: &[docx_rs::ParagraphChild]) -> bool {
        children.iter().any(|child| match child {
            docx_rs::ParagraphChild::Insert(_) | docx_rs::ParagraphChild::Delete(_) => true,
            docx_rs::ParagraphChild::Hyperlink(link) => scan(&link.children),
            _ => false,
        })
    }
    scan(&para.children)
}

/// Extract every changed paragraph from a parsed document, in document order.
///
/// Paragraphs without revision markers produce no entry. Paragraphs nested
/// in table cells are visited too, in the order the tables appear.
pub fn collect_changed_paragraphs(document: &docx_rs::Document) -> Vec<ChangedParagraph> {
    collect_with_counts(document).0
}

/// Like [`collect_changed_paragraphs`], but also reports how many paragraphs
/// were scanned in total.
pub(crate) fn collect_with_counts(document: &docx_rs::Document) -> (Vec<ChangedParagraph>, usize) {
    let mut changes = Vec::new();
    let mut paragraph_count = 0;

    for child in &document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                visit_paragraph(para, &mut changes, &mut paragraph_count);
            }
            docx_rs::DocumentChild::Table(table) => {
                visit_table(table, &mut changes, &mut paragraph_count);
            }
            _ => {}
        }
    }

    (changes, paragraph_count)
}

fn visit_paragraph(
    para: &docx_rs::Paragraph,
    changes: &mut Vec<ChangedParagraph>,
    paragraph_count: &mut usize,
) {
    *paragraph_count += 1;

    if !has_tracked_changes(para) {
        return;
    }

    changes.push(ChangedParagraph {
        index: changes.len() + 1,
        before: reconstruct(para, RevisionView::Before),
        after: reconstruct(para, RevisionView::After),
    });
}

fn visit_table(
    table: &docx_rs::Table,
    changes: &mut Vec<ChangedParagraph>,
    paragraph_count: &mut usize,
) {
    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            for content in &cell.children {
                match content {
                    docx_rs::TableCellContent::Paragraph(para) => {
                        visit_paragraph(para, changes, paragraph_count);
                    }
                    docx_rs::TableCellContent::Table(nested) => {
                        visit_table(nested, changes, paragraph_count);
                    }
                    _ => {}
                }
            }
        }
    }
}
