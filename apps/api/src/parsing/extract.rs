//! Best-effort plain-text extraction from uploaded documents.
//!
//! Contract: never fails. Unsupported extensions, unreadable files, and
//! corrupt content all yield empty text; the orchestrator turns empty text
//! into the error-shaped response.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

/// Extracts plain text from a PDF or DOC/DOCX file, dispatching on the file
/// extension (case-insensitive). Returns empty text for any other extension
/// or on any extraction failure. Reads the file; never mutates or deletes it.
pub fn extract_text(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let result = match ext.as_str() {
        "pdf" => extract_pdf_text(path),
        "doc" | "docx" => extract_docx_text(path),
        _ => return String::new(),
    };

    match result {
        Ok(text) => text,
        Err(e) => {
            warn!("Text extraction failed for {}: {e:#}", path.display());
            String::new()
        }
    }
}

/// Per-page PDF extraction in page order, newline after each page's text.
/// Pages that yield no text (scanned or image-only) contribute nothing and
/// are not an error.
fn extract_pdf_text(path: &Path) -> Result<String> {
    let doc = lopdf::Document::load(path)
        .with_context(|| format!("failed to open PDF {}", path.display()))?;

    let mut text = String::new();
    for page_num in doc.get_pages().keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) if !page_text.is_empty() => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Ok(_) => {}
            Err(e) => warn!("Skipping PDF page {page_num}: {e}"),
        }
    }
    Ok(text)
}

/// Paragraph-order DOCX extraction. Empty paragraphs become blank lines so
/// the line-oriented field heuristics see the document's visual structure.
fn extract_docx_text(path: &Path) -> Result<String> {
    let data =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let docx =
        docx_rs::read_docx(&data).map_err(|e| anyhow::anyhow!("failed to parse DOCX: {e:?}"))?;

    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for p_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = p_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}
