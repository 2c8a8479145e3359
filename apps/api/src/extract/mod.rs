//! Text extraction for uploaded resume files (txt, pdf, docx).
//!
//! Upload kind is decided from the declared content type first, then the file
//! extension. Anything else is an unsupported media type (415). Parse
//! failures on a supported type are validation errors (400). Extracted text
//! is truncated to 20,000 characters.

use anyhow::anyhow;
use bytes::Bytes;
use std::io::Write;
use std::path::Path;

use crate::errors::AppError;

pub const MAX_EXTRACTED_CHARS: usize = 20_000;

const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Text,
    Pdf,
    Docx,
}

/// Determines the upload kind from content type, falling back to the file
/// extension. Returns None for unsupported uploads.
pub fn detect_kind(content_type: Option<&str>, filename: &str) -> Option<UploadKind> {
    match content_type {
        Some("text/plain") => return Some(UploadKind::Text),
        Some("application/pdf") => return Some(UploadKind::Pdf),
        Some(DOCX_CONTENT_TYPE) => return Some(UploadKind::Docx),
        _ => {}
    }

    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())?
        .to_ascii_lowercase();

    match extension.as_str() {
        "txt" => Some(UploadKind::Text),
        "pdf" => Some(UploadKind::Pdf),
        "docx" => Some(UploadKind::Docx),
        _ => None,
    }
}

/// Extracts plain text from an upload of the given kind.
pub async fn extract_text(kind: UploadKind, bytes: Bytes) -> Result<String, AppError> {
    let text = match kind {
        UploadKind::Text => String::from_utf8_lossy(&bytes).into_owned(),
        UploadKind::Pdf => extract_pdf(bytes).await?,
        UploadKind::Docx => extract_docx(bytes).await?,
    };

    Ok(truncate_chars(&text, MAX_EXTRACTED_CHARS))
}

async fn extract_pdf(bytes: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| AppError::Validation(format!("Failed to parse PDF: {e}")))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("Extraction task failed: {e}")))?
}

/// docx-rust reads from a path, so the upload goes through a temp file.
async fn extract_docx(bytes: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || -> Result<String, AppError> {
        let mut temp_file = tempfile::NamedTempFile::new()
            .map_err(|e| AppError::Internal(anyhow!("Failed to create temp file: {e}")))?;
        temp_file
            .write_all(&bytes)
            .map_err(|e| AppError::Internal(anyhow!("Failed to write temp file: {e}")))?;

        let docx_file = docx_rust::DocxFile::from_file(temp_file.path())
            .map_err(|e| AppError::Validation(format!("Failed to open DOCX file: {e:?}")))?;
        let docx = docx_file
            .parse()
            .map_err(|e| AppError::Validation(format!("Failed to parse DOCX: {e:?}")))?;

        Ok(docx_paragraphs(&docx).join("\n"))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("Extraction task failed: {e}")))?
}

/// Walks the document body collecting the text of each non-empty paragraph.
fn docx_paragraphs(docx: &docx_rust::Docx) -> Vec<String> {
    let mut paragraphs = Vec::new();

    for body_content in &docx.document.body.content {
        let docx_rust::document::BodyContent::Paragraph(paragraph) = body_content else {
            continue;
        };

        let mut line = String::new();
        for content in &paragraph.content {
            let docx_rust::document::ParagraphContent::Run(run) = content else {
                continue;
            };
            for run_content in &run.content {
                match run_content {
                    docx_rust::document::RunContent::Text(text) => line.push_str(&text.text),
                    docx_rust::document::RunContent::Tab(_) => line.push('\t'),
                    docx_rust::document::RunContent::Break(_) => line.push('\n'),
                    _ => {}
                }
            }
        }

        if !line.trim().is_empty() {
            paragraphs.push(line);
        }
    }

    paragraphs
}

/// Char-boundary-safe truncation to at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((index, _)) => text[..index].to_string(),
        None => text.to_string(),
    }
}
