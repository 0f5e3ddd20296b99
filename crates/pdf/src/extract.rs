//! # Text Extraction
//!
//! Flattens the text-drawing operations of every page into one string.

use pdf::content::{Op, TextDrawAdjusted};
use pdf::file::FileOptions;
use thiserror::Error;
use tracing::debug;

/// Only the first KiB is searched for the `%PDF-` header.
const HEADER_SEARCH_BYTES: usize = 1024;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid PDF buffer: the buffer is empty")]
    EmptyBuffer,
    #[error("Failed to parse PDF content: {0}")]
    Parse(String),
    #[error("No extractable text found in {pages} page(s); the document may be scanned or password-protected")]
    NoText { pages: usize },
}

/// The flattened text of a PDF and its page count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Trimmed and never empty.
    pub text: String,
    pub page_count: usize,
}

/// Extracts text from all pages of a PDF synchronously.
pub fn extract_text(pdf_data: &[u8]) -> Result<ExtractionResult, ExtractError> {
    if pdf_data.is_empty() {
        return Err(ExtractError::EmptyBuffer);
    }
    let header_window = &pdf_data[..pdf_data.len().min(HEADER_SEARCH_BYTES)];
    if !header_window.windows(5).any(|w| w == b"%PDF-") {
        return Err(ExtractError::Parse("missing %PDF- header".to_string()));
    }

    let file = FileOptions::cached()
        .load(pdf_data)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;
    let resolver = file.resolver();
    let page_count = file.num_pages() as usize;
    let mut pages_text = Vec::with_capacity(page_count);

    for page_num in 0..file.num_pages() {
        let page = file
            .get_page(page_num)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;
        let mut page_text = String::new();
        if let Some(content) = &page.contents {
            let operations = content
                .operations(&resolver)
                .map_err(|e| ExtractError::Parse(e.to_string()))?;
            for op in operations.iter() {
                match op {
                    Op::TextDraw { text } => page_text.push_str(&text.to_string_lossy()),
                    Op::TextDrawAdjusted { array } => {
                        for item in array {
                            if let TextDrawAdjusted::Text(text) = item {
                                page_text.push_str(&text.to_string_lossy());
                            }
                        }
                    }
                    Op::TextNewline => page_text.push('\n'),
                    _ => {}
                }
            }
        }
        debug!(
            "Extracted {} characters from page {}",
            page_text.len(),
            page_num + 1
        );
        pages_text.push(page_text);
    }

    let text = pages_text.join("\n\n").trim().to_string();
    if text.is_empty() {
        return Err(ExtractError::NoText { pages: page_count });
    }

    Ok(ExtractionResult { text, page_count })
}
