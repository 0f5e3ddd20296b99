//! # Text Extraction Tests

use anyhow::Result;
use quizgen_pdf::{extract_text, ExtractError};
use quizgen_test_utils::helpers::{generate_blank_pdf, generate_test_pdf};

#[test]
fn test_empty_buffer_is_rejected_before_parsing() {
    let error = extract_text(&[]).unwrap_err();
    assert!(matches!(error, ExtractError::EmptyBuffer));
    assert!(error.to_string().contains("empty"));
}

#[test]
fn test_non_pdf_bytes_fail_to_parse() {
    let error = extract_text(b"<html><body>Not a PDF</body></html>").unwrap_err();
    match error {
        ExtractError::Parse(message) => assert!(message.contains("%PDF-")),
        other => panic!("Expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_extracts_text_and_page_count() -> Result<()> {
    let pdf_data = generate_test_pdf("The magic number is 42.")?;

    let result = extract_text(&pdf_data)?;

    assert_eq!(result.page_count, 1);
    assert!(!result.text.is_empty());
    assert_eq!(result.text, result.text.trim());
    Ok(())
}

#[test]
fn test_pdf_without_text_reports_no_text() -> Result<()> {
    let pdf_data = generate_blank_pdf()?;

    let error = extract_text(&pdf_data).unwrap_err();
    match &error {
        ExtractError::NoText { pages } => assert_eq!(*pages, 1),
        other => panic!("Expected NoText error, got {other:?}"),
    }
    assert!(error.to_string().contains("scanned or password-protected"));
    Ok(())
}
