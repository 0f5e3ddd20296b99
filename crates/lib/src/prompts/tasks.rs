//! # Default Task Prompts
//!
//! This module contains the default, hardcoded prompt templates for the two completion tasks.
//! These are loaded programmatically and can be overridden by `quizgen.yml`.

// --- Summarization ---
pub const SUMMARIZATION_SYSTEM_PROMPT: &str = r#"You are an expert document analyst. You compress long documents into dense, faithful summaries that keep every key concept, definition, fact and relationship a student would need to study the material. Do not add information that is not in the document."#;

/// Placeholders: `{text}`
pub const SUMMARIZATION_USER_PROMPT: &str = r#"Summarize the following document. Keep the summary concise, but preserve the main topics, important definitions, key facts and any conclusions.

# Document
{text}"#;

// --- Question Generation ---
pub const QUESTION_GENERATION_SYSTEM_PROMPT: &str = r#"You are an experienced educator who writes clear study questions. Each question must be self-contained, answerable from the provided material, and end with a question mark."#;

/// Placeholders: `{count}`, `{text}`
pub const QUESTION_GENERATION_USER_PROMPT: &str = r#"Write {count} educational questions about the material below. Return them as a numbered list, one question per line, with no answers and no extra commentary.

# Material
{text}"#;
