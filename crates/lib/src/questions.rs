//! # Question Parser
//!
//! Turns a free-form completion into an ordered, bounded list of questions.
//!
//! The parser is purely syntactic: every `?`-terminated fragment that survives
//! cleaning and the length filter is treated as a question. Rhetorical or
//! embedded question marks in prose are emitted too, and number-like text such
//! as `2.5` inside a sentence is split as if it were a list marker. Duplicates
//! are kept.

use crate::{constants::MIN_QUESTION_CHARS, types::QuestionList};
use regex::Regex;
use std::sync::LazyLock;

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+[.)]\s*").expect("list marker pattern is valid"));

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[.)]\s*").expect("leading number pattern is valid"));

static LEADING_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•]\s*").expect("leading bullet pattern is valid"));

/// Parses a raw completion into at most `max_questions` questions.
///
/// Never fails: when nothing survives, the list is empty.
pub fn parse_questions(raw: &str, max_questions: usize) -> QuestionList {
    let normalized = LIST_MARKER.replace_all(raw, "\n${0}");

    normalized
        .split('\n')
        .flat_map(candidate_segments)
        .map(|segment| clean_segment(&segment))
        .filter(|question| is_well_formed(question))
        .take(max_questions)
        .collect()
}

/// Yields each `?`-terminated fragment of a line, with its `?` restored.
///
/// Whatever follows the last `?` on the line is unterminated and dropped.
fn candidate_segments(line: &str) -> impl Iterator<Item = String> + '_ {
    let mut pieces: Vec<&str> = line.split('?').collect();
    pieces.pop();
    pieces
        .into_iter()
        .filter(|piece| !piece.trim().is_empty())
        .map(|piece| format!("{}?", piece.trim()))
}

fn clean_segment(segment: &str) -> String {
    let trimmed = segment.trim();
    let without_number = LEADING_NUMBER.replace(trimmed, "");
    let without_bullet = LEADING_BULLET.replace(&without_number, "");
    without_bullet.trim().to_string()
}

fn is_well_formed(question: &str) -> bool {
    question.chars().count() > MIN_QUESTION_CHARS && question.contains('?')
}
