//! # Question Parser Tests
//!
//! Behavioural tests for `parse_questions`, including the documented quirks
//! that must be preserved (embedded question marks, no deduplication).

use quizgen::constants::DEFAULT_MAX_QUESTIONS;
use quizgen::parse_questions;

const MIXED_COMPLETION: &str = "Here are some questions about the document:\n\
    1. What is the main argument of the author?\n\
    2) How does the second chapter support it?\n\
    - Why does this matter?\n\
    * Which evidence is strongest?\n\
    • What would a critic say?\n\
    Ok?\n\
    I hope these help!";

#[test]
fn test_multiple_numbered_questions_on_one_line() {
    let questions = parse_questions("1. What is X? 2. What is Y? 3. What is Z?", 10);
    assert_eq!(questions, vec!["What is X?", "What is Y?", "What is Z?"]);
}

#[test]
fn test_strips_bullets_and_numbering() {
    assert_eq!(
        parse_questions("- Why does this matter?", 10),
        vec!["Why does this matter?"]
    );
    assert_eq!(
        parse_questions("3) How should this be used?", 10),
        vec!["How should this be used?"]
    );
}

#[test]
fn test_short_segments_are_dropped() {
    assert!(parse_questions("Ok?", 10).is_empty());
    // Exactly five characters is still too short.
    assert!(parse_questions("Whom??", 10).is_empty());
    assert_eq!(parse_questions("Why so?", 10), vec!["Why so?"]);
}

#[test]
fn test_text_without_question_marks_yields_nothing() {
    assert!(parse_questions("This document has no question marks at all.", 10).is_empty());
    assert!(parse_questions("", 10).is_empty());
}

#[test]
fn test_mixed_completion_preserves_order() {
    let questions = parse_questions(MIXED_COMPLETION, DEFAULT_MAX_QUESTIONS);
    assert_eq!(
        questions,
        vec![
            "What is the main argument of the author?",
            "How does the second chapter support it?",
            "Why does this matter?",
            "Which evidence is strongest?",
            "What would a critic say?",
        ]
    );
}

#[test]
fn test_bound_is_respected_for_every_limit() {
    let all = parse_questions(MIXED_COMPLETION, usize::MAX);
    for limit in 0..=all.len() + 2 {
        let bounded = parse_questions(MIXED_COMPLETION, limit);
        assert!(bounded.len() <= limit);
        assert_eq!(bounded[..], all[..bounded.len()]);
    }
    assert!(parse_questions(MIXED_COMPLETION, 0).is_empty());
}

#[test]
fn test_every_question_is_well_formed() {
    let noisy = "Intro text? ok? 4. Is it?? 5) - * Deep nesting works?\n\n  ?  \n7.What about no space?";
    for question in parse_questions(noisy, 50) {
        assert!(question.ends_with('?'), "not terminated: {question:?}");
        assert!(question.trim().chars().count() > 5, "too short: {question:?}");
    }
}

#[test]
fn test_parsing_is_deterministic() {
    let first = parse_questions(MIXED_COMPLETION, 3);
    let second = parse_questions(MIXED_COMPLETION, 3);
    assert_eq!(first, second);
}

#[test]
fn test_rhetorical_question_marks_are_kept() {
    let questions = parse_questions(
        "The author asks: who knows? Then the chapter moves on to methods.",
        10,
    );
    assert_eq!(questions, vec!["The author asks: who knows?"]);
}

#[test]
fn test_duplicates_are_not_removed() {
    let questions = parse_questions("What is X? What is X?", 10);
    assert_eq!(questions, vec!["What is X?", "What is X?"]);
}

#[test]
fn test_numbers_inside_prose_split_lines() {
    // A decimal inside a sentence is treated as a list marker; the fragment
    // before it has no question mark on its own line and is lost.
    let questions = parse_questions("Why is version 2.5 faster than before?", 10);
    assert_eq!(questions, vec!["5 faster than before?"]);
}

#[test]
fn test_no_case_normalization() {
    let questions = parse_questions("1. wHAT Is tHIS?", 10);
    assert_eq!(questions, vec!["wHAT Is tHIS?"]);
}
