#![allow(dead_code)]

use dotenvy::dotenv;
use quizgen::prompts::tasks::{QUESTION_GENERATION_SYSTEM_PROMPT, SUMMARIZATION_SYSTEM_PROMPT};
use quizgen_pdf::QuestionPipeline;
use quizgen_test_utils::MockAiProvider;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Unique substrings of the default system prompts, used to key mock responses.
pub const SUMMARIZATION_KEY: &str = "expert document analyst";
pub const GENERATION_KEY: &str = "experienced educator";

/// Builds a pipeline whose summarizer and generator share one mock provider.
pub fn pipeline_with(provider: &MockAiProvider, max_questions: usize) -> QuestionPipeline {
    assert!(SUMMARIZATION_SYSTEM_PROMPT.contains(SUMMARIZATION_KEY));
    assert!(QUESTION_GENERATION_SYSTEM_PROMPT.contains(GENERATION_KEY));

    QuestionPipeline::builder()
        .summarizer(Box::new(provider.clone()))
        .generator(Box::new(provider.clone()))
        .max_questions(max_questions)
        .build()
        .expect("pipeline should build")
}
