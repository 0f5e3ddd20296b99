//! # quizgen
//!
//! Core of the "summarize, then generate questions" pipeline: completion-service
//! providers, prompt templates, the summarization and question-generation clients,
//! and the parser that turns a free-form completion into a clean list of questions.
//!
//! PDF download, text extraction and stage sequencing live in `quizgen-pdf`.

pub mod constants;
pub mod errors;
pub mod generation;
pub mod prompts;
pub mod providers;
pub mod questions;
pub mod summarize;
pub mod types;

pub use errors::PromptError;
pub use generation::generate_questions;
pub use questions::parse_questions;
pub use summarize::summarize;
pub use types::{PipelineResult, ProviderConfig, QuestionList, TaskPrompts};
