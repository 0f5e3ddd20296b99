//! # Shared Constants
//!
//! Limits shared by the question-generation client, the parser and the pipeline.

/// Default upper bound on the number of questions returned by a run.
pub const DEFAULT_MAX_QUESTIONS: usize = 10;

/// Text sent to the question-generation service is cut to this many characters.
pub const MAX_GENERATION_INPUT_CHARS: usize = 4000;

/// A parsed question must be strictly longer than this (after trimming).
pub const MIN_QUESTION_CHARS: usize = 5;

/// A raw completion must be strictly longer than this (after trimming) to be parsed.
pub const MIN_COMPLETION_CHARS: usize = 20;

/// Appended to failure messages when a provider error looks like a context-length overflow.
pub const CONTEXT_LENGTH_HINT: &str =
    "the input appears to exceed the model's context window; try a smaller document or a model with a larger context";
