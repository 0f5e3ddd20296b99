//! # Shared Types
//!
//! Provider configuration, task prompts and the result of a question-generation run.

use serde::{Deserialize, Serialize};

/// An ordered list of parsed questions, first occurrence first.
pub type QuestionList = Vec<String>;

/// A reusable configuration for a specific AI provider instance.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProviderConfig {
    /// The type of provider ("openai", "local" or "gemini").
    pub provider: String,
    /// The API URL. Optional for providers where it can be derived.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The API key, which can be null for local providers.
    #[serde(default)]
    pub api_key: Option<String>,
    pub model_name: String,
}

/// The system and user prompt templates for a single completion task.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TaskPrompts {
    pub system_prompt: String,
    pub user_prompt: String,
}

impl TaskPrompts {
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
        }
    }

    /// The built-in summarization prompts.
    pub fn summarization() -> Self {
        Self::new(
            crate::prompts::tasks::SUMMARIZATION_SYSTEM_PROMPT,
            crate::prompts::tasks::SUMMARIZATION_USER_PROMPT,
        )
    }

    /// The built-in question-generation prompts.
    pub fn question_generation() -> Self {
        Self::new(
            crate::prompts::tasks::QUESTION_GENERATION_SYSTEM_PROMPT,
            crate::prompts::tasks::QUESTION_GENERATION_USER_PROMPT,
        )
    }
}

/// The outcome of a question-generation run.
///
/// `success == false` always comes with an empty `questions` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub questions: QuestionList,
    pub success: bool,
    /// Why the run produced no questions. `None` on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl PipelineResult {
    pub fn succeeded(questions: QuestionList) -> Self {
        Self {
            questions,
            success: true,
            failure_reason: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            questions: Vec::new(),
            success: false,
            failure_reason: Some(reason.into()),
        }
    }
}
