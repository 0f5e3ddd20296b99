//! # Provider Wiring
//!
//! Turns the loaded configuration into providers, a pipeline, or a standalone
//! question-generation run.

use crate::config::{AppConfig, QUESTION_GENERATION_TASK, SUMMARIZATION_TASK};
use anyhow::{Context, Result};
use quizgen::providers::ai::AiProvider;
use quizgen::providers::factory::create_provider;
use quizgen::{PipelineResult, TaskPrompts};
use quizgen_pdf::QuestionPipeline;

/// A configured provider together with the prompts of the task it serves.
#[derive(Debug)]
pub struct TaskProvider {
    pub provider: Box<dyn AiProvider>,
    pub prompts: TaskPrompts,
}

/// Builds the provider for a single task.
pub fn task_provider(config: &AppConfig, task: &str, defaults: TaskPrompts) -> Result<TaskProvider> {
    let resolved = config.resolve_task(task, defaults)?;
    let provider = create_provider(&resolved.provider_name, &resolved.provider)
        .with_context(|| format!("failed to configure the provider for task '{task}'"))?;
    Ok(TaskProvider {
        provider,
        prompts: resolved.prompts,
    })
}

/// Builds a full pipeline; both tasks must have usable providers.
pub fn build_pipeline(config: &AppConfig, max_questions: Option<usize>) -> Result<QuestionPipeline> {
    let summarization = task_provider(config, SUMMARIZATION_TASK, TaskPrompts::summarization())?;
    let generation = task_provider(
        config,
        QUESTION_GENERATION_TASK,
        TaskPrompts::question_generation(),
    )?;

    let pipeline = QuestionPipeline::builder()
        .summarizer(summarization.provider)
        .generator(generation.provider)
        .summarization_prompts(summarization.prompts)
        .generation_prompts(generation.prompts)
        .max_questions(max_questions.unwrap_or(config.max_questions))
        .build()?;
    Ok(pipeline)
}

/// Generates questions from already-summarized text.
///
/// Only the question-generation provider is configured, so the summarization
/// task may point at a provider without credentials.
pub async fn generate_from_text(
    config: &AppConfig,
    text: &str,
    max_questions: Option<usize>,
) -> Result<PipelineResult> {
    let generation = task_provider(
        config,
        QUESTION_GENERATION_TASK,
        TaskPrompts::question_generation(),
    )?;
    let max_questions = max_questions.unwrap_or(config.max_questions);
    Ok(quizgen::generate_questions(
        generation.provider.as_ref(),
        text,
        max_questions,
        &generation.prompts,
    )
    .await)
}
