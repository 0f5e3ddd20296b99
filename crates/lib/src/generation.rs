//! # Question Generation Client
//!
//! Sends (truncated) source text to a completion service, drains the streamed
//! response and hands it to the question parser. Failures at this stage are
//! absorbed into an unsuccessful [`PipelineResult`] instead of being returned
//! as errors.

use crate::{
    constants::{CONTEXT_LENGTH_HINT, MAX_GENERATION_INPUT_CHARS, MIN_COMPLETION_CHARS},
    errors::PromptError,
    prompts::core::render_question_prompt,
    providers::ai::{collect_stream, AiProvider},
    questions::parse_questions,
    types::{PipelineResult, TaskPrompts},
};
use tracing::{debug, info, instrument, warn};

/// Returns the first `MAX_GENERATION_INPUT_CHARS` characters of `text`.
///
/// Truncation counts characters, never bytes, so multi-byte text is not split.
pub fn truncate_for_generation(text: &str) -> &str {
    match text.char_indices().nth(MAX_GENERATION_INPUT_CHARS) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Generates up to `max_questions` questions about `text`.
#[instrument(skip(provider, text, prompts), fields(text_chars = text.chars().count()))]
pub async fn generate_questions(
    provider: &dyn AiProvider,
    text: &str,
    max_questions: usize,
    prompts: &TaskPrompts,
) -> PipelineResult {
    let source = truncate_for_generation(text);
    if source.len() < text.len() {
        warn!(
            "Input of {} characters truncated to {} before question generation.",
            text.chars().count(),
            MAX_GENERATION_INPUT_CHARS
        );
    }

    let user_prompt = render_question_prompt(&prompts.user_prompt, source, max_questions);

    let raw_completion = match request_completion(provider, &prompts.system_prompt, &user_prompt)
        .await
    {
        Ok(raw) => raw,
        Err(e) => {
            let reason = describe_generation_error(&e);
            warn!("Question generation failed: {}", reason);
            return PipelineResult::failed(reason);
        }
    };

    debug!("<-- Raw question completion: {}", raw_completion);

    if raw_completion.trim().chars().count() <= MIN_COMPLETION_CHARS {
        warn!(
            "Question generation returned too little content ({} characters).",
            raw_completion.trim().chars().count()
        );
        return PipelineResult::failed("completion was empty or too short to contain questions");
    }

    let questions = parse_questions(&raw_completion, max_questions);
    if questions.is_empty() {
        warn!("No well-formed questions could be parsed from the completion.");
        return PipelineResult::failed("no questions could be parsed from the completion");
    }

    info!("Parsed {} questions.", questions.len());
    PipelineResult::succeeded(questions)
}

async fn request_completion(
    provider: &dyn AiProvider,
    system_prompt: &str,
    user_prompt: &str,
) -> Result<String, PromptError> {
    let stream = provider.generate_stream(system_prompt, user_prompt).await?;
    collect_stream(stream).await
}

/// Renders a provider error, appending the context-length hint when it applies.
pub fn describe_generation_error(error: &PromptError) -> String {
    if error.is_context_length() {
        format!("{error} (hint: {CONTEXT_LENGTH_HINT})")
    } else {
        error.to_string()
    }
}
