//! # Summarization Client
//!
//! Compresses extracted document text with a large-context completion service.
//! The response is the summary, used as-is.

use crate::{
    constants::CONTEXT_LENGTH_HINT,
    errors::PromptError,
    prompts::core::render_summarization_prompt,
    providers::ai::AiProvider,
    types::TaskPrompts,
};
use tracing::{info, instrument, warn};

#[instrument(skip(provider, text, prompts), fields(text_chars = text.chars().count()))]
pub async fn summarize(
    provider: &dyn AiProvider,
    text: &str,
    prompts: &TaskPrompts,
) -> Result<String, PromptError> {
    let user_prompt = render_summarization_prompt(&prompts.user_prompt, text);

    match provider.generate(&prompts.system_prompt, &user_prompt).await {
        Ok(summary) => {
            info!("Summary received ({} characters).", summary.chars().count());
            Ok(summary)
        }
        Err(e) => {
            if e.is_context_length() {
                warn!("Summarization failed: {}. Hint: {}", e, CONTEXT_LENGTH_HINT);
            }
            Err(e)
        }
    }
}
