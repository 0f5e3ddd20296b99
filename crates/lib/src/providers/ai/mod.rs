pub mod gemini;
pub mod local;
mod sse;

use crate::errors::PromptError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use std::fmt::Debug;

/// A stream of completion fragments, in arrival order.
pub type TextStream = BoxStream<'static, Result<String, PromptError>>;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface over different text-completion services
/// (e.g., OpenAI-compatible endpoints, Gemini).
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    ///
    /// The result should be a string containing the AI's response.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, PromptError>;

    /// Generates a response as a stream of text fragments.
    ///
    /// Providers without native streaming yield the whole `generate` response
    /// as a single fragment.
    async fn generate_stream(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<TextStream, PromptError> {
        let response = self.generate(system_prompt, user_prompt).await?;
        Ok(stream::once(async move { Ok(response) }).boxed())
    }
}

dyn_clone::clone_trait_object!(AiProvider);

/// Drains a fragment stream into a single string, preserving arrival order.
pub async fn collect_stream(mut stream: TextStream) -> Result<String, PromptError> {
    let mut buffer = String::new();
    while let Some(fragment) = stream.try_next().await? {
        buffer.push_str(&fragment);
    }
    Ok(buffer)
}
