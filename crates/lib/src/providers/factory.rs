//! # AI Provider Factory
//!
//! This module centralizes the logic for creating AI provider instances from
//! configuration, so every consumer (cli, tests, embedding applications) builds
//! providers the same way. Credentials are checked here, at construction time,
//! rather than on the first request.

use crate::{
    errors::PromptError,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
    types::ProviderConfig,
};
use tracing::info;

/// The chat-completions endpoint used when an `openai` provider has no `api_url`.
pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Creates an AI provider instance from its configuration.
///
/// - `openai`: requires an API key; the URL defaults to the public OpenAI endpoint.
/// - `local`: any OpenAI-compatible server; requires `api_url`, the key is optional.
/// - `gemini`: requires an API key; the URL is derived from `model_name` when absent.
pub fn create_provider(
    name: &str,
    config: &ProviderConfig,
) -> Result<Box<dyn AiProvider>, PromptError> {
    let api_key = config
        .api_key
        .as_ref()
        .filter(|key| !key.trim().is_empty())
        .cloned();

    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "openai" => {
            let api_key = api_key.ok_or_else(|| PromptError::MissingApiKey(name.to_string()))?;
            let api_url = config
                .api_url
                .clone()
                .unwrap_or_else(|| OPENAI_CHAT_COMPLETIONS_URL.to_string());
            info!(
                "Configuring OpenAI provider '{}' with model '{}'",
                name, config.model_name
            );
            Box::new(LocalAiProvider::new(
                api_url,
                Some(api_key),
                Some(config.model_name.clone()),
            )?)
        }
        "local" => {
            let api_url = config.api_url.clone().ok_or_else(|| {
                PromptError::MissingAiProvider(format!(
                    "api_url is not set for local provider '{name}'"
                ))
            })?;
            info!(
                "Configuring Local AI provider '{}' with URL: {}",
                name, api_url
            );
            Box::new(LocalAiProvider::new(
                api_url,
                api_key,
                Some(config.model_name.clone()),
            )?)
        }
        "gemini" => {
            let api_key = api_key.ok_or_else(|| PromptError::MissingApiKey(name.to_string()))?;
            let api_url = config
                .api_url
                .clone()
                .unwrap_or_else(|| GeminiProvider::endpoint_for_model(&config.model_name));
            info!(
                "Configuring Gemini provider '{}' with URL: {}",
                name, api_url
            );
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        other => return Err(PromptError::UnsupportedProvider(other.to_string())),
    };

    Ok(provider)
}
