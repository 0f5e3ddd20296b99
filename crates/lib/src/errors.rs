use thiserror::Error;

/// Custom error types for the completion-service layer.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error: {0}")]
    AiApi(String),
    #[error("AI provider stream failed: {0}")]
    AiStream(String),
    #[error("API key is missing for provider '{0}'")]
    MissingApiKey(String),
    #[error("AI provider is not configured: {0}")]
    MissingAiProvider(String),
    #[error("Unsupported AI provider type: {0}")]
    UnsupportedProvider(String),
}

impl PromptError {
    /// Heuristic check for "prompt too large" failures.
    ///
    /// Providers report these in free text, so this is a substring match on the
    /// rendered message for "context length" or "token".
    pub fn is_context_length(&self) -> bool {
        is_context_length_message(&self.to_string())
    }
}

/// Case-insensitive substring match used by [`PromptError::is_context_length`].
pub fn is_context_length_message(message: &str) -> bool {
    let lowered = message.to_lowercase();
    lowered.contains("context length") || lowered.contains("token")
}
