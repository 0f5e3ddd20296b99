use crate::{
    errors::PromptError,
    providers::ai::{sse::SseDecoder, AiProvider, TextStream},
};
use async_trait::async_trait;
use futures::{future, stream, StreamExt};
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use tracing::debug;

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct LocalAiRequest<'a> {
    messages: Vec<LocalAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    temperature: f32,
    stream: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct LocalAiMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct LocalAiResponse {
    choices: Vec<LocalAiChoice>,
}

#[derive(Deserialize, Debug)]
struct LocalAiChoice {
    message: LocalAiMessage,
}

// --- Local Provider implementation ---

/// A provider for interacting with a local or OpenAI-compatible API.
#[derive(Clone, Debug)]
pub struct LocalAiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
    model: Option<String>,
}

impl LocalAiProvider {
    /// Creates a new `LocalAiProvider`.
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        model: Option<String>,
    ) -> Result<Self, PromptError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(PromptError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }

    async fn send(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        stream: bool,
    ) -> Result<reqwest::Response, PromptError> {
        let messages = vec![
            LocalAiMessage {
                role: "system".to_string(),
                content: system_prompt.to_string(),
            },
            LocalAiMessage {
                role: "user".to_string(),
                content: user_prompt.to_string(),
            },
        ];

        let request_body = LocalAiRequest {
            messages,
            model: self.model.as_deref(),
            temperature: 0.2,
            stream,
        };

        let mut request_builder = self.client.post(&self.api_url);

        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        debug!(api_url = %self.api_url, stream, "--> Sending completion request");

        let response = request_builder
            .json(&request_body)
            .send()
            .await
            .map_err(PromptError::AiRequest)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PromptError::AiApi(format!("status {status}: {error_text}")));
        }

        Ok(response)
    }
}

#[async_trait]
impl AiProvider for LocalAiProvider {
    /// Generates a completion using a local or OpenAI-compatible API.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, PromptError> {
        let response = self.send(system_prompt, user_prompt, false).await?;

        let local_ai_response: LocalAiResponse = response
            .json()
            .await
            .map_err(PromptError::AiDeserialization)?;

        let raw_response = local_ai_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default();

        Ok(raw_response)
    }

    /// Streams a completion as Server-Sent Events, yielding each content delta.
    async fn generate_stream(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<TextStream, PromptError> {
        let response = self.send(system_prompt, user_prompt, true).await?;

        let mut decoder = SseDecoder::default();
        // A trailing `None` marks end-of-body so the decoder can flush its last line.
        let fragments = response
            .bytes_stream()
            .map(Some)
            .chain(stream::once(future::ready(None)))
            .map(move |item| match item {
                Some(Ok(bytes)) => decoder.feed(&bytes),
                Some(Err(e)) => vec![Err(PromptError::AiStream(e.to_string()))],
                None => decoder.finish().into_iter().collect(),
            })
            .flat_map(stream::iter);

        Ok(fragments.boxed())
    }
}
