#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared helpers for the `quizgen` test suites: tracing setup and a scripted
//! AI provider that records every call.

use async_trait::async_trait;
use dotenvy::dotenv;
use futures::stream::{self, StreamExt};
use quizgen::providers::ai::{AiProvider, TextStream};
use quizgen::PromptError;
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

// --- Mock AI Provider for Logic Testing ---

/// Replays a fixed response (or error) and records each `(system, user)` prompt pair.
///
/// Streaming splits the response into fixed-size fragments so callers must
/// reassemble them in order.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<(String, String)>>>,
    response: Result<String, String>,
    fragment_chars: usize,
}

impl MockAiProvider {
    pub fn new(response: &str) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            response: Ok(response.to_string()),
            fragment_chars: 7,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            response: Err(message.to_string()),
            fragment_chars: 7,
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.call_history.read().unwrap().clone()
    }

    fn record(&self, system_prompt: &str, user_prompt: &str) {
        self.call_history
            .write()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, PromptError> {
        self.record(system_prompt, user_prompt);
        self.response.clone().map_err(PromptError::AiApi)
    }

    async fn generate_stream(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<TextStream, PromptError> {
        self.record(system_prompt, user_prompt);
        let response = self.response.clone().map_err(PromptError::AiApi)?;
        let chars: Vec<char> = response.chars().collect();
        let fragments: Vec<Result<String, PromptError>> = chars
            .chunks(self.fragment_chars)
            .map(|chunk| Ok(chunk.iter().collect()))
            .collect();
        Ok(stream::iter(fragments).boxed())
    }
}
