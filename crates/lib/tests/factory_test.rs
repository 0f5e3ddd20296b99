//! # Provider Factory Tests
//!
//! Credentials must be validated when a provider is built, not on first use.

use quizgen::providers::factory::create_provider;
use quizgen::{PromptError, ProviderConfig};

fn provider_config(kind: &str, api_url: Option<&str>, api_key: Option<&str>) -> ProviderConfig {
    ProviderConfig {
        provider: kind.to_string(),
        api_url: api_url.map(String::from),
        api_key: api_key.map(String::from),
        model_name: "test-model".to_string(),
    }
}

#[test]
fn test_openai_requires_api_key() {
    let result = create_provider("default", &provider_config("openai", None, None));
    match result {
        Err(PromptError::MissingApiKey(name)) => assert_eq!(name, "default"),
        other => panic!("Expected MissingApiKey, got {other:?}"),
    }
}

#[test]
fn test_blank_api_key_counts_as_missing() {
    let result = create_provider("summarizer", &provider_config("gemini", None, Some("  ")));
    let error = result.unwrap_err();
    assert!(matches!(error, PromptError::MissingApiKey(_)));
    assert_eq!(
        error.to_string(),
        "API key is missing for provider 'summarizer'"
    );
}

#[test]
fn test_openai_with_key_builds() {
    assert!(create_provider("default", &provider_config("openai", None, Some("sk-test"))).is_ok());
}

#[test]
fn test_local_requires_url_but_not_key() {
    let missing_url = create_provider("local", &provider_config("local", None, None));
    assert!(matches!(
        missing_url,
        Err(PromptError::MissingAiProvider(_))
    ));

    let built = create_provider(
        "local",
        &provider_config("local", Some("http://localhost:1234/v1/chat/completions"), None),
    );
    assert!(built.is_ok());
}

#[test]
fn test_unknown_provider_type() {
    let result = create_provider("x", &provider_config("anthropic-v0", None, Some("key")));
    assert!(matches!(
        result,
        Err(PromptError::UnsupportedProvider(kind)) if kind == "anthropic-v0"
    ));
}
