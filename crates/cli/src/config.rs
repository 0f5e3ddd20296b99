//! # Application Configuration
//!
//! Loads the `quizgen` configuration from layered sources: built-in defaults, an
//! optional `quizgen.yml` (or the file passed with `--config`), and `QUIZGEN_`
//! environment variables. `${VAR}` references in the file are substituted from
//! the environment before it is parsed.

use config::{
    Config as ConfigBuilder, Environment, File, FileFormat, Value as ConfigValue,
    ValueKind as ConfigValueKind,
};
use quizgen::constants::DEFAULT_MAX_QUESTIONS;
use quizgen::prompts::tasks::*;
use quizgen::{ProviderConfig, TaskPrompts};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, info};

/// The file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "quizgen.yml";
/// The provider every task uses unless it names another one.
pub const DEFAULT_PROVIDER: &str = "default";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub const SUMMARIZATION_TASK: &str = "summarization";
pub const QUESTION_GENERATION_TASK: &str = "question_generation";

static ENV_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}").expect("env reference pattern is valid")
});

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    General(String),
    #[error("{0}")]
    NotFound(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `quizgen.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Upper bound on the questions returned by a run.
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
    /// Named, reusable AI provider configurations.
    pub providers: HashMap<String, ProviderConfig>,
    /// The summarization and question-generation tasks.
    pub tasks: HashMap<String, TaskConfig>,
}

fn default_max_questions() -> usize {
    DEFAULT_MAX_QUESTIONS
}

/// The prompts and provider for one completion task.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TaskConfig {
    /// The key of the provider to use from the `providers` map.
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub user_prompt: Option<String>,
}

/// A task with its provider looked up and its prompts filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTask {
    pub provider_name: String,
    pub provider: ProviderConfig,
    pub prompts: TaskPrompts,
}

impl AppConfig {
    /// Resolves `task` against the provider map, falling back to `defaults` for
    /// any prompt the configuration leaves out.
    pub fn resolve_task(
        &self,
        task: &str,
        defaults: TaskPrompts,
    ) -> Result<ResolvedTask, ConfigError> {
        let task_config = self.tasks.get(task).cloned().unwrap_or_default();
        let provider_name = task_config
            .provider
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());
        let provider = self.providers.get(&provider_name).cloned().ok_or_else(|| {
            ConfigError::General(format!(
                "task '{task}' uses provider '{provider_name}', which is not defined"
            ))
        })?;

        Ok(ResolvedTask {
            provider_name,
            provider,
            prompts: TaskPrompts {
                system_prompt: task_config
                    .system_prompt
                    .unwrap_or(defaults.system_prompt),
                user_prompt: task_config.user_prompt.unwrap_or(defaults.user_prompt),
            },
        })
    }

    /// Replaces the model name of every provider.
    pub fn override_model(&mut self, model: &str) {
        for provider in self.providers.values_mut() {
            provider.model_name = model.to_string();
        }
    }

    /// Gives `api_key` to every provider that has none.
    fn fill_missing_api_keys(&mut self, api_key: &str) {
        for provider in self.providers.values_mut() {
            let missing = provider
                .api_key
                .as_deref()
                .is_none_or(|key| key.trim().is_empty());
            if missing {
                provider.api_key = Some(api_key.to_string());
            }
        }
    }
}

fn table(entries: Vec<(&str, &str)>) -> ConfigValue {
    let map: HashMap<String, ConfigValue> = entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), ConfigValue::from(value)))
        .collect();
    ConfigValue::new(None, ConfigValueKind::Table(map))
}

fn build_default_providers() -> HashMap<String, ConfigValue> {
    HashMap::from([(
        DEFAULT_PROVIDER.to_string(),
        table(vec![("provider", "openai"), ("model_name", DEFAULT_MODEL)]),
    )])
}

/// Constructs a `config::Value` map of the built-in tasks; the base layer of configuration.
fn build_default_tasks() -> HashMap<String, ConfigValue> {
    [
        (
            SUMMARIZATION_TASK,
            SUMMARIZATION_SYSTEM_PROMPT,
            SUMMARIZATION_USER_PROMPT,
        ),
        (
            QUESTION_GENERATION_TASK,
            QUESTION_GENERATION_SYSTEM_PROMPT,
            QUESTION_GENERATION_USER_PROMPT,
        ),
    ]
    .into_iter()
    .map(|(name, system, user)| {
        (
            name.to_string(),
            table(vec![
                ("provider", DEFAULT_PROVIDER),
                ("system_prompt", system),
                ("user_prompt", user),
            ]),
        )
    })
    .collect()
}

// Reads a file and substitutes `${VAR}` references; unset variables become "".
// Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let expanded = ENV_REFERENCE.replace_all(&content, |caps: &regex::Captures| {
        env::var(&caps["var"]).unwrap_or_default()
    });

    Ok(Some(expanded.into_owned()))
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Loads the application configuration.
///
/// An explicit `config_path` must exist; otherwise `quizgen.yml` in the working
/// directory is used when present. Nested keys are overridden by `QUIZGEN_...`
/// variables (e.g. `QUIZGEN_PROVIDERS__DEFAULT__MODEL_NAME`). Afterwards
/// `AI_API_KEY` fills providers without a key and `AI_MODEL` replaces every model.
pub fn get_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder()
        .set_default("providers", build_default_providers())?
        .set_default("tasks", build_default_tasks())?;

    match config_path {
        Some(path) => {
            let content = read_and_substitute(path)?.ok_or_else(|| {
                ConfigError::NotFound(format!("Config file not found at '{path}'."))
            })?;
            info!("Loading configuration from '{path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None => {
            if let Some(content) = read_and_substitute(DEFAULT_CONFIG_FILE)? {
                info!("Loading configuration from '{DEFAULT_CONFIG_FILE}'.");
                builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
            } else {
                debug!("No '{DEFAULT_CONFIG_FILE}' found; using built-in defaults.");
            }
        }
    }

    let settings = builder
        .add_source(
            Environment::with_prefix("QUIZGEN")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    if let Some(api_key) = non_empty_env("AI_API_KEY") {
        config.fill_missing_api_keys(&api_key);
    }
    if let Some(model) = non_empty_env("AI_MODEL") {
        config.override_model(&model);
    }

    Ok(config)
}
