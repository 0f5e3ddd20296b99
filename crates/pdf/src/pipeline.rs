//! # Question Pipeline
//!
//! Sequences download → extraction → summarization → question generation.
//!
//! Everything up to and including summarization is all-or-nothing: a failure
//! aborts the run with a [`PipelineError`] naming the stage. Question
//! generation never aborts; its failures come back as an unsuccessful
//! [`PipelineResult`].

use crate::{extract::extract_text, fetch::download_pdf, PipelineError, PipelineStage};
use quizgen::{
    constants::DEFAULT_MAX_QUESTIONS, generation, providers::ai::AiProvider, summarize,
    PipelineResult, TaskPrompts,
};
use reqwest::Client;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// The output of the download, extraction and summarization stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    /// The URL or other identifier of the document.
    pub source: String,
    pub summary: String,
    pub page_count: usize,
    /// Character count of the extracted text that was summarized.
    pub extracted_chars: usize,
    /// md5 hex digest of the raw PDF bytes.
    pub content_hash: String,
}

/// A configured, reusable pipeline. Each call is an independent run.
#[derive(Debug)]
pub struct QuestionPipeline {
    http: Client,
    summarizer: Box<dyn AiProvider>,
    generator: Box<dyn AiProvider>,
    summarization_prompts: TaskPrompts,
    generation_prompts: TaskPrompts,
    max_questions: usize,
}

impl QuestionPipeline {
    pub fn builder() -> QuestionPipelineBuilder {
        QuestionPipelineBuilder::new()
    }

    /// The question limit used by [`Self::generate_questions_from_pdf_url`].
    pub fn max_questions(&self) -> usize {
        self.max_questions
    }

    /// Runs every stage for the PDF at `url`.
    #[instrument(skip(self), fields(run_id = %Uuid::new_v4()))]
    pub async fn generate_questions_from_pdf_url(
        &self,
        url: &str,
    ) -> Result<PipelineResult, PipelineError> {
        let summary = self.extract_and_summarize(url).await?;
        let result = self
            .generate_questions(&summary.summary, self.max_questions)
            .await;
        info!(
            stage = %PipelineStage::Done,
            success = result.success,
            "Pipeline finished with {} questions.",
            result.questions.len()
        );
        Ok(result)
    }

    /// Downloads the PDF at `url`, extracts its text and summarizes it.
    #[instrument(skip(self))]
    pub async fn extract_and_summarize(&self, url: &str) -> Result<SummaryResult, PipelineError> {
        info!(stage = %PipelineStage::AwaitingInput, "Starting run for '{}'.", url);
        info!(stage = %PipelineStage::Extracting, "Downloading PDF.");
        let pdf_data = download_pdf(&self.http, url).await.inspect_err(log_failure)?;
        self.summarize_document(&pdf_data, url).await
    }

    /// Extracts and summarizes a PDF the caller already holds in memory.
    #[instrument(skip(self, pdf_data), fields(bytes = pdf_data.len()))]
    pub async fn summarize_document(
        &self,
        pdf_data: &[u8],
        source: &str,
    ) -> Result<SummaryResult, PipelineError> {
        info!(stage = %PipelineStage::Extracting, "Extracting text.");
        let content_hash = format!("{:x}", md5::compute(pdf_data));
        let extraction = extract_text(pdf_data)
            .map_err(PipelineError::from)
            .inspect_err(log_failure)?;
        info!(
            "Extracted {} characters from {} page(s) (md5 {}).",
            extraction.text.chars().count(),
            extraction.page_count,
            content_hash
        );

        info!(stage = %PipelineStage::Summarizing, "Summarizing extracted text.");
        let summary = summarize(
            self.summarizer.as_ref(),
            &extraction.text,
            &self.summarization_prompts,
        )
        .await
        .map_err(|source| PipelineError::Summarization { source })
        .inspect_err(log_failure)?;

        Ok(SummaryResult {
            source: source.to_string(),
            summary,
            page_count: extraction.page_count,
            extracted_chars: extraction.text.chars().count(),
            content_hash,
        })
    }

    /// Generates up to `max_questions` questions from already-extracted or summarized text.
    ///
    /// Never fails; an unsuccessful result carries the reason.
    pub async fn generate_questions(&self, text: &str, max_questions: usize) -> PipelineResult {
        info!(
            stage = %PipelineStage::GeneratingQuestions,
            "Generating up to {} questions.",
            max_questions
        );
        let result = generation::generate_questions(
            self.generator.as_ref(),
            text,
            max_questions,
            &self.generation_prompts,
        )
        .await;
        if !result.success {
            warn!(
                stage = %PipelineStage::GeneratingQuestions,
                "Question generation produced no questions: {}",
                result.failure_reason.as_deref().unwrap_or("unknown reason")
            );
        }
        result
    }
}

fn log_failure(error: &PipelineError) {
    warn!(stage = %error.stage(), "Pipeline aborted: {}", error);
}

// --- Builder ---

/// A builder for creating `QuestionPipeline` instances.
///
/// Both providers must be set; prompts default to the built-in templates and
/// the question limit to `DEFAULT_MAX_QUESTIONS`.
#[derive(Default)]
pub struct QuestionPipelineBuilder {
    http: Option<Client>,
    summarizer: Option<Box<dyn AiProvider>>,
    generator: Option<Box<dyn AiProvider>>,
    summarization_prompts: Option<TaskPrompts>,
    generation_prompts: Option<TaskPrompts>,
    max_questions: Option<usize>,
}

impl QuestionPipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an existing HTTP client for PDF downloads.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    pub fn summarizer(mut self, provider: Box<dyn AiProvider>) -> Self {
        self.summarizer = Some(provider);
        self
    }

    pub fn generator(mut self, provider: Box<dyn AiProvider>) -> Self {
        self.generator = Some(provider);
        self
    }

    pub fn summarization_prompts(mut self, prompts: TaskPrompts) -> Self {
        self.summarization_prompts = Some(prompts);
        self
    }

    pub fn generation_prompts(mut self, prompts: TaskPrompts) -> Self {
        self.generation_prompts = Some(prompts);
        self
    }

    pub fn max_questions(mut self, max_questions: usize) -> Self {
        self.max_questions = Some(max_questions);
        self
    }

    /// Builds the `QuestionPipeline`.
    pub fn build(self) -> Result<QuestionPipeline, PipelineError> {
        let summarizer = self.summarizer.ok_or_else(|| {
            PipelineError::Config("a summarization provider is required".to_string())
        })?;
        let generator = self.generator.ok_or_else(|| {
            PipelineError::Config("a question-generation provider is required".to_string())
        })?;
        let http = match self.http {
            Some(client) => client,
            None => Client::builder()
                .build()
                .map_err(|e| PipelineError::Config(format!("failed to build HTTP client: {e}")))?,
        };

        Ok(QuestionPipeline {
            http,
            summarizer,
            generator,
            summarization_prompts: self
                .summarization_prompts
                .unwrap_or_else(TaskPrompts::summarization),
            generation_prompts: self
                .generation_prompts
                .unwrap_or_else(TaskPrompts::question_generation),
            max_questions: self.max_questions.unwrap_or(DEFAULT_MAX_QUESTIONS),
        })
    }
}
