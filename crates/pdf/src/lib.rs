//! # quizgen-pdf: PDF Question Pipeline
//!
//! This crate downloads a PDF, extracts its text, summarizes it, and generates
//! study questions from the summary using the clients in `quizgen`.

pub mod extract;
pub mod fetch;
pub mod pipeline;

pub use extract::{extract_text, ExtractError, ExtractionResult};
pub use fetch::download_pdf;
pub use pipeline::{QuestionPipeline, QuestionPipelineBuilder, SummaryResult};

use quizgen::{constants::CONTEXT_LENGTH_HINT, PromptError};
use std::fmt;
use thiserror::Error;

// --- Pipeline Stages ---

/// The states a pipeline run moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    AwaitingInput,
    /// Download and text extraction.
    Extracting,
    Summarizing,
    GeneratingQuestions,
    Done,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::AwaitingInput => "awaiting input",
            PipelineStage::Extracting => "extracting",
            PipelineStage::Summarizing => "summarizing",
            PipelineStage::GeneratingQuestions => "generating questions",
            PipelineStage::Done => "done",
        };
        f.write_str(name)
    }
}

// --- Error Definitions ---

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Download failed: invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Download failed for '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Download failed for '{url}': received status {status}")]
    Download { url: String, status: u16 },
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),
    #[error("Summarization failed: {source}{}", context_hint(.source))]
    Summarization {
        #[source]
        source: PromptError,
    },
    #[error("Pipeline is misconfigured: {0}")]
    Config(String),
}

impl PipelineError {
    /// The stage in which the run stopped.
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::InvalidUrl { .. }
            | PipelineError::Transport { .. }
            | PipelineError::Download { .. }
            | PipelineError::Extraction(_) => PipelineStage::Extracting,
            PipelineError::Summarization { .. } => PipelineStage::Summarizing,
            PipelineError::Config(_) => PipelineStage::AwaitingInput,
        }
    }
}

fn context_hint(error: &PromptError) -> String {
    if error.is_context_length() {
        format!(" (hint: {CONTEXT_LENGTH_HINT})")
    } else {
        String::new()
    }
}
