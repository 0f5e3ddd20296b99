//! # quizgen: study questions from PDF documents
//!
//! Entry point for the `quizgen` command-line interface.

mod config;
mod setup;

use self::config::{get_config, AppConfig};
use self::setup::{build_pipeline, generate_from_text};
use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use quizgen::PipelineResult;
use quizgen_pdf::SummaryResult;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a YAML configuration file (defaults to ./quizgen.yml when present)
    #[arg(long, global = true)]
    config: Option<String>,
    /// Override the model name of every configured provider
    #[arg(long, global = true)]
    model: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download a PDF, summarize it and generate questions from the summary
    Run(RunArgs),
    /// Download or read a PDF and print its summary
    Summarize(SummarizeArgs),
    /// Generate questions from text that is already summarized
    Questions(QuestionsArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// The URL of the PDF document
    url: String,
    /// Maximum number of questions to return
    #[arg(long)]
    max_questions: Option<usize>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["url", "file"])))]
struct SummarizeArgs {
    /// The URL of the PDF document
    url: Option<String>,
    /// A local PDF file to summarize instead of downloading one
    #[arg(long)]
    file: Option<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "text"])))]
struct QuestionsArgs {
    /// A text file holding the summarized material
    #[arg(long)]
    file: Option<PathBuf>,
    /// The summarized material itself
    #[arg(long)]
    text: Option<String>,
    /// Maximum number of questions to return
    #[arg(long)]
    max_questions: Option<usize>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    let mut config = get_config(cli.config.as_deref())?;
    if let Some(model) = &cli.model {
        config.override_model(model);
    }
    debug!(
        max_questions = config.max_questions,
        providers = ?config.providers.keys().collect::<Vec<_>>(),
        "Configuration loaded"
    );

    match &cli.command {
        Commands::Run(args) => handle_run(&config, args).await,
        Commands::Summarize(args) => handle_summarize(&config, args).await,
        Commands::Questions(args) => handle_questions(&config, args).await,
    }
}

// --- Command Handlers ---

async fn handle_run(config: &AppConfig, args: &RunArgs) -> Result<ExitCode> {
    let pipeline = build_pipeline(config, args.max_questions)?;
    info!("Generating questions for '{}'", args.url);
    let result = pipeline.generate_questions_from_pdf_url(&args.url).await?;
    print_questions(&result, args.json)
}

async fn handle_summarize(config: &AppConfig, args: &SummarizeArgs) -> Result<ExitCode> {
    let pipeline = build_pipeline(config, None)?;
    let summary = match (&args.url, &args.file) {
        (Some(url), _) => pipeline.extract_and_summarize(url).await?,
        (None, Some(path)) => {
            let pdf_data = std::fs::read(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            pipeline
                .summarize_document(&pdf_data, &path.display().to_string())
                .await?
        }
        (None, None) => anyhow::bail!("either a URL or --file is required"),
    };
    print_summary(&summary, args.json)?;
    Ok(ExitCode::SUCCESS)
}

async fn handle_questions(config: &AppConfig, args: &QuestionsArgs) -> Result<ExitCode> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        (None, None) => anyhow::bail!("either --text or --file is required"),
    };
    let result = generate_from_text(config, &text, args.max_questions).await?;
    print_questions(&result, args.json)
}

// --- Output ---

fn print_questions(result: &PipelineResult, as_json: bool) -> Result<ExitCode> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else if result.success {
        for (index, question) in result.questions.iter().enumerate() {
            println!("{}. {}", index + 1, question);
        }
    } else {
        eprintln!(
            "No questions generated: {}",
            result.failure_reason.as_deref().unwrap_or("unknown reason")
        );
    }

    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_summary(summary: &SummaryResult, as_json: bool) -> Result<()> {
    if as_json {
        let body = json!({
            "source": summary.source,
            "summary": summary.summary,
            "page_count": summary.page_count,
            "extracted_chars": summary.extracted_chars,
            "content_hash": summary.content_hash,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{}", summary.summary);
    }
    Ok(())
}
