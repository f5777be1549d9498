// Command-line front end for the summarization pipeline

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing::error;

use gist::SummarizeError;
use gist::ai::LlmClient;
use gist::core::config::{DEFAULT_CHUNK_CHARS, DEFAULT_MAX_CHUNKS, DEFAULT_SUMMARY_LENGTH};
use gist::core::{AppConfig, SummaryOptions, Tone};

#[derive(Debug, Parser)]
#[command(name = "gist", version, about = "Summarize text of any length with an LLM")]
struct Cli {
    /// File to summarize; reads stdin when omitted
    input: Option<PathBuf>,

    /// Formal, Casual, Professional or "Bullet Points"
    #[arg(short, long, default_value_t = Tone::Casual)]
    tone: Tone,

    /// Sentences (or bullet points) in the final summary
    #[arg(short, long, default_value_t = DEFAULT_SUMMARY_LENGTH)]
    length: usize,

    /// Approximate characters per chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_CHARS)]
    chunk_size: usize,

    /// Send the whole text as a single chunk
    #[arg(long)]
    no_chunking: bool,

    /// Ask for brief rather than detailed chunk summaries
    #[arg(short, long)]
    quick: bool,

    /// Refuse input that splits into more chunks than this (0 = no limit)
    #[arg(long, default_value_t = DEFAULT_MAX_CHUNKS)]
    max_chunks: usize,

    /// Emit JSON logs on stderr
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn options(&self) -> SummaryOptions {
        SummaryOptions {
            tone: self.tone,
            length: self.length.max(1),
            chunking_enabled: !self.no_chunking,
            approx_chars: self.chunk_size,
            quick_mode: self.quick,
            max_chunks: self.max_chunks,
        }
    }
}

async fn read_input(path: Option<&PathBuf>) -> Result<String> {
    let bytes = match path {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("failed to read stdin")?;
            buf
        }
    };

    String::from_utf8(bytes).map_err(|e| {
        anyhow::Error::from(SummarizeError::InvalidInput(format!(
            "text must be valid UTF-8: {e}"
        )))
    })
}

async fn run(cli: Cli) -> Result<String> {
    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("missing configuration: {e}"))?;
    let client = LlmClient::from_config(&config);
    let text = read_input(cli.input.as_ref()).await?;

    let summary = gist::worker::summarize(&text, &cli.options(), &client, |progress| {
        eprintln!(
            "[{:>3}%] {}/{} steps",
            progress.percent(),
            progress.completed,
            progress.total
        );
    })
    .await?;

    Ok(summary)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.json_logs {
        gist::setup_logging();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::stderr)
            .init();
    }

    match run(cli).await {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("An error occurred: {e}");
            ExitCode::FAILURE
        }
    }
}
