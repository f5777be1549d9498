/// Gist - chunk-and-consolidate text summarization on top of an LLM.
///
/// Long input is split into sentence-aligned chunks, every chunk is
/// summarized on its own, and the per-chunk summaries are merged into one
/// final summary of the requested tone and length.
///
/// # Architecture
///
/// - `core` holds the chunker, request options and configuration
/// - `ai` holds the generation capability trait, prompts and the `OpenAI` client
/// - `worker` runs the per-chunk summaries, consolidation and orchestration
///
/// # Example
///
/// ```no_run
/// use gist::ai::LlmClient;
/// use gist::core::{AppConfig, SummaryOptions, Tone};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     gist::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let client = LlmClient::from_config(&config);
///     let options = SummaryOptions {
///         tone: Tone::Professional,
///         length: 4,
///         ..SummaryOptions::default()
///     };
///
///     let text = std::fs::read_to_string("article.txt")?;
///     let summary = gist::worker::summarize(&text, &options, &client, |p| {
///         eprintln!("{}% done", p.percent());
///     })
///     .await?;
///
///     println!("{summary}");
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod worker;

pub use errors::{GenerationError, Stage, SummarizeError};

/// Configure structured JSON logging.
///
/// The level filter is read from `RUST_LOG` and defaults to `info`. Calling
/// this more than once keeps the first subscriber.
///
/// # Example
///
/// ```
/// gist::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
