//! Chunk-and-consolidate orchestration
//!
//! Chunks are summarized strictly one after another, in order, and the
//! ordered summaries are then consolidated once. The first failure aborts
//! the request; no partial summary is returned.

use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use super::consolidate::consolidate;
use super::summarize::summarize_chunk;
use crate::ai::GenerationCapability;
use crate::core::chunker::{char_len, chunk_text};
use crate::core::config::SummaryOptions;
use crate::core::models::{Chunk, Progress};
use crate::errors::SummarizeError;

/// Decide how `text` is split before any model call is made.
///
/// # Errors
///
/// Returns [`SummarizeError::InvalidInput`] for blank input, a zero chunk
/// size, or input that would exceed `options.max_chunks`.
pub fn plan_chunks(text: &str, options: &SummaryOptions) -> Result<Vec<Chunk>, SummarizeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SummarizeError::InvalidInput(
            "nothing to summarize".to_string(),
        ));
    }

    if !options.chunking_enabled || char_len(trimmed) <= options.approx_chars {
        return Ok(vec![Chunk {
            index: 0,
            text: trimmed.to_string(),
        }]);
    }

    let chunks = chunk_text(trimmed, options.approx_chars)?;
    // A cap of zero means unlimited.
    if options.max_chunks > 0 && chunks.len() > options.max_chunks {
        return Err(SummarizeError::InvalidInput(format!(
            "input splits into {} chunks, more than the limit of {}",
            chunks.len(),
            options.max_chunks
        )));
    }
    Ok(chunks)
}

/// Run the full pipeline and return the final summary.
///
/// `on_progress` is called after every chunk and after consolidation; the
/// consolidation step counts as one unit of `total`.
///
/// # Errors
///
/// Propagates the first [`SummarizeError`] from planning, any chunk, or
/// consolidation.
pub async fn summarize<C, F>(
    text: &str,
    options: &SummaryOptions,
    capability: &C,
    on_progress: F,
) -> Result<String, SummarizeError>
where
    C: GenerationCapability + ?Sized,
    F: FnMut(Progress),
{
    let correlation_id = Uuid::new_v4();
    let span = info_span!("summarize", %correlation_id, tone = %options.tone);
    run(text, options, capability, on_progress)
        .instrument(span)
        .await
}

async fn run<C, F>(
    text: &str,
    options: &SummaryOptions,
    capability: &C,
    mut on_progress: F,
) -> Result<String, SummarizeError>
where
    C: GenerationCapability + ?Sized,
    F: FnMut(Progress),
{
    let chunks = plan_chunks(text, options)?;
    let sentences = options.sentence_count();
    let bullet = options.tone.is_bullet();
    let total = chunks.len() + 1;

    info!(
        "Summarizing {} chars in {} chunk(s)",
        char_len(text),
        chunks.len()
    );

    let mut summaries: Vec<String> = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let summary = summarize_chunk(
            chunk.as_str(),
            capability,
            options.tone,
            sentences,
            bullet,
            options.quick_mode,
        )
        .await?;
        summaries.push(summary);

        info!("Chunk {}/{} summarized", chunk.index + 1, chunks.len());
        on_progress(Progress {
            completed: summaries.len(),
            total,
        });
    }

    let final_summary = consolidate(&summaries, capability, options.tone, sentences).await?;
    on_progress(Progress {
        completed: total,
        total,
    });
    info!("Final summary generated ({} chars)", final_summary.len());

    Ok(final_summary)
}
