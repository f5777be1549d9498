use tracing::{debug, error};

use crate::ai::GenerationCapability;
use crate::ai::prompt_builder::build_chunk_prompt;
use crate::core::models::Tone;
use crate::errors::SummarizeError;

/// Summarize a single chunk with exactly one generation call.
///
/// # Errors
///
/// Any capability failure is returned as
/// [`SummarizeError::ChunkSummarization`].
pub async fn summarize_chunk<C>(
    chunk: &str,
    capability: &C,
    tone: Tone,
    sentences: usize,
    bullet: bool,
    quick: bool,
) -> Result<String, SummarizeError>
where
    C: GenerationCapability + ?Sized,
{
    let prompt = build_chunk_prompt(chunk, tone, sentences, bullet, quick);
    debug!(
        "Chunk prompt built ({} chars, tone {}, {} sentences)",
        prompt.len(),
        tone,
        sentences
    );

    match capability.generate(&prompt).await {
        Ok(resp) => Ok(resp.into_text()),
        Err(e) => {
            error!("Chunk summarization failed: {}", e);
            Err(SummarizeError::ChunkSummarization(e.to_string()))
        }
    }
}
