use tracing::{debug, error};

use crate::ai::GenerationCapability;
use crate::ai::prompt_builder::{build_consolidation_prompt, combine_summaries};
use crate::core::models::Tone;
use crate::errors::SummarizeError;

/// Merge intermediate summaries into the final summary with one call.
///
/// Summaries are combined in the order given. An empty slice is not
/// rejected; the model receives an empty block.
///
/// # Errors
///
/// Any capability failure is returned as [`SummarizeError::Consolidation`].
pub async fn consolidate<C, S>(
    summaries: &[S],
    capability: &C,
    tone: Tone,
    summary_length: usize,
) -> Result<String, SummarizeError>
where
    C: GenerationCapability + ?Sized,
    S: AsRef<str>,
{
    let combined = combine_summaries(summaries);
    let prompt = build_consolidation_prompt(&combined, tone, summary_length);
    debug!(
        "Consolidating {} summaries ({} chars combined)",
        summaries.len(),
        combined.len()
    );

    capability
        .generate(&prompt)
        .await
        .map(|resp| resp.into_text())
        .map_err(|e| {
            error!("Final consolidation failed: {}", e);
            SummarizeError::Consolidation(e.to_string())
        })
}
