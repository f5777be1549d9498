use crate::core::models::Tone;

/// Prompt asking for a summary of one chunk.
///
/// Bullet prompts ignore `tone` and `quick`; prose prompts ask for "a brief"
/// summary in quick mode and "a detailed" one otherwise.
#[must_use]
pub fn build_chunk_prompt(
    chunk: &str,
    tone: Tone,
    sentences: usize,
    bullet: bool,
    quick: bool,
) -> String {
    if bullet {
        return format!(
            "\nYou are an expert summarizer. Summarize the following text into {sentences} concise bullet points that capture the key ideas.\n\
             Text:\n---\n{chunk}\n---\n"
        );
    }

    let length_desc = if quick { "a brief" } else { "a detailed" };
    format!(
        "\nYou are an expert summarizer. Provide {length_desc} summary in a {tone} tone.\n\
         The summary should be {sentences} sentences long and capture the main points.\n\
         Text:\n---\n{chunk}\n---\n"
    )
}

/// Prompt asking the model to merge per-chunk summaries.
///
/// Always phrased in sentences, including for [`Tone::BulletPoints`].
#[must_use]
pub fn build_consolidation_prompt(combined: &str, tone: Tone, summary_length: usize) -> String {
    format!(
        "\nYou are an expert summarizer. Combine the following chunk summaries into one coherent summary.\n\
         The final summary should be in a {tone} tone and be exactly {summary_length} sentences long.\n\
         Chunk summaries:\n---\n{combined}\n---\n"
    )
}

/// Join intermediate summaries, in order, separated by a blank line.
#[must_use]
pub fn combine_summaries<S: AsRef<str>>(summaries: &[S]) -> String {
    summaries
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n\n")
}
