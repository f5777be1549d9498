//! Sentence-aware text chunking
//!
//! Splits input into pieces of at most `approx_chars` characters, cutting
//! right after the last period inside the budget whenever one exists.
//! Budgets and positions are counted in `char`s, not bytes.

use tracing::debug;

use super::models::Chunk;
use crate::errors::SummarizeError;

/// Split `text` into ordered, trimmed, non-empty chunks.
///
/// Whitespace-only input yields an empty vector.
///
/// # Errors
///
/// Returns [`SummarizeError::InvalidInput`] when `approx_chars` is zero.
pub fn chunk_text(text: &str, approx_chars: usize) -> Result<Vec<Chunk>, SummarizeError> {
    if approx_chars == 0 {
        return Err(SummarizeError::InvalidInput(
            "chunk size must be at least 1 character".to_string(),
        ));
    }

    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    // Byte offset of every char, plus a sentinel for the end of the text.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let bytes = text.as_bytes();
    let length = offsets.len() - 1;

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < length {
        let mut end = (start + approx_chars).min(length);
        if end < length
            && let Some(period) = (start + 1..end).rev().find(|&i| bytes[offsets[i]] == b'.')
        {
            end = period + 1;
        }

        let piece = text[offsets[start]..offsets[end]].trim();
        if !piece.is_empty() {
            chunks.push(Chunk {
                index: chunks.len(),
                text: piece.to_string(),
            });
        }
        start = end;
    }

    debug!(
        "Split {} chars into {} chunks (budget {})",
        length,
        chunks.len(),
        approx_chars
    );

    Ok(chunks)
}

/// Like [`chunk_text`], for input that has not been decoded yet.
///
/// # Errors
///
/// Returns [`SummarizeError::InvalidInput`] when `bytes` is not UTF-8 text or
/// `approx_chars` is zero.
pub fn chunk_bytes(bytes: &[u8], approx_chars: usize) -> Result<Vec<Chunk>, SummarizeError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| SummarizeError::InvalidInput(format!("text must be valid UTF-8: {e}")))?;
    chunk_text(text, approx_chars)
}

#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
