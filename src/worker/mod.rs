//! Summarization pipeline: per-chunk summaries, consolidation, orchestration

pub mod consolidate;
pub mod pipeline;
pub mod summarize;

// Re-export the entry points for convenience
pub use consolidate::consolidate;
pub use pipeline::{plan_chunks, summarize};
pub use summarize::summarize_chunk;
