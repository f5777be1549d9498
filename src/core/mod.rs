pub mod chunker;
pub mod config;
pub mod models;

pub use chunker::{chunk_bytes, chunk_text};
pub use config::{AppConfig, SummaryOptions};
pub use models::{Chunk, Progress, Tone};
