use openai_api_rs::v1::error::APIError;
use thiserror::Error;

/// Failures raised by a generation capability itself.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Failed to access OpenAI API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Input too large for the model context: {0}")]
    InputTooLarge(String),

    #[error("Invalid client configuration: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(error: reqwest::Error) -> Self {
        GenerationError::HttpError(error.to_string())
    }
}

impl From<APIError> for GenerationError {
    fn from(error: APIError) -> Self {
        GenerationError::ApiError(format!("OpenAI API error: {}", error))
    }
}

/// Pipeline stage a [`SummarizeError`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    InvalidInput,
    ChunkSummarization,
    Consolidation,
}

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("summarization failed: {0}")]
    ChunkSummarization(String),

    #[error("final consolidation failed: {0}")]
    Consolidation(String),
}

impl SummarizeError {
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            SummarizeError::InvalidInput(_) => Stage::InvalidInput,
            SummarizeError::ChunkSummarization(_) => Stage::ChunkSummarization,
            SummarizeError::Consolidation(_) => Stage::Consolidation,
        }
    }

    /// The underlying cause, without the stage prefix.
    #[must_use]
    pub fn cause(&self) -> &str {
        match self {
            SummarizeError::InvalidInput(msg)
            | SummarizeError::ChunkSummarization(msg)
            | SummarizeError::Consolidation(msg) => msg,
        }
    }
}
