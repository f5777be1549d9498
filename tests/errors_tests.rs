use std::error::Error;

use gist::{GenerationError, Stage, SummarizeError};

#[test]
fn test_errors_implement_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    assert_error(&SummarizeError::InvalidInput("test error".to_string()));
    assert_error(&GenerationError::HttpError("test error".to_string()));
}

#[test]
fn test_summarize_error_display_carries_stage_prefix() {
    let error = SummarizeError::ChunkSummarization("quota exceeded".to_string());
    assert_eq!(format!("{error}"), "summarization failed: quota exceeded");

    let error = SummarizeError::Consolidation("timeout".to_string());
    assert_eq!(format!("{error}"), "final consolidation failed: timeout");

    let error = SummarizeError::InvalidInput("nothing to summarize".to_string());
    assert_eq!(format!("{error}"), "invalid input: nothing to summarize");
}

#[test]
fn test_summarize_error_stage_and_cause() {
    let error = SummarizeError::Consolidation("boom".to_string());
    assert_eq!(error.stage(), Stage::Consolidation);
    assert_eq!(error.cause(), "boom");

    let error = SummarizeError::ChunkSummarization(String::new());
    assert_eq!(error.stage(), Stage::ChunkSummarization);
    assert!(!error.to_string().is_empty());
}

#[test]
fn test_generation_error_display() {
    let error = GenerationError::ApiError("Model unavailable".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to access OpenAI API: Model unavailable"
    );

    let error = GenerationError::HttpError("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );

    // Verifies the reqwest conversion exists without making a request.
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> GenerationError {
        GenerationError::from(err)
    }
}
