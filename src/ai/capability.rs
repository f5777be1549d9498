//! Text-generation capability seam
//!
//! The pipeline only needs "generate content from a prompt". Production code
//! plugs in [`LlmClient`](super::LlmClient); tests plug in fakes.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::GenerationError;

/// Result object returned by a generation capability.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResponse {
    /// Extracted output text, when the payload carried one.
    pub text: Option<String>,
    /// Payload as received.
    pub raw: Value,
}

impl GenerationResponse {
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            raw: Value::String(text.clone()),
            text: Some(text),
        }
    }

    #[must_use]
    pub const fn from_raw(raw: Value) -> Self {
        Self { text: None, raw }
    }

    /// The text field, or the payload's string form when there is none.
    #[must_use]
    pub fn into_text(self) -> String {
        match self.text {
            Some(text) => text,
            None => match self.raw {
                Value::String(s) => s,
                other => other.to_string(),
            },
        }
    }
}

#[async_trait]
pub trait GenerationCapability: Send + Sync {
    /// Issue one generation request for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<GenerationResponse, GenerationError>;
}
