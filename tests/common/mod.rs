#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use gist::GenerationError;
use gist::ai::{GenerationCapability, GenerationResponse};

/// Fake model that records every prompt and answers from a script.
pub struct DummyModel {
    response_text: Option<String>,
    fail_on_call: Option<usize>,
    prompts: Mutex<Vec<String>>,
}

impl DummyModel {
    /// Answers every call with `text`.
    pub fn replying(text: &str) -> Self {
        Self {
            response_text: Some(text.to_string()),
            fail_on_call: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Answers call `n` (1-based) with `"summary n"`.
    pub fn numbered() -> Self {
        Self {
            response_text: None,
            fail_on_call: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call.
    pub fn failing() -> Self {
        Self::numbered().fail_on(1)
    }

    /// Fails from call `n` (1-based) onwards.
    pub fn fail_on(mut self, n: usize) -> Self {
        self.fail_on_call = Some(n);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerationCapability for DummyModel {
    async fn generate(&self, prompt: &str) -> Result<GenerationResponse, GenerationError> {
        let call = {
            let mut prompts = self.prompts.lock().unwrap();
            prompts.push(prompt.to_string());
            prompts.len()
        };

        if self.fail_on_call.is_some_and(|n| call >= n) {
            return Err(GenerationError::ApiError("api error".to_string()));
        }

        let text = self
            .response_text
            .clone()
            .unwrap_or_else(|| format!("summary {call}"));
        Ok(GenerationResponse::from_text(text))
    }
}

/// Fake model whose responses carry no text field.
pub struct RawOnlyModel;

#[async_trait]
impl GenerationCapability for RawOnlyModel {
    async fn generate(&self, _prompt: &str) -> Result<GenerationResponse, GenerationError> {
        Ok(GenerationResponse::from_raw(serde_json::json!({
            "id": "resp_123",
            "status": "completed"
        })))
    }
}
