//! LLM (`OpenAI`) API client module
//!
//! Production [`GenerationCapability`] backed by the `OpenAI` Responses API.

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::capability::{GenerationCapability, GenerationResponse};
use crate::core::config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::errors::GenerationError;

const MAX_CONTEXT_TOKENS: usize = 400_000;
const MAX_OUTPUT_TOKENS: usize = 100_000;
const TOKEN_BUFFER: usize = 250;
const MIN_OUTPUT_TOKENS: usize = 500;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Output budget left after the prompt, or `None` when it is below the
/// minimum worth requesting.
#[must_use]
pub fn output_token_budget(estimated_input_tokens: usize) -> Option<usize> {
    // Saturating math avoids underflow when input exceeds context
    let max_output_tokens = MAX_CONTEXT_TOKENS
        .saturating_sub(estimated_input_tokens)
        .saturating_sub(TOKEN_BUFFER)
        .min(MAX_OUTPUT_TOKENS);

    (max_output_tokens >= MIN_OUTPUT_TOKENS).then_some(max_output_tokens)
}

/// LLM API client for generating summaries
pub struct LlmClient {
    api_key: String,
    org_id: Option<String>,
    model_name: String,
    base_url: String,
    timeout: Duration,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, org_id: Option<String>, model_name: String) -> Self {
        Self {
            api_key,
            org_id,
            model_name,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.openai_api_key.clone(),
            config.openai_org_id.clone(),
            config.model_name().to_string(),
        )
        .with_base_url(config.base_url())
        .with_timeout(Duration::from_secs(config.request_timeout_secs))
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Wrap a plain-text prompt as a single user message.
    #[must_use]
    pub fn build_prompt(&self, prompt: &str) -> Vec<ChatCompletionMessage> {
        vec![ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(prompt.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }]
    }

    fn headers(&self) -> Result<reqwest::header::HeaderMap, GenerationError> {
        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| GenerationError::ConfigError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        let content_type_value = "application/json"
            .parse()
            .map_err(|e| GenerationError::ConfigError(format!("Invalid Content-Type header: {e}")))?;
        headers.insert("Content-Type", content_type_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                GenerationError::ConfigError(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        Ok(headers)
    }

    /// # Errors
    ///
    /// Returns an error if the prompt leaves no room for output, the HTTP
    /// request fails, or the response body is not JSON.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<GenerationResponse, GenerationError> {
        #[cfg(feature = "debug-logs")]
        debug!("Using prompt:\n{:?}", prompt);

        let estimated_input_tokens = prompt
            .iter()
            .map(|msg| estimate_tokens(&format!("{:?}", msg.content)))
            .sum::<usize>();

        debug!("Estimated input tokens: {}", estimated_input_tokens);

        let Some(max_output_tokens) = output_token_budget(estimated_input_tokens) else {
            return Err(GenerationError::InputTooLarge(format!(
                "estimated {estimated_input_tokens} input tokens leaves fewer than {MIN_OUTPUT_TOKENS} output tokens"
            )));
        };

        let input_messages = build_responses_input_from_prompt(&prompt);

        let request_body = json!({
            "model": self.model_name,
            "input": input_messages,
            "max_output_tokens": max_output_tokens
        });

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                GenerationError::HttpError(format!("Failed to build OpenAI HTTP client: {e}"))
            })?;

        let url = format!("{}/responses", self.base_url);
        info!(model = %self.model_name, "Sending generation request");

        let response = client
            .post(&url)
            .headers(self.headers()?)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GenerationError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            warn!("OpenAI API returned status {}", status);
            return Err(GenerationError::ApiError(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            GenerationError::ApiError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        let text = extract_output_text(&response_json);
        if text.is_none() {
            warn!("OpenAI response carried no output text");
        }

        Ok(GenerationResponse {
            text,
            raw: response_json,
        })
    }
}

#[async_trait]
impl GenerationCapability for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<GenerationResponse, GenerationError> {
        self.generate_summary(self.build_prompt(prompt)).await
    }
}

/// Pull the output text out of a Responses API payload.
///
/// Prefers the top-level `output_text` convenience field, then joins every
/// `output_text` content part found under `output[]`.
#[must_use]
pub fn extract_output_text(response_json: &Value) -> Option<String> {
    if let Some(text) = response_json.get("output_text").and_then(|v| v.as_str()) {
        return Some(text.to_string());
    }

    let mut collected: Vec<String> = Vec::new();
    if let Some(items) = response_json.get("output").and_then(|o| o.as_array()) {
        for item in items {
            let Some(parts) = item.get("content").and_then(|c| c.as_array()) else {
                continue;
            };
            for p in parts {
                let is_output_text = p
                    .get("type")
                    .and_then(|t| t.as_str())
                    .is_some_and(|t| t == "output_text");
                if !is_output_text {
                    continue;
                }
                if let Some(s) = p.get("text").and_then(|t| t.as_str()) {
                    collected.push(s.to_string());
                } else if let Some(s) = p
                    .get("text")
                    .and_then(|t| t.get("value"))
                    .and_then(|v| v.as_str())
                {
                    collected.push(s.to_string());
                }
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n"))
    }
}

/// Build Responses API input payload from a chat-style prompt.
/// - Filters out assistant messages (Responses treats assistant content as output)
/// - Emits typed `input_text` parts
pub(crate) fn build_responses_input_from_prompt(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter(|m| !matches!(m.role, MessageRole::assistant))
        .map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                MessageRole::assistant => "assistant",
            };

            let parts: Vec<Value> = match &m.content {
                Content::Text(t) => vec![json!({
                    "type": "input_text",
                    "text": t
                })],
                Content::ImageUrl(_) => Vec::new(),
            };

            json!({
                "role": role_str,
                "content": parts
            })
        })
        .collect()
}
