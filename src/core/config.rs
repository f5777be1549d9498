use std::env;

use super::models::Tone;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub const DEFAULT_CHUNK_CHARS: usize = 4000;
pub const DEFAULT_SUMMARY_LENGTH: usize = 3;
pub const DEFAULT_MAX_CHUNKS: usize = 200;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: Option<String>,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let request_timeout_secs = match env::var("OPENAI_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("OPENAI_TIMEOUT_SECS: {}", e))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY")
                .map_err(|e| format!("OPENAI_API_KEY: {}", e))?,
            openai_org_id: env::var("OPENAI_ORG_ID").ok(),
            openai_model: env::var("OPENAI_MODEL").ok(),
            openai_base_url: env::var("OPENAI_BASE_URL").ok(),
            request_timeout_secs,
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.openai_base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }
}

/// Per-request settings, built once by the caller and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOptions {
    pub tone: Tone,
    /// Target sentence count, or bullet count for [`Tone::BulletPoints`].
    pub length: usize,
    pub chunking_enabled: bool,
    /// Soft upper bound on chunk size, in characters.
    pub approx_chars: usize,
    pub quick_mode: bool,
    pub max_chunks: usize,
}

impl SummaryOptions {
    /// Length clamped to at least one sentence.
    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.length.max(1)
    }
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            tone: Tone::default(),
            length: DEFAULT_SUMMARY_LENGTH,
            chunking_enabled: true,
            approx_chars: DEFAULT_CHUNK_CHARS,
            quick_mode: false,
            max_chunks: DEFAULT_MAX_CHUNKS,
        }
    }
}
