// Paraphrase Oracle Service
// Single Gemini rewrite call per request; every failure degrades to identity
// so the pipeline never aborts on this stage.

use crate::models::EducationLevel;
use reqwest::Client;
use std::env;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

const GEMINI_DEFAULT_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-pro";
const ORACLE_TIMEOUT_SECS: u64 = 60;

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },
    #[error("Missing content in response")]
    MissingContent,
    #[error("JSON parse error: {0}")]
    JsonError(String),
    #[error("API key not configured")]
    MissingApiKey,
}

pub struct OracleClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl Default for OracleClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OracleClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(ORACLE_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        let base_url = env::var("REHUMANIZER_GEMINI_URL")
            .or_else(|_| env::var("GEMINI_API_URL"))
            .unwrap_or_else(|_| GEMINI_DEFAULT_URL.to_string());
        let model =
            env::var("REHUMANIZER_GEMINI_MODEL").unwrap_or_else(|_| GEMINI_DEFAULT_MODEL.to_string());

        Self {
            client,
            base_url,
            model,
            api_key: get_api_key(),
        }
    }

    /// Client pointed at a custom endpoint with no API key; used by tests
    /// and local proxies.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(ORACLE_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
            model: GEMINI_DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// One paraphrase exchange with the oracle. Plain-text instruction in,
    /// plain-text rewrite out; no retry.
    pub async fn paraphrase(
        &self,
        text: &str,
        education_level: EducationLevel,
    ) -> Result<String, OracleError> {
        let api_key = self.api_key.as_deref().ok_or(OracleError::MissingApiKey)?;
        let prompt = build_paraphrase_prompt(text, education_level);

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request = serde_json::json!({
            "contents": [{"parts": [{"text": prompt}]}]
        });

        let start = Instant::now();

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as i64;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        // Gemini response format: {"candidates":[{"content":{"parts":[{"text":"..."}]}}]}
        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| OracleError::JsonError(e.to_string()))?;

        let content = data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or(OracleError::MissingContent)?;

        info!(
            "[ORACLE] paraphrase ok model={} latency_ms={} chars_in={} chars_out={}",
            self.model,
            latency_ms,
            text.len(),
            content.len()
        );

        Ok(content)
    }

    /// Fallback wrapper around [`paraphrase`](Self::paraphrase): any failure
    /// is logged and the input text is returned unchanged.
    pub async fn paraphrase_or_identity(
        &self,
        text: &str,
        education_level: EducationLevel,
    ) -> String {
        match self.paraphrase(text, education_level).await {
            Ok(rewritten) => rewritten,
            Err(e) => {
                warn!("[ORACLE] paraphrase failed, passing text through: {}", e);
                text.to_string()
            }
        }
    }
}

fn build_paraphrase_prompt(text: &str, education_level: EducationLevel) -> String {
    let level = education_level.as_str();
    format!(
        "Rewrite the following text to sound more human and natural while preserving the exact meaning.\n\
         Target education level: {level}\n\n\
         Requirements:\n\
         - Make it sound like a human wrote it\n\
         - Add natural flow and variation\n\
         - Keep the same core message\n\
         - Use {level}-level vocabulary\n\
         - Add some personality and natural imperfections\n\n\
         Text: {text}\n\n\
         Rewritten version:"
    )
}

/// Get the oracle API key from environment variables.
pub fn get_api_key() -> Option<String> {
    for key in ["REHUMANIZER_GEMINI_API_KEY", "GEMINI_API_KEY"] {
        if let Ok(val) = env::var(key) {
            let v = val.trim();
            if !v.is_empty() {
                return Some(v.to_string());
            }
        }
    }
    None
}
