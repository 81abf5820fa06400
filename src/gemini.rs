use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{info, error};

use crate::config::mask_secret;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("no API key supplied")] MissingKey,
    #[error("HTTP error: {0}")] Http(String),
    #[error("API returned status={status} body={body}")] Status { status: StatusCode, body: String },
    #[error("parse error: {0}")] Parse(String),
    #[error("no text content in response")] EmptyResponse,
}

/// Anything that can turn a prompt into raw story text.
#[async_trait]
pub trait StoryGenerator: Send + Sync {
    async fn generate_story(&self, api_key: &str, prompt: &str) -> Result<String, GeminiError>;
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl StoryGenerator for GeminiClient {
    async fn generate_story(&self, api_key: &str, prompt: &str) -> Result<String, GeminiError> {
        if api_key.trim().is_empty() {
            return Err(GeminiError::MissingKey);
        }

        let url = self.endpoint();
        info!("🔗 Making request to: {} (key {})", url, mask_secret(api_key));

        let payload = json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }]
        });

        let response = self.client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&payload)
            .send()
            .await
            // reqwest errors can echo the URL, which carries the key
            .map_err(|e| GeminiError::Http(e.without_url().to_string()))?;

        let status = response.status();
        info!("📥 Response status: {}", status);

        let response_text = response.text().await
            .map_err(|e| GeminiError::Http(e.without_url().to_string()))?;

        if !status.is_success() {
            error!("❌ Gemini API story generation failed with status {}: {}", status, response_text);
            return Err(GeminiError::Status { status, body: response_text });
        }

        let parsed: GeminiResponse = serde_json::from_str(&response_text)
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        let text = extract_text(&parsed).ok_or(GeminiError::EmptyResponse)?;
        info!("✅ Story text received ({} chars)", text.len());
        Ok(text)
    }
}

// --- Response Parsing Helpers ---

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate { #[serde(default)] content: Content }

#[derive(Debug, Deserialize, Default)]
struct Content { #[serde(default)] parts: Vec<Part> }

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    #[allow(dead_code)]
    Other(serde_json::Value),
}

/// All text parts of the first candidate, concatenated in order.
fn extract_text(resp: &GeminiResponse) -> Option<String> {
    let text: String = resp.candidates.first()?.content.parts.iter()
        .filter_map(|p| match p {
            Part::Text { text } => Some(text.as_str()),
            Part::Other(_) => None,
        })
        .collect();
    if text.trim().is_empty() { None } else { Some(text) }
}
