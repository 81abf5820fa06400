use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const DEFAULT_CHILD_NAME: &str = "Hero";
pub const DEFAULT_TOPIC: &str = "Magic adventure";

/// One form submission. Every field may be omitted.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct StoryRequest {
    #[serde(default)]
    pub child_name: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub language: Option<String>, // selector label, e.g. "English 🇺🇸"
    #[serde(default)]
    pub api_key: String,
}

impl StoryRequest {
    pub fn effective_name(&self) -> &str {
        effective(&self.child_name, DEFAULT_CHILD_NAME)
    }

    pub fn effective_topic(&self) -> &str {
        effective(&self.topic, DEFAULT_TOPIC)
    }
}

fn effective<'a>(input: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = input.trim();
    if trimmed.is_empty() { fallback } else { trimmed }
}

/// Model output split at the image prompt delimiter.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GeneratedStory {
    pub story_text: String,
    /// Empty when the model did not emit the delimiter.
    pub image_prompt: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StoryResponse {
    pub request_id: Uuid,
    /// The child name exactly as entered, used as the story heading.
    pub heading: String,
    pub story: String,
    pub image_prompt: Option<String>,
    pub image_url: Option<String>,
    pub success: String,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: String,
}
