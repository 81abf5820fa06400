use chrono::Utc;
use thiserror::Error;
use tracing::{info, error};
use uuid::Uuid;

use crate::{
    gemini::{GeminiError, StoryGenerator},
    i18n::{Language, GENERIC_ERROR},
    image::ImageUrlBuilder,
    models::{StoryRequest, StoryResponse},
    prompt::{build_story_prompt, split_story_response},
};

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("unknown language label: {0}")]
    UnknownLanguage(String),
    #[error("missing API key")]
    MissingKey(Language),
    #[error("story generation failed: {0}")]
    Generation(#[source] GeminiError),
}

impl SubmissionError {
    /// What the user gets to read. Generation failures are never told apart.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::UnknownLanguage(label) => format!("Unsupported language: {}", label),
            SubmissionError::MissingKey(lang) => lang.strings().error_key.to_string(),
            SubmissionError::Generation(_) => GENERIC_ERROR.to_string(),
        }
    }
}

/// Runs one form submission end to end: at most one generation call and at
/// most one image URL.
pub async fn run_submission(
    generator: &dyn StoryGenerator,
    images: &ImageUrlBuilder,
    request: &StoryRequest,
) -> Result<StoryResponse, SubmissionError> {
    let request_id = Uuid::new_v4();

    let language = match request.language.as_deref() {
        None => Language::default(),
        Some(label) => Language::from_label(label)
            .ok_or_else(|| SubmissionError::UnknownLanguage(label.to_string()))?,
    };

    let api_key = request.api_key.trim();
    if api_key.is_empty() {
        info!(%request_id, "🔑 Submission without API key, skipping generation");
        return Err(SubmissionError::MissingKey(language));
    }

    info!(%request_id, language = language.label(), "🧙 Generating story for: {} / {}", request.effective_name(), request.effective_topic());

    let prompt = build_story_prompt(request.effective_name(), request.effective_topic(), language.label());
    let raw = generator.generate_story(api_key, &prompt).await.map_err(|e| {
        error!(%request_id, "❌ Story generation failed: {}", e);
        SubmissionError::Generation(e)
    })?;

    let story = split_story_response(&raw);
    let image_url = images.build(&story.image_prompt);
    match &image_url {
        Some(url) => info!(%request_id, "🎨 Illustration URL: {}", url),
        None => info!(%request_id, "⚠️ No image prompt in response, skipping illustration"),
    }

    Ok(StoryResponse {
        request_id,
        heading: request.child_name.clone(),
        story: story.story_text,
        image_prompt: Some(story.image_prompt).filter(|p| !p.is_empty()),
        image_url,
        success: language.strings().success.to_string(),
        generated_at: Utc::now(),
    })
}
