use axum::{Json, Router, extract::State, http::StatusCode, response::{Html, IntoResponse, Response}, routing::{get, post}};
use include_dir::{include_dir, Dir};
use std::sync::Arc;
use tower_http::cors::{CorsLayer, Any};

use crate::{
    gemini::StoryGenerator,
    i18n::{language_table, LanguageEntry},
    image::ImageUrlBuilder,
    models::{ErrorResponse, StoryRequest, StoryResponse},
    pipeline::{run_submission, SubmissionError},
};

static STATIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn StoryGenerator>,
    pub images: ImageUrlBuilder,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/api/languages", get(list_languages))
        .route("/api/story", post(generate_story))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

impl IntoResponse for SubmissionError {
    fn into_response(self) -> Response {
        let status = match self {
            SubmissionError::UnknownLanguage(_) | SubmissionError::MissingKey(_) => StatusCode::BAD_REQUEST,
            SubmissionError::Generation(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(ErrorResponse { error: self.user_message() })).into_response()
    }
}

pub async fn index() -> Response {
    match STATIC_DIR.get_file("index.html").and_then(|f| f.contents_utf8()) {
        Some(page) => Html(page).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

pub async fn list_languages() -> Json<Vec<LanguageEntry>> {
    Json(language_table())
}

pub async fn generate_story(State(state): State<AppState>, Json(body): Json<StoryRequest>) -> Result<Json<StoryResponse>, SubmissionError> {
    let story = run_submission(state.generator.as_ref(), &state.images, &body).await?;
    tracing::info!("✅ Story {} ready ({} chars, image: {})", story.request_id, story.story.len(), story.image_url.is_some());
    Ok(Json(story))
}
