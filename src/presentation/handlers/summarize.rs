use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::GenerativeClient;
use crate::application::services::SummaryError;
use crate::infrastructure::observability::preview_text;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Serialize)]
pub struct SummarizeErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn summarize_handler<G>(
    State(state): State<AppState<G>>,
    Json(request): Json<SummarizeRequest>,
) -> impl IntoResponse
where
    G: GenerativeClient + 'static,
{
    tracing::debug!(text = %preview_text(&request.text), "Processing summary request");

    match state.summary_service.summarize(&request.text).await {
        Ok(summary) => (StatusCode::OK, Json(SummarizeResponse { summary })).into_response(),
        Err(e @ SummaryError::EmptyTranscript) => {
            tracing::warn!("Summary requested for empty transcript");
            (
                StatusCode::BAD_REQUEST,
                Json(SummarizeErrorResponse {
                    error: e.to_string(),
                    details: None,
                }),
            )
                .into_response()
        }
        Err(SummaryError::Completion(e)) => {
            tracing::error!(error = %e, "Summarization failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SummarizeErrorResponse {
                    error: "Summarization failed".to_string(),
                    details: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}
