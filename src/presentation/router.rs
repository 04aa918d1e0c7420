use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::GenerativeClient;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, summarize_handler, transcribe_handler};
use crate::presentation::state::AppState;

pub fn create_router<G>(state: AppState<G>) -> Router
where
    G: GenerativeClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_upload_bytes = state.settings.storage.max_upload_mb * 1024 * 1024;

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/transcribe", post(transcribe_handler::<G>))
        .route("/api/summarize", post(summarize_handler::<G>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
