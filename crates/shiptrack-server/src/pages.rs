//! Page Server
//!
//! Serves the two fixed HTML entry points: the public tracking form at `/`
//! and the admin panel at `/admin`. Documents are read from the assets
//! directory per request; a missing document is an internal failure (the
//! underlying error is logged, the caller gets a generic 500).

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use shiptrack_common::api::ErrorResponse;

use crate::http_router::AppState;

/// `GET /` — the tracking form page.
pub async fn tracking_page(State(state): State<AppState>) -> Response {
    serve_page(&state, "tracking.html").await
}

/// `GET /admin` — the admin panel.
pub async fn admin_page(State(state): State<AppState>) -> Response {
    serve_page(&state, "admin.html").await
}

async fn serve_page(state: &AppState, name: &str) -> Response {
    match tokio::fs::read_to_string(state.assets.page(name)).await {
        Ok(contents) => Html(contents).into_response(),
        Err(err) => {
            tracing::error!("Failed to load page {}: {}", name, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to load page")),
            )
                .into_response()
        }
    }
}
