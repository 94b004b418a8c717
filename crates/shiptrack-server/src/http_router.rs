//! HTTP Router
//!
//! This module builds the axum router for the whole service: the JSON
//! tracking API, the two HTML entry points, and the asset fallback layer.
//! Every request passes through a logging middleware first, then routes to
//! exactly one handler; handlers never call each other.
//!
//! # Error surface
//!
//! - unknown tracking number: 404 with `{"error": ...}`
//! - unexpected handler failure: 500 with a generic `{"error": ...}`, the
//!   underlying error is only logged server-side
//! - missing static asset: degraded 200 (see [`crate::assets`])

use std::sync::Arc;

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use shiptrack_common::api::{
    ErrorResponse, GenerateRequest, MessageResponse, TrackRequest, UpdateRequest, UpdateResponse,
};
use shiptrack_common::model::ShipmentRecord;
use shiptrack_common::ShiptrackError;

use crate::assets::{self, AssetConfig};
use crate::pages;
use crate::store::TrackingStore;

/// Shared state threaded through every handler.
///
/// The store handle is the only mutable state in the process; there is no
/// process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TrackingStore>,
    pub assets: Arc<AssetConfig>,
}

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::tracking_page))
        .route("/admin", get(pages::admin_page))
        .route("/api/track", post(track))
        .route("/api/tracking-numbers", get(list_tracking_numbers))
        .route("/api/generate-tracking", post(generate_tracking))
        .route("/api/update-tracking", put(update_tracking))
        .route(
            "/api/tracking-numbers/{tracking_number}",
            delete(delete_tracking),
        )
        .merge(assets::router())
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Logs every request as `METHOD uri` before it reaches its handler.
async fn log_request(req: Request, next: Next) -> Response {
    tracing::info!("{} {}", req.method(), req.uri());
    next.run(req).await
}

/// `POST /api/track` — look a shipment up by tracking number.
async fn track(State(state): State<AppState>, Json(body): Json<TrackRequest>) -> Response {
    tracing::debug!("Tracking request received for: {}", body.tracking_number);

    match state.store.lookup(&body.tracking_number).await {
        Some(record) => Json(record).into_response(),
        None => not_found(),
    }
}

/// `GET /api/tracking-numbers` — the full store, insertion order.
async fn list_tracking_numbers(State(state): State<AppState>) -> Json<Vec<ShipmentRecord>> {
    Json(state.store.list_all().await)
}

/// `POST /api/generate-tracking` — create a record with a fresh number.
async fn generate_tracking(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Json<ShipmentRecord> {
    Json(
        state
            .store
            .create(body.client_name, body.description, body.destination)
            .await,
    )
}

/// `PUT /api/update-tracking` — full-field overwrite plus optional event.
async fn update_tracking(
    State(state): State<AppState>,
    Json(body): Json<UpdateRequest>,
) -> Response {
    match state.store.update(body).await {
        Ok(record) => Json(UpdateResponse {
            message: "Tracking information updated successfully".into(),
            tracking: record,
        })
        .into_response(),
        Err(ShiptrackError::NotFound) => not_found(),
        Err(err) => internal_failure("Failed to update tracking information", err),
    }
}

/// `DELETE /api/tracking-numbers/{trackingNumber}` — remove one record.
async fn delete_tracking(
    State(state): State<AppState>,
    Path(tracking_number): Path<String>,
) -> Response {
    match state.store.remove(&tracking_number).await {
        Ok(()) => Json(MessageResponse::new("Tracking number deleted successfully")).into_response(),
        Err(_) => not_found(),
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Tracking number not found")),
    )
        .into_response()
}

fn internal_failure(message: &str, err: ShiptrackError) -> Response {
    tracing::error!("{}: {}", message, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}
