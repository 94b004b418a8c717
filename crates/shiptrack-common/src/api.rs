//! Tracking API Wire Types
//!
//! Request and response bodies for the JSON endpoints. Every request field
//! defaults when absent: the service validates presence only, so a missing
//! field arrives as an empty string (or `None` for the optional event)
//! rather than a rejection.
//!
//! # Example
//!
//! ```
//! use shiptrack_common::api::{TrackRequest, ErrorResponse};
//!
//! let req: TrackRequest = serde_json::from_str(
//!     r#"{"trackingNumber": "TRK1234567890"}"#,
//! ).unwrap();
//! assert_eq!(req.tracking_number, "TRK1234567890");
//!
//! let err = ErrorResponse::new("Tracking number not found");
//! assert_eq!(err.error, "Tracking number not found");
//! ```

use serde::{Deserialize, Serialize};

use crate::model::ShipmentRecord;

/// Body of `POST /api/track`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    #[serde(default)]
    pub tracking_number: String,
}

/// Body of `POST /api/generate-tracking`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub destination: String,
}

/// Optional event attached to an update; the service stamps the time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEventBody {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `PUT /api/update-tracking`.
///
/// The four text fields overwrite the record unconditionally; there are no
/// partial-update semantics. `newEvent`, when present, appends one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[serde(default)]
    pub tracking_number: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub new_event: Option<NewEventBody>,
}

/// Success body of `PUT /api/update-tracking`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub message: String,
    pub tracking: ShipmentRecord,
}

/// Success body of `DELETE /api/tracking-numbers/{trackingNumber}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self { message: message.into() }
    }
}

/// Error body for 404/500 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self { error: error.into() }
    }
}
