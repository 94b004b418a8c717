//! Shipment Data Model
//!
//! This module defines the records held by the in-memory tracking store and
//! the event history attached to each of them. The serde surface uses
//! camelCase field names, matching the JSON exchanged with the tracking and
//! admin pages.
//!
//! # Example
//!
//! ```
//! use shiptrack_common::model::{ShipmentRecord, TrackingEvent};
//!
//! let mut record = ShipmentRecord::generated(
//!     "TRK0000000001".into(),
//!     "Jane Doe".into(),
//!     "Books".into(),
//!     "Portland, OR".into(),
//! );
//! record.events.push(TrackingEvent::now(
//!     "Hub - Phoenix, AZ".into(),
//!     "Package in transit".into(),
//! ));
//! assert_eq!(record.events.len(), 2);
//! ```

use chrono::Local;
use serde::{Deserialize, Serialize};

/// One timestamped milestone in a shipment's history.
///
/// Timestamps are human-readable display strings, not machine-sortable
/// values; chronological order is the insertion order of the `events` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    /// Display timestamp, e.g. `12/10/2023, 8:30:00 AM`
    pub timestamp: String,
    /// Where the milestone happened
    pub location: String,
    /// What happened
    pub description: String,
}

impl TrackingEvent {
    /// Creates an event stamped with the current local time.
    pub fn now(location: String, description: String) -> Self {
        Self {
            timestamp: Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
            location,
            description,
        }
    }
}

/// One tracked package's state plus its event history.
///
/// `trackingNumber` identifies the record (`TRK` + 10 digits when generated
/// by the service, free-form when supplied by a caller). `createdAt` is set
/// once at creation. `events` is append-only; it is never reordered or
/// truncated, and a record always carries at least one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub tracking_number: String,
    pub client_name: String,
    pub description: String,
    pub status: String,
    pub destination: String,
    /// Creation date, `YYYY-MM-DD`, immutable after creation
    pub created_at: String,
    pub events: Vec<TrackingEvent>,
}

impl ShipmentRecord {
    /// Creates a freshly generated record: status `Pending`, `createdAt` set
    /// to today, and a single "Package received" event at the origin
    /// facility.
    pub fn generated(
        tracking_number: String,
        client_name: String,
        description: String,
        destination: String,
    ) -> Self {
        Self {
            tracking_number,
            client_name,
            description,
            status: "Pending".into(),
            destination,
            created_at: Local::now().format("%Y-%m-%d").to_string(),
            events: vec![TrackingEvent::now(
                "Origin Facility".into(),
                "Package received".into(),
            )],
        }
    }
}
