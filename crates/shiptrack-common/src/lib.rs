//! Shiptrack Common Types
//!
//! This crate provides the shared definitions for the shiptrack package
//! tracking service: the shipment data model, the JSON bodies exchanged with
//! the HTTP API, and the service error type.
//!
//! # Components
//!
//! - [`model`] - Shipment records and their tracking events
//! - [`api`] - Request and response bodies for the tracking endpoints
//! - [`error`] - The service error enum and `Result` alias
//!
//! # Example
//!
//! ```
//! use shiptrack_common::{ShipmentRecord, TrackingEvent};
//!
//! let record = ShipmentRecord::generated(
//!     "TRK0000000001".into(),
//!     "Jane Doe".into(),
//!     "Books".into(),
//!     "Portland, OR".into(),
//! );
//! assert_eq!(record.status, "Pending");
//! assert_eq!(record.events.len(), 1);
//! ```

pub mod api;
pub mod error;
pub mod model;

pub use api::*;
pub use error::{Result, ShiptrackError};
pub use model::*;
