//! In-Memory Record Store
//!
//! This module provides the tracking store: an ordered list of shipment
//! records owned by the running process and lost on restart. All access goes
//! through a single `RwLock`, so concurrent handlers observe the same
//! serialized-mutation behavior a single-threaded runtime would give.
//!
//! # Operations
//!
//! - **lookup**: linear scan by tracking number, first match wins
//! - **list_all**: the full store in insertion order
//! - **create**: generate a `TRK` + 10-digit number and append a new record
//! - **update**: full-field overwrite plus optional event append
//! - **remove**: delete the first record with the given number
//!
//! # Example
//!
//! ```no_run
//! use shiptrack_server::store::TrackingStore;
//!
//! # async fn demo() {
//! let store = TrackingStore::seeded();
//! let record = store
//!     .create("Jane Doe".into(), "Books".into(), "Portland, OR".into())
//!     .await;
//! assert!(store.lookup(&record.tracking_number).await.is_some());
//! # }
//! ```

use rand::Rng;
use tokio::sync::RwLock;

use shiptrack_common::api::UpdateRequest;
use shiptrack_common::model::{ShipmentRecord, TrackingEvent};
use shiptrack_common::{Result, ShiptrackError};

/// The in-memory collection of shipment records.
///
/// The store is the sole source of truth for tracking data. Handlers share
/// it through an `Arc`; the lock inside keeps writes exclusive.
pub struct TrackingStore {
    records: RwLock<Vec<ShipmentRecord>>,
}

impl TrackingStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store holding the three startup records.
    pub fn seeded() -> Self {
        Self {
            records: RwLock::new(seed_records()),
        }
    }

    /// Returns the record with the given tracking number, if any.
    ///
    /// Linear scan; if duplicates exist the first match shadows the rest.
    pub async fn lookup(&self, tracking_number: &str) -> Option<ShipmentRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.tracking_number == tracking_number)
            .cloned()
    }

    /// Returns every record, unfiltered, in insertion order.
    pub async fn list_all(&self) -> Vec<ShipmentRecord> {
        self.records.read().await.clone()
    }

    /// Number of records currently held.
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Creates a new record with a generated tracking number and appends it.
    ///
    /// The generated number is `TRK` plus ten random digits, redrawn until it
    /// does not collide with an existing record. The new record starts as
    /// `Pending` with a single "Package received" event.
    pub async fn create(
        &self,
        client_name: String,
        description: String,
        destination: String,
    ) -> ShipmentRecord {
        let mut records = self.records.write().await;

        let tracking_number = loop {
            let suffix: u64 = rand::rng().random_range(1_000_000_000..10_000_000_000);
            let candidate = format!("TRK{suffix}");
            if !records.iter().any(|r| r.tracking_number == candidate) {
                break candidate;
            }
        };

        let record =
            ShipmentRecord::generated(tracking_number, client_name, description, destination);
        records.push(record.clone());
        record
    }

    /// Overwrites a record's fields and optionally appends an event.
    ///
    /// All four text fields are written unconditionally; a field the caller
    /// omitted arrives as an empty string and is written as such. Prior
    /// events are never touched. Returns the updated record.
    pub async fn update(&self, req: UpdateRequest) -> Result<ShipmentRecord> {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|r| r.tracking_number == req.tracking_number)
            .ok_or(ShiptrackError::NotFound)?;

        record.client_name = req.client_name;
        record.description = req.description;
        record.destination = req.destination;
        record.status = req.status;

        if let Some(event) = req.new_event {
            record
                .events
                .push(TrackingEvent::now(event.location, event.description));
        }

        Ok(record.clone())
    }

    /// Removes the first record with the given tracking number.
    pub async fn remove(&self, tracking_number: &str) -> Result<()> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.tracking_number == tracking_number)
            .ok_or(ShiptrackError::NotFound)?;
        records.remove(index);
        Ok(())
    }
}

impl Default for TrackingStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The three records the store is seeded with at startup.
fn seed_records() -> Vec<ShipmentRecord> {
    vec![
        ShipmentRecord {
            tracking_number: "TRK1234567890".into(),
            client_name: "John Smith".into(),
            description: "Electronics Package".into(),
            status: "Delivered".into(),
            destination: "New York, NY".into(),
            created_at: "2023-12-10".into(),
            events: vec![
                TrackingEvent {
                    timestamp: "2023-12-10 08:30 AM".into(),
                    location: "Origin Facility - Los Angeles, CA".into(),
                    description: "Package received".into(),
                },
                TrackingEvent {
                    timestamp: "2023-12-10 02:15 PM".into(),
                    location: "Hub - Phoenix, AZ".into(),
                    description: "Package in transit".into(),
                },
                TrackingEvent {
                    timestamp: "2023-12-11 06:45 AM".into(),
                    location: "Distribution Center - New York, NY".into(),
                    description: "Package arrived at facility".into(),
                },
                TrackingEvent {
                    timestamp: "2023-12-11 03:30 PM".into(),
                    location: "New York, NY".into(),
                    description: "Package delivered".into(),
                },
            ],
        },
        ShipmentRecord {
            tracking_number: "TRK0987654321".into(),
            client_name: "Sarah Johnson".into(),
            description: "Clothing Package".into(),
            status: "In Transit".into(),
            destination: "Chicago, IL".into(),
            created_at: "2023-12-12".into(),
            events: vec![
                TrackingEvent {
                    timestamp: "2023-12-12 09:15 AM".into(),
                    location: "Origin Facility - Miami, FL".into(),
                    description: "Package received".into(),
                },
                TrackingEvent {
                    timestamp: "2023-12-12 04:30 PM".into(),
                    location: "Hub - Atlanta, GA".into(),
                    description: "Package in transit".into(),
                },
                TrackingEvent {
                    timestamp: "2023-12-13 08:20 AM".into(),
                    location: "Hub - Nashville, TN".into(),
                    description: "Package in transit".into(),
                },
            ],
        },
        ShipmentRecord {
            tracking_number: "TRK1122334455".into(),
            client_name: "Michael Brown".into(),
            description: "Home Goods".into(),
            status: "Pending".into(),
            destination: "Seattle, WA".into(),
            created_at: "2023-12-14".into(),
            events: vec![TrackingEvent {
                timestamp: "2023-12-14 10:00 AM".into(),
                location: "Origin Facility - Dallas, TX".into(),
                description: "Package received".into(),
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiptrack_common::api::NewEventBody;

    fn update_request(tracking_number: &str) -> UpdateRequest {
        UpdateRequest {
            tracking_number: tracking_number.into(),
            client_name: "John Smith".into(),
            description: "Electronics Package".into(),
            destination: "New York, NY".into(),
            status: "Delivered".into(),
            new_event: None,
        }
    }

    #[tokio::test]
    async fn test_seeded_store_contents() {
        let store = TrackingStore::seeded();
        assert_eq!(store.count().await, 3);

        let record = store.lookup("TRK1234567890").await.unwrap();
        assert_eq!(record.client_name, "John Smith");
        assert_eq!(record.status, "Delivered");
        assert_eq!(record.events.len(), 4);
        assert_eq!(record.events[3].description, "Package delivered");
    }

    #[tokio::test]
    async fn test_list_all_preserves_insertion_order() {
        let store = TrackingStore::seeded();
        let all = store.list_all().await;
        assert_eq!(all[0].tracking_number, "TRK1234567890");
        assert_eq!(all[1].tracking_number, "TRK0987654321");
        assert_eq!(all[2].tracking_number, "TRK1122334455");
    }

    #[tokio::test]
    async fn test_lookup_unknown_number() {
        let store = TrackingStore::seeded();
        assert!(store.lookup("TRK0000000000").await.is_none());
        // Miss does not mutate the store
        assert_eq!(store.count().await, 3);
    }

    #[tokio::test]
    async fn test_create_generates_well_formed_number() {
        let store = TrackingStore::new();
        let record = store
            .create("Jane Doe".into(), "Books".into(), "Portland, OR".into())
            .await;

        assert!(record.tracking_number.starts_with("TRK"));
        let digits = &record.tracking_number[3..];
        assert_eq!(digits.len(), 10);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(record.status, "Pending");
        assert_eq!(record.events.len(), 1);
    }

    #[tokio::test]
    async fn test_create_appends_to_store() {
        let store = TrackingStore::seeded();
        let record = store
            .create("Jane Doe".into(), "Books".into(), "Portland, OR".into())
            .await;

        assert_eq!(store.count().await, 4);
        let found = store.lookup(&record.tracking_number).await.unwrap();
        assert_eq!(found, record);
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let store = TrackingStore::seeded();
        let mut req = update_request("TRK1122334455");
        req.client_name = "Michael B.".into();
        req.status = "In Transit".into();
        // Omitted fields arrive as empty strings and are written through
        req.description = String::new();

        let updated = store.update(req).await.unwrap();
        assert_eq!(updated.client_name, "Michael B.");
        assert_eq!(updated.status, "In Transit");
        assert_eq!(updated.description, "");
        assert_eq!(updated.events.len(), 1);
    }

    #[tokio::test]
    async fn test_update_appends_single_event() {
        let store = TrackingStore::seeded();
        let mut req = update_request("TRK0987654321");
        req.new_event = Some(NewEventBody {
            location: "Hub - Denver, CO".into(),
            description: "Package in transit".into(),
        });

        let updated = store.update(req).await.unwrap();
        assert_eq!(updated.events.len(), 4);
        assert_eq!(updated.events[3].location, "Hub - Denver, CO");
        // Prior events untouched and in order
        assert_eq!(updated.events[0].description, "Package received");
        assert_eq!(updated.events[2].location, "Hub - Nashville, TN");
    }

    #[tokio::test]
    async fn test_update_unknown_number() {
        let store = TrackingStore::seeded();
        let result = store.update(update_request("TRK0000000000")).await;
        assert!(matches!(result, Err(ShiptrackError::NotFound)));
    }

    #[tokio::test]
    async fn test_remove_deletes_exactly_one() {
        let store = TrackingStore::seeded();
        store.remove("TRK0987654321").await.unwrap();
        assert_eq!(store.count().await, 2);
        assert!(store.lookup("TRK0987654321").await.is_none());
        assert!(store.lookup("TRK1234567890").await.is_some());
    }

    #[tokio::test]
    async fn test_remove_unknown_number_is_noop() {
        let store = TrackingStore::seeded();
        let result = store.remove("TRK0000000000").await;
        assert!(matches!(result, Err(ShiptrackError::NotFound)));
        assert_eq!(store.count().await, 3);
    }
}
