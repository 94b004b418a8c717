//! Shiptrack Server
//!
//! This crate provides the HTTP side of the shiptrack service: the in-memory
//! record store, the axum router exposing the tracking API, the two HTML
//! entry points, and the best-effort static layer for a mirrored site's
//! asset paths.

pub mod assets;
pub mod http_router;
pub mod http_server;
pub mod pages;
pub mod store;

pub use assets::AssetConfig;
pub use http_router::{build_router, AppState};
pub use http_server::HttpServer;
pub use store::TrackingStore;
