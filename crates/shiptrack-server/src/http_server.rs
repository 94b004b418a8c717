//! HTTP Server
//!
//! Thin wrapper that binds a TCP listener and serves the application router.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use shiptrack_server::{AppState, AssetConfig, HttpServer, TrackingStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let state = AppState {
//!         store: Arc::new(TrackingStore::seeded()),
//!         assets: Arc::new(AssetConfig::new("static".into())),
//!     };
//!     let server = HttpServer::new(state);
//!     server.run("0.0.0.0:3000".parse().unwrap()).await.unwrap();
//! }
//! ```

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use shiptrack_common::{Result, ShiptrackError};

use crate::http_router::{build_router, AppState};

/// HTTP server for the tracking service.
pub struct HttpServer {
    state: AppState,
}

impl HttpServer {
    /// Creates a server around the given application state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Runs the server on the specified address until shutdown.
    pub async fn run(self, addr: SocketAddr) -> Result<()> {
        let app = build_router(self.state);

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ShiptrackError::Server(format!("Failed to bind to {addr}: {e}")))?;

        let local_addr = listener
            .local_addr()
            .map_err(|e| ShiptrackError::Server(format!("Failed to get local address: {e}")))?;
        info!("Tracking server listening on {}", local_addr);

        axum::serve(listener, app)
            .await
            .map_err(|e| ShiptrackError::Server(format!("Server error: {e}")))?;

        Ok(())
    }
}
