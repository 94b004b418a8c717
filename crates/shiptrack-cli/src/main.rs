//! # Shiptrack CLI Entry Point
//!
//! Main binary for the shiptrack package-tracking service.
//!
//! ## Usage
//!
//! ```bash
//! # Start with defaults (0.0.0.0:3000, assets under ./static)
//! shiptrack
//!
//! # Explicit bind address
//! shiptrack -b 127.0.0.1:8080
//!
//! # Port via environment (overridden by -b)
//! PORT=4000 shiptrack
//!
//! # Assets elsewhere
//! shiptrack --assets-dir /srv/shiptrack/static
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use argh::FromArgs;

use shiptrack_server::{AppState, AssetConfig, HttpServer, TrackingStore};

/// Default port when neither `--bind` nor `PORT` is given.
const DEFAULT_PORT: u16 = 3000;

#[derive(FromArgs)]
/// Shiptrack - package tracking service
struct Cli {
    /// address to bind the HTTP server to
    ///
    /// Takes precedence over the PORT environment variable. When absent,
    /// the server binds 0.0.0.0 on PORT (default 3000).
    #[argh(option, short = 'b')]
    bind: Option<String>,

    /// directory holding the served pages and the mirrored site files
    ///
    /// Must contain tracking.html, admin.html, and the "Site Mirror_files"
    /// directory. Defaults to "static".
    #[argh(option, short = 'a', default = "\"static\".into()")]
    assets_dir: String,
}

/// Resolves the bind address: explicit flag, then PORT env var, then the
/// built-in default.
fn resolve_bind(bind: Option<String>, port_env: Option<String>) -> String {
    bind.unwrap_or_else(|| {
        let port = port_env
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        format!("0.0.0.0:{port}")
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli: Cli = argh::from_env();

    // Set default log level to INFO, but allow RUST_LOG env var to override
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let bind = resolve_bind(cli.bind, std::env::var("PORT").ok());
    let addr: SocketAddr = bind
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address {}: {}", bind, e))?;

    let state = AppState {
        store: Arc::new(TrackingStore::seeded()),
        assets: Arc::new(AssetConfig::new(cli.assets_dir.clone().into())),
    };

    tracing::info!("Serving assets from: {}", cli.assets_dir);
    tracing::info!("Tracking page available at http://{}/", addr);
    tracing::info!("Admin panel available at http://{}/admin", addr);

    let server = HttpServer::new(state);
    server.run(addr).await?;

    Ok(())
}

/// CLI argument parsing tests.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli: Cli = Cli::from_args(&["shiptrack"], &[]).unwrap();
        assert!(cli.bind.is_none());
        assert_eq!(cli.assets_dir, "static");
    }

    #[test]
    fn test_cli_parse_bind() {
        let cli: Cli = Cli::from_args(&["shiptrack"], &["-b", "127.0.0.1:8080"]).unwrap();
        assert_eq!(cli.bind, Some("127.0.0.1:8080".to_string()));
    }

    #[test]
    fn test_cli_parse_assets_dir() {
        let cli: Cli =
            Cli::from_args(&["shiptrack"], &["--assets-dir", "/srv/assets"]).unwrap();
        assert_eq!(cli.assets_dir, "/srv/assets");
    }

    #[test]
    fn test_resolve_bind_flag_wins() {
        let bind = resolve_bind(Some("127.0.0.1:9000".into()), Some("4000".into()));
        assert_eq!(bind, "127.0.0.1:9000");
    }

    #[test]
    fn test_resolve_bind_port_env() {
        let bind = resolve_bind(None, Some("4000".into()));
        assert_eq!(bind, "0.0.0.0:4000");
    }

    #[test]
    fn test_resolve_bind_default() {
        assert_eq!(resolve_bind(None, None), "0.0.0.0:3000");
        // Unparseable PORT falls back to the default
        assert_eq!(resolve_bind(None, Some("not-a-port".into())), "0.0.0.0:3000");
    }
}
