use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiptrackError {
    #[error("Tracking number not found")]
    NotFound,

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl From<std::net::AddrParseError> for ShiptrackError {
    fn from(err: std::net::AddrParseError) -> Self {
        ShiptrackError::Server(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShiptrackError>;
