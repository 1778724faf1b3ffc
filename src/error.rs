use std::path::PathBuf;
use thiserror::Error;

/// Failures the command handlers turn into user-facing messages.
#[derive(Debug, Error)]
pub enum TcError {
    /// Record file absent, unreadable as INI, or missing a required key.
    #[error("config missing or unreadable: {}", path.display())]
    ConfigMissing { path: PathBuf },
    #[error("Invalid server '{server}': {reason}")]
    InvalidHost { server: String, reason: &'static str },
    #[error("request failed with HTTP status {0}")]
    RequestFailed(u16),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type TcResult<T> = std::result::Result<T, TcError>;
