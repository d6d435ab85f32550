//! # Client Error Types
//!
//! Error types for fetching and for configuration.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Client Error Categories                           │
//! │                                                                         │
//! │  ┌──────────────────────────────────────┐  ┌─────────────────────────┐ │
//! │  │  NetworkError (one per failed fetch) │  │  ConfigError            │ │
//! │  │                                      │  │                         │ │
//! │  │  InvalidUrl   endpoint won't parse   │  │  LoadFailed             │ │
//! │  │  Client       reqwest setup failed   │  │  SaveFailed             │ │
//! │  │  Transport    DNS / refused / timeout│  │  Invalid                │ │
//! │  │  Status       non-2xx response       │  │  InvalidUrl             │ │
//! │  │  Decode       body isn't the shape   │  │                         │ │
//! │  └──────────────────────────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Every NetworkError variant is handled identically by the loader:      │
//! │  log it, substitute fallback data. Variants exist for logs only.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use plantapp_core::ResourceKind;
use thiserror::Error;

/// Result type alias for fetch operations.
pub type NetworkResult<T> = Result<T, NetworkError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Network Error
// =============================================================================

/// Any failure of a remote fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// Base URL or path could not be turned into an endpoint.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    /// Network-level failure (DNS, refused connection, timeout, reset).
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// Server answered outside the 2xx range.
    #[error("HTTP error! status: {status} ({url})")]
    Status { status: u16, url: String },

    /// Body was not JSON of the expected shape.
    #[error("Failed to decode {kind} response: {message}")]
    Decode { kind: ResourceKind, message: String },
}

impl NetworkError {
    /// Wraps a reqwest error raised while talking to `url`.
    pub fn transport(url: &url::Url, err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return NetworkError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            };
        }
        NetworkError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            NetworkError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when no HTTP response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, NetworkError::Transport { .. })
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Failures loading, validating or saving [`crate::AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadFailed(String),

    #[error("Failed to save config: {0}")]
    SaveFailed(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::SaveFailed(err.to_string())
    }
}

impl From<url::ParseError> for ConfigError {
    fn from(err: url::ParseError) -> Self {
        ConfigError::InvalidUrl(err.to_string())
    }
}
