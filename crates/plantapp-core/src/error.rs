//! # Error Types
//!
//! Domain-specific error types for plantapp-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  plantapp-core errors (this file)                                      │
//! │  └── CoreError        - Bad names/values handed to the domain layer    │
//! │                                                                         │
//! │  plantapp-client errors (separate crate)                               │
//! │  ├── NetworkError     - Any transport/HTTP/decode failure              │
//! │  └── ConfigError      - Config file/env problems                       │
//! │                                                                         │
//! │  NetworkError never reaches the state tree: the loader converts it     │
//! │  into fallback data before the store sees it.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors raised by the pure domain layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A resource name did not match any known resource kind.
    #[error("Unknown resource: '{0}'. Valid options: categories, questions")]
    UnknownResource(String),

    /// A slice name did not match any key of the state tree.
    #[error("Unknown state slice: '{0}'. Valid options: categories, questions, onboarding")]
    UnknownSlice(String),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
