//! # Remote Source
//!
//! The seam between the store and the network.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          fetch::<R>(source)                             │
//! │                                                                         │
//! │   source.fetch_body(R::KIND) ──► raw bytes ──► serde_json ──► Envelope  │
//! │            │                                        │            │      │
//! │            │ Transport / Status                     │ Decode     │      │
//! │            ▼                                        ▼            ▼      │
//! │       NetworkError ◄──────────────────────── NetworkError   Vec<R>      │
//! │                                                          (server order) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `RemoteSource` deals in bytes so it stays object safe; decoding is
//! written once, generically, in [`decode`].

use async_trait::async_trait;
use plantapp_core::{Resource, ResourceKind};

use crate::error::{NetworkError, NetworkResult};

/// Something that can produce the raw response body for a resource kind.
///
/// Implemented by [`crate::HttpSource`] in production and by stubs in tests.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Performs one request for `kind` and returns the 2xx body.
    async fn fetch_body(&self, kind: ResourceKind) -> NetworkResult<Vec<u8>>;
}

/// Fetches and decodes all items of resource `R`.
pub async fn fetch<R: Resource>(source: &dyn RemoteSource) -> NetworkResult<Vec<R>> {
    let body = source.fetch_body(R::KIND).await?;
    decode::<R>(&body)
}

/// Decodes a response body into items of `R`, unwrapping its envelope.
pub fn decode<R: Resource>(body: &[u8]) -> NetworkResult<Vec<R>> {
    let envelope: R::Envelope =
        serde_json::from_slice(body).map_err(|e| NetworkError::Decode {
            kind: R::KIND,
            message: e.to_string(),
        })?;
    Ok(R::into_items(envelope))
}
