//! # Domain Types
//!
//! Entity and wire types for the two remote resources.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  GET /getCategories                    GET /getQuestions               │
//! │  ─────────────────                     ────────────────                │
//! │  CategoriesResponse                    [Question, ...]   (bare array)  │
//! │  ├── data: [Category, ...]                                             │
//! │  │         ├── id, name, title, rank   Question                        │
//! │  │         ├── createdAt/updatedAt/    ├── id, title, subtitle         │
//! │  │         │   publishedAt             ├── image_uri, uri              │
//! │  │         └── image: CategoryImage    └── order                       │
//! │  └── meta: { pagination } (unused)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is server-assigned and the only field a payload must carry. Every
//! other field falls back to its default, whether missing or `null`, so a
//! sparse record still decodes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Reads an explicit `null` as the field's default. The CMS sends `null`
/// for unset media and unpublished timestamps.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Category
// =============================================================================

/// Image attached to a category (CMS upload metadata).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryImage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub alternative_text: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub caption: Option<String>,

    /// Intrinsic pixel width.
    #[serde(default, deserialize_with = "null_as_default")]
    pub width: u32,

    /// Intrinsic pixel height.
    #[serde(default, deserialize_with = "null_as_default")]
    pub height: u32,

    /// Responsive variants; opaque to the client.
    #[serde(default, deserialize_with = "null_as_default")]
    #[ts(type = "unknown")]
    pub formats: serde_json::Value,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hash: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ext: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub mime: String,

    /// Size in kilobytes as reported by the CMS.
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub preview_url: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub provider: String,

    #[serde(default, rename = "provider_metadata")]
    #[ts(type = "unknown")]
    pub provider_metadata: serde_json::Value,

    #[serde(default, deserialize_with = "null_as_default")]
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// A plant category shown in the home feed grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Server-assigned identifier, immutable after creation.
    pub id: i64,

    /// Machine name (e.g. "fern").
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Display title (e.g. "Ferns").
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Ordering hint from the CMS. The client keeps server order and does
    /// not sort by this.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rank: i32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub image: CategoryImage,

    #[serde(default, deserialize_with = "null_as_default")]
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    #[serde(default, deserialize_with = "null_as_default")]
    #[ts(as = "String")]
    pub published_at: DateTime<Utc>,
}

// =============================================================================
// Categories Envelope
// =============================================================================

/// Server-side pagination block. Received but never acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_size: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u32,
}

/// `meta` block of the categories envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub pagination: Pagination,
}

/// Response body of `GET /getCategories`: `{ data: [...], meta: {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoriesResponse {
    pub data: Vec<Category>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: ResponseMeta,
}

// =============================================================================
// Question
// =============================================================================

/// A "get started" article card. The remote API already uses snake_case
/// for these fields, so no renaming is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub subtitle: String,

    /// Card artwork.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_uri: String,

    /// Article the card links to.
    #[serde(default, deserialize_with = "null_as_default")]
    pub uri: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub order: i32,
}
