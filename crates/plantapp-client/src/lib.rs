//! # plantapp-client: Remote Fetch Adapter for PlantApp
//!
//! Issues the GET requests behind the home feed and turns their bodies into
//! domain items, collapsing every failure into a single [`NetworkError`].
//!
//! ## Fetch Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Remote Fetch Adapter                            │
//! │                                                                         │
//! │  AppConfig ──► ApiSettings ──► HttpSource::new ──► endpoints resolved   │
//! │                                                                         │
//! │  fetch::<Category>(&source)                                            │
//! │      │                                                                  │
//! │      ├── GET /getCategories ──► 2xx? ──► {data, meta} ──► Vec<Category> │
//! │      │                                                                  │
//! │  fetch::<Question>(&source)                                            │
//! │      │                                                                  │
//! │      └── GET /getQuestions  ──► 2xx? ──► [ ... ]      ──► Vec<Question> │
//! │                                                                         │
//! │  Any step failing ──► NetworkError (the store swaps in fallback data)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`] - App configuration (TOML file + environment)
//! - [`error`] - `NetworkError` and `ConfigError`
//! - [`source`] - `RemoteSource` trait and generic `fetch`/`decode`
//! - [`http`] - reqwest implementation of `RemoteSource`

pub mod config;
pub mod error;
pub mod http;
pub mod source;

pub use config::{ApiSettings, AppConfig, LoggingSettings, OnboardingSettings};
pub use error::{ConfigError, ConfigResult, NetworkError, NetworkResult};
pub use http::HttpSource;
pub use source::{decode, fetch, RemoteSource};
