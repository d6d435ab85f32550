//! # plantapp-store: Store Aggregator for PlantApp
//!
//! Owns the single state tree that screens read from and dispatch into.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Aggregator                                │
//! │                                                                         │
//! │   Screen ──► store.load_categories(&source)                             │
//! │                 │                                                       │
//! │                 ├── dispatch(Categories(LoadStarted))   loading = true  │
//! │                 ├── load_resource::<Category>(&source)                  │
//! │                 │      ├── Ok  ──► Settlement::Live                     │
//! │                 │      └── Err ──► Settlement::Fallback (warn! logged)  │
//! │                 └── dispatch(Categories(LoadSettled))   loading = false │
//! │                                                                         │
//! │   Screen ◄── store.snapshot() / store.subscribe()                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`loader`] - Fetch-then-fallback policy
//! - [`store`] - `Store` handle (dispatch, snapshots, subscriptions)

pub mod loader;
pub mod store;

pub use loader::load_resource;
pub use store::Store;
