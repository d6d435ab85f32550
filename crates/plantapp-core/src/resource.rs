//! # Resource State
//!
//! The per-resource load state machine shared by categories and questions.
//!
//! ## Load Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ResourceState<T> Lifecycle                          │
//! │                                                                         │
//! │     ┌──────┐  begin_load   ┌─────────┐  settle(Live)     ┌──────────┐  │
//! │     │ Idle │──────────────►│ Loading │──────────────────►│ Settled  │  │
//! │     └──────┘               └─────────┘  settle(Fallback) │  (Live / │  │
//! │                              ▲    │                      │ Fallback)│  │
//! │                              │    │ fail (unmodeled)     └────┬─────┘  │
//! │                              │    ▼                           │        │
//! │                              │ ┌────────┐                     │        │
//! │                              └─┤ Failed │◄────────────────────┘        │
//! │                   begin_load   └────────┘     begin_load again         │
//! │                                                                         │
//! │  loading = true  only in Loading                                        │
//! │  items          replaced wholesale on every settle, kept while loading  │
//! │  error          cleared by begin_load / clear_error, set only by fail   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loader always settles (live or fallback data), so `Failed` is only
//! reachable through an explicit `LoadFailed` action.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::state::{Action, AppState, ResourceAction};

// =============================================================================
// Resource Kind
// =============================================================================

/// The remote resources the client knows how to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Categories,
    Questions,
}

impl ResourceKind {
    /// Every kind, in the order the home screen requests them.
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Categories, ResourceKind::Questions];

    /// Stable lowercase name used in logs and config.
    pub const fn name(&self) -> &'static str {
        match self {
            ResourceKind::Categories => "categories",
            ResourceKind::Questions => "questions",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "categories" | "category" => Ok(ResourceKind::Categories),
            "questions" | "question" => Ok(ResourceKind::Questions),
            other => Err(CoreError::UnknownResource(other.to_string())),
        }
    }
}

// =============================================================================
// Settlement
// =============================================================================

/// Where the items of a settled load came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Parsed from the remote endpoint.
    Live,
    /// Embedded snapshot substituted after a network failure.
    Fallback,
}

/// Terminal outcome of one load. There is no error variant: a failed fetch
/// is already folded into `Fallback` by the time a settlement exists.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement<T> {
    Live(Vec<T>),
    Fallback {
        items: Vec<T>,
        /// Why the live fetch was abandoned (for logs only).
        reason: String,
    },
}

impl<T> Settlement<T> {
    pub fn source(&self) -> DataSource {
        match self {
            Settlement::Live(_) => DataSource::Live,
            Settlement::Fallback { .. } => DataSource::Fallback,
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Settlement::Live(items) | Settlement::Fallback { items, .. } => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Settlement::Live(items) | Settlement::Fallback { items, .. } => items,
        }
    }
}

// =============================================================================
// Load Phase
// =============================================================================

/// Coarse lifecycle of a resource slice.
///
/// `Idle` exists so "never requested" is distinguishable from "loaded, but
/// the server returned an empty list".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", content = "source", rename_all = "snake_case")]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Settled(DataSource),
    Failed,
}

// =============================================================================
// Resource State
// =============================================================================

/// `{items, loading, error}` for one resource kind, plus its [`LoadPhase`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceState<T> {
    /// Server order; replaced wholesale on each settlement.
    pub items: Vec<T>,

    /// True strictly between `begin_load` and settlement.
    pub loading: bool,

    /// Only set by [`ResourceState::fail`].
    pub error: Option<String>,

    pub phase: LoadPhase,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        ResourceState {
            items: Vec::new(),
            loading: false,
            error: None,
            phase: LoadPhase::Idle,
        }
    }
}

impl<T> ResourceState<T> {
    /// Enters `Loading`. Previous items stay visible until the load settles.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
        self.phase = LoadPhase::Loading;
    }

    /// Stores a settled load, superseding whatever was there before.
    pub fn settle(&mut self, settlement: Settlement<T>) {
        self.loading = false;
        self.phase = LoadPhase::Settled(settlement.source());
        self.items = settlement.into_items();
    }

    /// Records an unexpected failure of the load pipeline. Items are kept.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
        self.phase = LoadPhase::Failed;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// True until the first load has been requested.
    pub fn is_idle(&self) -> bool {
        self.phase == LoadPhase::Idle
    }

    /// Source of the current items, if a load has settled.
    pub fn source(&self) -> Option<DataSource> {
        match self.phase {
            LoadPhase::Settled(source) => Some(source),
            _ => None,
        }
    }
}

// =============================================================================
// Resource Trait
// =============================================================================

/// Binds an entity type to its resource kind, wire envelope, fallback
/// snapshot and slot in the [`AppState`] tree.
///
/// Implemented by [`crate::Category`] and [`crate::Question`]; generic code
/// in the client and store crates is written once against this trait.
pub trait Resource: Clone + Send + Sync + 'static {
    const KIND: ResourceKind;

    /// Top-level JSON shape returned by the endpoint.
    type Envelope: DeserializeOwned + Send;

    /// Unwraps the envelope into items, preserving order.
    fn into_items(envelope: Self::Envelope) -> Vec<Self>;

    /// Embedded snapshot used when the network fails.
    fn fallback() -> Vec<Self>;

    /// This resource's slice of the state tree.
    fn slice(state: &AppState) -> &ResourceState<Self>;

    /// Routes a resource action to this resource's slice.
    fn wrap(action: ResourceAction<Self>) -> Action;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_distinct_from_settled_empty() {
        let mut idle: ResourceState<u8> = ResourceState::default();
        assert!(idle.is_idle());
        assert!(!idle.loading);
        assert_eq!(idle.source(), None);

        idle.begin_load();
        idle.settle(Settlement::Live(Vec::new()));
        assert!(!idle.is_idle());
        assert!(idle.items.is_empty());
        assert_eq!(idle.source(), Some(DataSource::Live));
    }

    #[test]
    fn test_begin_load_keeps_items_and_clears_error() {
        let mut state = ResourceState::default();
        state.settle(Settlement::Live(vec![1, 2]));
        state.fail("boom");

        state.begin_load();

        assert!(state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.items, vec![1, 2]);
        assert_eq!(state.phase, LoadPhase::Loading);
    }

    #[test]
    fn test_settle_replaces_items_wholesale() {
        let mut state = ResourceState::default();
        state.begin_load();
        state.settle(Settlement::Live(vec![1, 2, 3]));
        state.begin_load();
        state.settle(Settlement::Fallback {
            items: vec![9],
            reason: "HTTP 500".into(),
        });

        assert_eq!(state.items, vec![9]);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.source(), Some(DataSource::Fallback));
    }

    #[test]
    fn test_fail_sets_error_and_stops_loading() {
        let mut state: ResourceState<u8> = ResourceState::default();
        state.begin_load();
        state.fail("Failed to fetch categories");

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch categories"));
        assert_eq!(state.phase, LoadPhase::Failed);

        state.clear_error();
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_resource_kind_parsing() {
        assert_eq!("categories".parse::<ResourceKind>().unwrap(), ResourceKind::Categories);
        assert_eq!("Questions".parse::<ResourceKind>().unwrap(), ResourceKind::Questions);
        assert!("plants".parse::<ResourceKind>().is_err());
        assert_eq!(ResourceKind::Questions.to_string(), "questions");
    }
}
