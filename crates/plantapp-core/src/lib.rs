//! # plantapp-core: Pure Domain Layer for PlantApp
//!
//! This crate holds everything about the client-side state that can be
//! expressed without touching the network: entity types, the embedded
//! fallback snapshots, the per-resource load state machine, onboarding
//! progress and the reducer that applies actions to the state tree.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PlantApp Client Layers                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Screens (welcome, onboarding, home)              │   │
//! │  │         issue load intents ──► read snapshots ──► render        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 plantapp-store (Store Aggregator)               │   │
//! │  │        dispatch, snapshots, fetch-then-fallback orchestration   │   │
//! │  └──────────────┬──────────────────────────────────┬───────────────┘   │
//! │                 │                                  │                    │
//! │  ┌──────────────▼──────────────┐   ┌───────────────▼───────────────┐   │
//! │  │  plantapp-client            │   │  ★ plantapp-core (THIS) ★     │   │
//! │  │  HTTP GET + JSON decode     │   │  types • fallback • reducer   │   │
//! │  └─────────────────────────────┘   └───────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire/entity types (Category, Question, response envelope)
//! - [`resource`] - `Resource` trait, `ResourceState<T>`, load phases
//! - [`fallback`] - Embedded snapshots used when the network fails
//! - [`onboarding`] - Onboarding progress and launch routing
//! - [`state`] - The app state tree, actions and the reducer
//! - [`feed`] - Home feed selector (greeting + sections)
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use plantapp_core::state::{reduce, Action, AppState, OnboardingAction};
//!
//! let mut state = AppState::default();
//! reduce(&mut state, Action::Onboarding(OnboardingAction::AdvanceStep));
//! reduce(&mut state, Action::Onboarding(OnboardingAction::SetCompleted(true)));
//!
//! assert_eq!(state.onboarding.current_step, 1);
//! assert!(state.onboarding.has_completed_onboarding);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fallback;
pub mod feed;
pub mod onboarding;
pub mod resource;
pub mod state;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use feed::{Greeting, HomeFeed};
pub use onboarding::{OnboardingNext, OnboardingProgress, Route};
pub use resource::{DataSource, LoadPhase, Resource, ResourceKind, ResourceState, Settlement};
pub use state::{
    reduce, Action, AppState, OnboardingAction, ResourceAction, SliceKey, SliceSnapshot,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of onboarding screens shipped with the app.
///
/// The core never clamps `current_step` against this; it is the default the
/// presentation layer passes to [`OnboardingProgress::next_action`].
pub const DEFAULT_ONBOARDING_STEPS: u32 = 3;
