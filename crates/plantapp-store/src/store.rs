//! # Store
//!
//! Process-wide state container, owned by the composition root and handed
//! to consumers by cloning the handle.
//!
//! ## Concurrency Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Store Internals                               │
//! │                                                                         │
//! │   Store (Clone) ──► Arc<watch::Sender<Arc<AppState>>>                  │
//! │                                                                         │
//! │   dispatch(action)                                                     │
//! │     send_modify ──► Arc::make_mut(state) ──► reduce(state, action)     │
//! │       • one action at a time, in arrival order                         │
//! │       • copy-on-write: snapshots already handed out never change       │
//! │       • subscribers are woken after the action is fully applied        │
//! │                                                                         │
//! │   snapshot() ──► Arc<AppState>  (clone of the pointer, no waiting on   │
//! │                                  loads; never sees half an action)     │
//! │                                                                         │
//! │   request_load::<R>(source)                                            │
//! │     dispatch(LoadStarted) ──► await fetch ──► dispatch(LoadSettled)    │
//! │       • the only suspension point is the fetch                         │
//! │       • overlapping loads of one kind are NOT deduplicated; whichever  │
//! │         settles last wins. Callers keep one load in flight per kind.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use plantapp_client::RemoteSource;
use plantapp_core::{
    reduce, Action, AppState, Category, OnboardingAction, Question, Resource, ResourceAction,
    ResourceKind, SliceKey, SliceSnapshot,
};
use tokio::sync::watch;
use tracing::{debug, info};

use crate::loader::load_resource;

/// Shared handle to the state tree.
#[derive(Debug, Clone)]
pub struct Store {
    tx: Arc<watch::Sender<Arc<AppState>>>,
}

impl Store {
    /// Creates a store with default state (nothing loaded, onboarding at 0).
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Creates a store seeded with `state`.
    pub fn with_state(state: AppState) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(state));
        Store { tx: Arc::new(tx) }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Immutable snapshot of the whole tree.
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.tx.borrow())
    }

    /// Owned copy of one slice.
    pub fn slice(&self, key: SliceKey) -> SliceSnapshot {
        self.tx.borrow().slice(key)
    }

    /// Runs `f` against the current state.
    ///
    /// `f` must not dispatch; it runs while the current value is borrowed.
    pub fn select<T, F>(&self, f: F) -> T
    where
        F: FnOnce(&AppState) -> T,
    {
        f(&self.tx.borrow())
    }

    /// Receiver that is notified after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.tx.subscribe()
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Applies `action` and returns the snapshot it produced.
    pub fn dispatch(&self, action: Action) -> Arc<AppState> {
        let slice = action.slice();
        let name = action.name();

        let mut produced = None;
        self.tx.send_modify(|state| {
            reduce(Arc::make_mut(state), action);
            produced = Some(Arc::clone(state));
        });

        debug!(?slice, action = name, "Dispatched");
        produced.unwrap_or_else(|| self.snapshot())
    }

    /// Loads resource `R` from `source`, falling back to embedded data on
    /// failure. Always settles; returns the snapshot after settlement.
    pub async fn request_load<R: Resource>(&self, source: &dyn RemoteSource) -> Arc<AppState> {
        self.dispatch(R::wrap(ResourceAction::LoadStarted));

        let settlement = load_resource::<R>(source).await;
        info!(
            resource = %R::KIND,
            source = ?settlement.source(),
            items = settlement.items().len(),
            "Load settled"
        );

        self.dispatch(R::wrap(ResourceAction::LoadSettled(settlement)))
    }

    pub async fn load_categories(&self, source: &dyn RemoteSource) -> Arc<AppState> {
        self.request_load::<Category>(source).await
    }

    pub async fn load_questions(&self, source: &dyn RemoteSource) -> Arc<AppState> {
        self.request_load::<Question>(source).await
    }

    /// Loads both home-feed resources concurrently (what the home screen
    /// does on mount).
    pub async fn load_home_feed(&self, source: &dyn RemoteSource) -> Arc<AppState> {
        tokio::join!(self.load_categories(source), self.load_questions(source));
        self.snapshot()
    }

    /// Clears the error of one resource slice.
    pub fn clear_error(&self, kind: ResourceKind) -> Arc<AppState> {
        match kind {
            ResourceKind::Categories => self.dispatch(Category::wrap(ResourceAction::ClearError)),
            ResourceKind::Questions => self.dispatch(Question::wrap(ResourceAction::ClearError)),
        }
    }

    // =========================================================================
    // Onboarding
    // =========================================================================

    pub fn advance_onboarding(&self) -> Arc<AppState> {
        self.dispatch(Action::Onboarding(OnboardingAction::AdvanceStep))
    }

    pub fn set_onboarding_step(&self, step: u32) -> Arc<AppState> {
        self.dispatch(Action::Onboarding(OnboardingAction::SetStep(step)))
    }

    pub fn set_onboarding_completed(&self, completed: bool) -> Arc<AppState> {
        self.dispatch(Action::Onboarding(OnboardingAction::SetCompleted(completed)))
    }

    /// Marks onboarding done (paywall dismissed or purchase made).
    pub fn complete_onboarding(&self) -> Arc<AppState> {
        self.set_onboarding_completed(true)
    }

    pub fn reset_onboarding(&self) -> Arc<AppState> {
        self.dispatch(Action::Onboarding(OnboardingAction::Reset))
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
