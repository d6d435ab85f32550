//! # App State Tree
//!
//! The process-wide state tree, the actions that change it and the reducer
//! that applies them.
//!
//! ## Dispatch Routing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         reduce(state, action)                           │
//! │                                                                         │
//! │  Action::Categories(a) ──► state.categories  (ResourceState<Category>)  │
//! │  Action::Questions(a)  ──► state.questions   (ResourceState<Question>)  │
//! │  Action::Onboarding(a) ──► state.onboarding  (OnboardingProgress)       │
//! │                                                                         │
//! │  ResourceAction:   LoadStarted | LoadSettled | LoadFailed | ClearError  │
//! │  OnboardingAction: AdvanceStep | SetStep | SetCompleted | Reset         │
//! │                                                                         │
//! │  One action touches exactly one slice. No I/O, no clocks.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::error::CoreError;
use crate::fallback::{fallback_categories, fallback_questions};
use crate::onboarding::OnboardingProgress;
use crate::resource::{Resource, ResourceKind, ResourceState, Settlement};
use crate::types::{CategoriesResponse, Category, Question};

// =============================================================================
// State Tree
// =============================================================================

/// Whole client state. Cheap to clone relative to how rarely it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub categories: ResourceState<Category>,
    pub questions: ResourceState<Question>,
    pub onboarding: OnboardingProgress,
}

/// Key of a top-level slice of [`AppState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceKey {
    Categories,
    Questions,
    Onboarding,
}

impl From<ResourceKind> for SliceKey {
    fn from(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Categories => SliceKey::Categories,
            ResourceKind::Questions => SliceKey::Questions,
        }
    }
}

impl std::str::FromStr for SliceKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "categories" => Ok(SliceKey::Categories),
            "questions" => Ok(SliceKey::Questions),
            "onboarding" => Ok(SliceKey::Onboarding),
            other => Err(CoreError::UnknownSlice(other.to_string())),
        }
    }
}

/// Owned copy of one slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SliceSnapshot {
    Categories(ResourceState<Category>),
    Questions(ResourceState<Question>),
    Onboarding(OnboardingProgress),
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies out the slice stored under `key`.
    pub fn slice(&self, key: SliceKey) -> SliceSnapshot {
        match key {
            SliceKey::Categories => SliceSnapshot::Categories(self.categories.clone()),
            SliceKey::Questions => SliceSnapshot::Questions(self.questions.clone()),
            SliceKey::Onboarding => SliceSnapshot::Onboarding(self.onboarding),
        }
    }

    /// True while any resource is loading.
    pub fn is_loading(&self) -> bool {
        self.categories.loading || self.questions.loading
    }
}

// =============================================================================
// Actions
// =============================================================================

/// State transitions of a resource slice.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceAction<T> {
    LoadStarted,
    LoadSettled(Settlement<T>),
    /// Pipeline failure that fallback could not absorb.
    LoadFailed(String),
    ClearError,
}

impl<T> ResourceAction<T> {
    pub fn name(&self) -> &'static str {
        match self {
            ResourceAction::LoadStarted => "load_started",
            ResourceAction::LoadSettled(_) => "load_settled",
            ResourceAction::LoadFailed(_) => "load_failed",
            ResourceAction::ClearError => "clear_error",
        }
    }

    fn apply(self, slice: &mut ResourceState<T>) {
        match self {
            ResourceAction::LoadStarted => slice.begin_load(),
            ResourceAction::LoadSettled(settlement) => slice.settle(settlement),
            ResourceAction::LoadFailed(message) => slice.fail(message),
            ResourceAction::ClearError => slice.clear_error(),
        }
    }
}

/// State transitions of the onboarding slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingAction {
    AdvanceStep,
    SetStep(u32),
    SetCompleted(bool),
    Reset,
}

impl OnboardingAction {
    pub fn name(&self) -> &'static str {
        match self {
            OnboardingAction::AdvanceStep => "advance_step",
            OnboardingAction::SetStep(_) => "set_step",
            OnboardingAction::SetCompleted(_) => "set_completed",
            OnboardingAction::Reset => "reset",
        }
    }
}

/// One named change addressed to the slice that owns it.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Categories(ResourceAction<Category>),
    Questions(ResourceAction<Question>),
    Onboarding(OnboardingAction),
}

impl Action {
    pub fn slice(&self) -> SliceKey {
        match self {
            Action::Categories(_) => SliceKey::Categories,
            Action::Questions(_) => SliceKey::Questions,
            Action::Onboarding(_) => SliceKey::Onboarding,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Categories(a) => a.name(),
            Action::Questions(a) => a.name(),
            Action::Onboarding(a) => a.name(),
        }
    }
}

/// Applies one action to the slice that owns it.
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::Categories(a) => a.apply(&mut state.categories),
        Action::Questions(a) => a.apply(&mut state.questions),
        Action::Onboarding(a) => {
            let progress = &mut state.onboarding;
            match a {
                OnboardingAction::AdvanceStep => progress.advance_step(),
                OnboardingAction::SetStep(step) => progress.set_current_step(step),
                OnboardingAction::SetCompleted(done) => progress.set_completed(done),
                OnboardingAction::Reset => progress.reset(),
            }
        }
    }
}

// =============================================================================
// Resource Bindings
// =============================================================================

impl Resource for Category {
    const KIND: ResourceKind = ResourceKind::Categories;

    type Envelope = CategoriesResponse;

    fn into_items(envelope: CategoriesResponse) -> Vec<Self> {
        envelope.data
    }

    fn fallback() -> Vec<Self> {
        fallback_categories()
    }

    fn slice(state: &AppState) -> &ResourceState<Self> {
        &state.categories
    }

    fn wrap(action: ResourceAction<Self>) -> Action {
        Action::Categories(action)
    }
}

impl Resource for Question {
    const KIND: ResourceKind = ResourceKind::Questions;

    type Envelope = Vec<Question>;

    fn into_items(envelope: Vec<Question>) -> Vec<Self> {
        envelope
    }

    fn fallback() -> Vec<Self> {
        fallback_questions()
    }

    fn slice(state: &AppState) -> &ResourceState<Self> {
        &state.questions
    }

    fn wrap(action: ResourceAction<Self>) -> Action {
        Action::Questions(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{DataSource, LoadPhase};

    fn question(id: i64) -> Question {
        Question {
            id,
            title: format!("Question {}", id),
            subtitle: String::new(),
            image_uri: String::new(),
            uri: String::new(),
            order: id as i32,
        }
    }

    #[test]
    fn test_actions_only_touch_their_slice() {
        let mut state = AppState::new();
        reduce(&mut state, Action::Questions(ResourceAction::LoadStarted));

        assert!(state.questions.loading);
        assert!(state.categories.is_idle());
        assert_eq!(state.onboarding, OnboardingProgress::default());
        assert!(state.is_loading());
    }

    #[test]
    fn test_settled_fallback_has_no_error() {
        let mut state = AppState::new();
        reduce(&mut state, Action::Categories(ResourceAction::LoadStarted));
        reduce(
            &mut state,
            Action::Categories(ResourceAction::LoadSettled(Settlement::Fallback {
                items: Category::fallback(),
                reason: "HTTP 500".into(),
            })),
        );

        assert_eq!(state.categories.items.len(), 4);
        assert_eq!(state.categories.error, None);
        assert!(!state.categories.loading);
        assert_eq!(state.categories.phase, LoadPhase::Settled(DataSource::Fallback));
    }

    #[test]
    fn test_onboarding_actions() {
        let mut state = AppState::new();
        reduce(&mut state, Action::Onboarding(OnboardingAction::AdvanceStep));
        reduce(&mut state, Action::Onboarding(OnboardingAction::AdvanceStep));
        assert_eq!(state.onboarding.current_step, 2);

        reduce(&mut state, Action::Onboarding(OnboardingAction::SetStep(0)));
        reduce(&mut state, Action::Onboarding(OnboardingAction::SetCompleted(true)));
        assert_eq!(state.onboarding.current_step, 0);
        assert!(state.onboarding.has_completed_onboarding);

        reduce(&mut state, Action::Onboarding(OnboardingAction::Reset));
        assert_eq!(state.onboarding, OnboardingProgress::default());
    }

    #[test]
    fn test_clear_error_leaves_items_and_loading() {
        let mut state = AppState::new();
        reduce(
            &mut state,
            Action::Questions(ResourceAction::LoadSettled(Settlement::Live(vec![question(1)]))),
        );
        reduce(&mut state, Action::Questions(ResourceAction::LoadFailed("boom".into())));
        reduce(&mut state, Action::Questions(ResourceAction::ClearError));

        assert_eq!(state.questions.error, None);
        assert_eq!(state.questions.items, vec![question(1)]);
        assert!(!state.questions.loading);
    }

    #[test]
    fn test_slice_by_key() {
        let mut state = AppState::new();
        reduce(&mut state, Action::Onboarding(OnboardingAction::SetStep(2)));

        match state.slice("onboarding".parse().unwrap()) {
            SliceSnapshot::Onboarding(progress) => assert_eq!(progress.current_step, 2),
            other => panic!("unexpected slice: {:?}", other),
        }
        assert!("garden".parse::<SliceKey>().is_err());
        assert_eq!(SliceKey::from(ResourceKind::Questions), SliceKey::Questions);
    }

    #[test]
    fn test_action_routing_metadata() {
        let action = Question::wrap(ResourceAction::LoadStarted);
        assert_eq!(action.slice(), SliceKey::Questions);
        assert_eq!(action.name(), "load_started");
        assert_eq!(
            Action::Onboarding(OnboardingAction::SetCompleted(true)).name(),
            "set_completed"
        );
    }
}
