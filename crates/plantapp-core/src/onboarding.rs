//! # Onboarding Progress
//!
//! Single global record of how far the user got through onboarding.
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Onboarding Flow                                 │
//! │                                                                         │
//! │  launch ──► initial_route()                                            │
//! │               │                                                         │
//! │               ├── completed = false ──► Welcome ──► reset()            │
//! │               │                            │                            │
//! │               │                            ▼                            │
//! │               │              step 0 ─► step 1 ─► ... ─► step N-1       │
//! │               │               (next_action = Advance)      │            │
//! │               │                                            ▼            │
//! │               │                              next_action = Paywall     │
//! │               │                                            │            │
//! │               │                        set_completed(true) ◄┘           │
//! │               │                                                         │
//! │               └── completed = true ───► Home                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The record lives only in memory; it starts as `(false, 0)` every launch.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Onboarding completion flag and current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingProgress {
    pub has_completed_onboarding: bool,

    /// Zero-based index of the screen being shown. Not clamped here; the
    /// caller knows how many steps exist.
    pub current_step: u32,
}

/// What the "Continue" button should do on the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingNext {
    /// Move to the given step.
    Advance(u32),
    /// Last step reached: hand off to the paywall.
    Paywall,
}

/// Screen to open at launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Welcome,
    Home,
}

impl OnboardingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// `current_step += 1`, saturating at `u32::MAX`.
    pub fn advance_step(&mut self) {
        self.current_step = self.current_step.saturating_add(1);
    }

    pub fn set_current_step(&mut self, step: u32) {
        self.current_step = step;
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.has_completed_onboarding = completed;
    }

    /// Back to `(false, 0)`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Decides where "Continue" leads given `step_count` onboarding screens.
    pub fn next_action(&self, step_count: u32) -> OnboardingNext {
        if self.current_step.saturating_add(1) < step_count {
            OnboardingNext::Advance(self.current_step + 1)
        } else {
            OnboardingNext::Paywall
        }
    }

    pub fn initial_route(&self) -> Route {
        if self.has_completed_onboarding {
            Route::Home
        } else {
            Route::Welcome
        }
    }
}
