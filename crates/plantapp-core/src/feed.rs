//! # Home Feed
//!
//! Read-only view of the state tree as the home screen consumes it.
//!
//! The hour is passed in rather than read from a clock so this stays pure.

use serde::Serialize;

use crate::state::AppState;
use crate::types::{Category, Question};

/// Time-of-day greeting in the home header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
}

impl Greeting {
    /// `hour` is local wall-clock hour, 0-23.
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            0..=11 => Greeting::Morning,
            12..=16 => Greeting::Afternoon,
            _ => Greeting::Evening,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Greeting::Morning => "Good Morning!",
            Greeting::Afternoon => "Good Afternoon!",
            Greeting::Evening => "Good Evening!",
        }
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

/// Everything the home screen renders, borrowed from one snapshot.
///
/// There is no error field: both resources always settle with data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeed<'a> {
    pub greeting: Greeting,
    pub questions: &'a [Question],
    pub questions_loading: bool,
    pub categories: &'a [Category],
    pub categories_loading: bool,
}

impl<'a> HomeFeed<'a> {
    pub fn from_state(state: &'a AppState, hour: u32) -> Self {
        HomeFeed {
            greeting: Greeting::for_hour(hour),
            questions: &state.questions.items,
            questions_loading: state.questions.loading,
            categories: &state.categories.items,
            categories_loading: state.categories.loading,
        }
    }

    /// True when there is nothing to show yet and something is on the way.
    pub fn is_empty_and_loading(&self) -> bool {
        (self.categories.is_empty() && self.categories_loading)
            || (self.questions.is_empty() && self.questions_loading)
    }
}
