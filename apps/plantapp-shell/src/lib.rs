//! # PlantApp Shell
//!
//! Composition root: owns the only `Store` and the only `HttpSource`, and
//! performs the launch sequence a screen host would.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • RUST_LOG wins, else the built-in default filter                   │
//! │                                                                         │
//! │  2. Load Config ──────────────────────────────────────────────────────► │
//! │     • defaults → plantapp.toml → PLANTAPP_* env vars                    │
//! │     • swap in [logging].filter (still overridden by RUST_LOG)           │
//! │                                                                         │
//! │  3. Build HttpSource + Store ─────────────────────────────────────────► │
//! │                                                                         │
//! │  4. Boot ─────────────────────────────────────────────────────────────► │
//! │     • pick the launch route from onboarding progress                    │
//! │     • load categories and questions concurrently                        │
//! │     • summarize what the home screen would render                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Context;
use chrono::Timelike;
use plantapp_client::{AppConfig, HttpSource, LoggingSettings, RemoteSource};
use plantapp_core::{AppState, DataSource, Greeting, HomeFeed, OnboardingNext, Route};
use plantapp_store::Store;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// What the launch produced, as the first rendered screen would show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSummary {
    pub route: Route,
    pub greeting: Greeting,
    pub categories: usize,
    pub categories_source: Option<DataSource>,
    pub questions: usize,
    pub questions_source: Option<DataSource>,
    /// Where "Continue" leads from the current onboarding step.
    pub onboarding_next: OnboardingNext,
}

impl LaunchSummary {
    pub fn from_state(state: &AppState, hour: u32, step_count: u32) -> Self {
        let feed = HomeFeed::from_state(state, hour);
        LaunchSummary {
            route: state.onboarding.initial_route(),
            greeting: feed.greeting,
            categories: feed.categories.len(),
            categories_source: state.categories.source(),
            questions: feed.questions.len(),
            questions_source: state.questions.source(),
            onboarding_next: state.onboarding.next_action(step_count),
        }
    }
}

/// Runs the launch sequence against `source` and summarizes the result.
pub async fn boot(
    store: &Store,
    source: &dyn RemoteSource,
    hour: u32,
    step_count: u32,
) -> LaunchSummary {
    let route = store.select(|s| s.onboarding.initial_route());
    info!(?route, "Launch route selected");

    let state = store.load_home_feed(source).await;
    let summary = LaunchSummary::from_state(&state, hour, step_count);

    info!(
        greeting = %summary.greeting,
        categories = summary.categories,
        categories_source = ?summary.categories_source,
        questions = summary.questions,
        questions_source = ?summary.questions_source,
        "Home feed ready"
    );
    summary
}

/// Entry point used by `main`.
pub async fn run() -> anyhow::Result<()> {
    let log_filter = init_tracing(&LoggingSettings::default().filter);

    let config_path = AppConfig::default_config_path();
    info!(path = ?config_path, "Resolving configuration");
    let config = AppConfig::load_or_default(config_path);

    if let Err(e) = log_filter.reload(env_filter(&config.logging.filter)) {
        warn!("Failed to apply configured log filter: {}", e);
    }

    info!(base_url = %config.api.base_url, "Starting PlantApp");

    let source = HttpSource::new(&config.api).context("building HTTP source")?;
    let store = Store::new();

    let hour = chrono::Local::now().hour();
    let summary = boot(&store, &source, hour, config.onboarding_steps()).await;

    info!(?summary, "Launch complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// The filter starts at `default_filter` so config loading is logged, and
/// is swapped through the returned handle once `[logging].filter` is known.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=plantapp_store=trace` - Trace one crate only
/// - Default: `default_filter`, then the configured filter
fn init_tracing(default_filter: &str) -> reload::Handle<EnvFilter, Registry> {
    let (filter, handle) = reload::Layer::new(env_filter(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
    handle
}

/// `RUST_LOG` wins over `fallback`.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use plantapp_client::{NetworkError, NetworkResult};
    use plantapp_core::ResourceKind;

    struct Offline;

    #[async_trait]
    impl RemoteSource for Offline {
        async fn fetch_body(&self, kind: ResourceKind) -> NetworkResult<Vec<u8>> {
            Err(NetworkError::Transport {
                url: format!("https://offline/{}", kind),
                message: "network unreachable".into(),
            })
        }
    }

    #[tokio::test]
    async fn test_offline_launch_shows_fallback_feed() {
        let store = Store::new();

        let summary = boot(&store, &Offline, 9, 3).await;

        assert_eq!(summary.route, Route::Welcome);
        assert_eq!(summary.greeting, Greeting::Morning);
        assert_eq!(summary.categories, 4);
        assert_eq!(summary.questions, 3);
        assert_eq!(summary.categories_source, Some(DataSource::Fallback));
        assert_eq!(summary.questions_source, Some(DataSource::Fallback));
        assert_eq!(summary.onboarding_next, OnboardingNext::Advance(1));
    }

    #[tokio::test]
    async fn test_returning_user_lands_on_home() {
        let store = Store::new();
        store.set_onboarding_step(2);
        store.complete_onboarding();

        let summary = boot(&store, &Offline, 20, 3).await;

        assert_eq!(summary.route, Route::Home);
        assert_eq!(summary.greeting, Greeting::Evening);
        assert_eq!(summary.onboarding_next, OnboardingNext::Paywall);
    }
}
