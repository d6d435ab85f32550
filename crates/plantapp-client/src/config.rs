//! # App Configuration
//!
//! Where the API lives, how many onboarding screens exist and how loud
//! logging is.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PLANTAPP_API_BASE_URL=http://localhost:8080                        │
//! │     PLANTAPP_API_TIMEOUT_SECS=10                                       │
//! │     PLANTAPP_ONBOARDING_STEPS=3                                        │
//! │     PLANTAPP_LOG=debug                                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $PLANTAPP_CONFIG, else                                             │
//! │     ~/.config/plantapp/plantapp.toml (Linux)                           │
//! │     ~/Library/Application Support/app.plantapp.plantapp/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     production API, no client timeout, 3 onboarding steps              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # plantapp.toml
//! [api]
//! base_url = "https://dummy-api-jtg6bessta-ey.a.run.app"
//! categories_path = "/getCategories"
//! questions_path = "/getQuestions"
//! # timeout_secs = 10   # omit to use the platform default
//!
//! [onboarding]
//! step_count = 3
//!
//! [logging]
//! filter = "info,plantapp=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use plantapp_core::{ResourceKind, DEFAULT_ONBOARDING_STEPS};

use crate::error::{ConfigError, ConfigResult};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://dummy-api-jtg6bessta-ey.a.run.app";

// =============================================================================
// API Settings
// =============================================================================

/// Remote endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Scheme + host (+ optional port) of the API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_categories_path")]
    pub categories_path: String,

    #[serde(default = "default_questions_path")]
    pub questions_path: String,

    /// Whole-request timeout. `None` leaves the platform default in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_categories_path() -> String {
    "/getCategories".to_string()
}

fn default_questions_path() -> String {
    "/getQuestions".to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            categories_path: default_categories_path(),
            questions_path: default_questions_path(),
            timeout_secs: None,
        }
    }
}

impl ApiSettings {
    /// Settings pointing at `base_url` with default paths.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ApiSettings {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// True when `url` is scheme + host (+ port) only. Endpoint paths are
    /// absolute, so anything after the host would be dropped on join.
    pub fn is_origin(url: &url::Url) -> bool {
        url.path() == "/" && url.query().is_none() && url.fragment().is_none()
    }

    /// Path of the endpoint serving `kind`.
    pub fn path(&self, kind: ResourceKind) -> &str {
        match kind {
            ResourceKind::Categories => &self.categories_path,
            ResourceKind::Questions => &self.questions_path,
        }
    }
}

// =============================================================================
// Onboarding / Logging Settings
// =============================================================================

/// Presentation-side onboarding settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingSettings {
    /// Number of onboarding screens before the paywall.
    #[serde(default = "default_step_count")]
    pub step_count: u32,
}

fn default_step_count() -> u32 {
    DEFAULT_ONBOARDING_STEPS
}

impl Default for OnboardingSettings {
    fn default() -> Self {
        OnboardingSettings {
            step_count: default_step_count(),
        }
    }
}

/// Logging settings. `RUST_LOG` still wins over `filter` when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,plantapp=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main App Configuration
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub onboarding: OnboardingSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (plantapp.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::SaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        info!(?path, "Config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let base = url::Url::parse(&self.api.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl(format!(
                "API base URL must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }
        if !ApiSettings::is_origin(&base) {
            return Err(ConfigError::InvalidUrl(format!(
                "API base URL must not carry a path, query or fragment, got: {}",
                self.api.base_url
            )));
        }

        for kind in ResourceKind::ALL {
            if self.api.path(kind).trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} path must not be empty", kind)));
            }
        }

        if self.onboarding.step_count == 0 {
            return Err(ConfigError::Invalid(
                "onboarding.step_count must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides looked up by variable name.
    ///
    /// `load` passes `std::env::var`; tests pass a map so they don't race on
    /// the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("PLANTAPP_API_BASE_URL") {
            debug!(url = %url, "Overriding API base URL from environment");
            self.api.base_url = url;
        }

        if let Some(secs) = lookup("PLANTAPP_API_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.api.timeout_secs = Some(s),
                Err(_) => warn!(value = %secs, "Ignoring non-numeric PLANTAPP_API_TIMEOUT_SECS"),
            }
        }

        if let Some(steps) = lookup("PLANTAPP_ONBOARDING_STEPS") {
            match steps.parse::<u32>() {
                Ok(n) => self.onboarding.step_count = n,
                Err(_) => warn!(value = %steps, "Ignoring non-numeric PLANTAPP_ONBOARDING_STEPS"),
            }
        }

        if let Some(filter) = lookup("PLANTAPP_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Returns the config file path: `PLANTAPP_CONFIG`, else the platform
    /// config directory.
    pub fn default_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("PLANTAPP_CONFIG") {
            return Some(PathBuf::from(path));
        }
        directories::ProjectDirs::from("app", "plantapp", "plantapp")
            .map(|dirs| dirs.config_dir().join("plantapp.toml"))
    }

    /// Number of onboarding screens.
    pub fn onboarding_steps(&self) -> u32 {
        self.onboarding.step_count
    }
}
