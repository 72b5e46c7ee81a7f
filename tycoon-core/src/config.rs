use serde::{Deserialize, Serialize};

/// Tunables for the dashboard client.
///
/// Every field has a default so a partial JSON document (or none at all)
/// yields a working configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix prepended to every `/api/...` path (e.g. `/play`).
    pub api_base: String,
    pub refresh_period_ms: u64,
    pub autosave_period_ms: u64,
    pub animation_ms: u32,
    /// Number of past days requested from `/api/history`.
    pub history_window: u32,
    pub reset_route: ResetRoute,
    /// Nesting depth after which day-summary values are truncated.
    pub summary_depth_limit: usize,
    pub alert_ttl_ms: u32,
    pub achievement_ttl_ms: u32,
    /// Delay before the welcome notice appears after startup.
    pub welcome_delay_ms: u32,
}

/// Which backend route performs a full reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetRoute {
    #[default]
    StateReset,
    ResetAll,
}

impl ResetRoute {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::StateReset => "/api/state/reset",
            Self::ResetAll => "/api/reset_all",
        }
    }
}

impl ClientConfig {
    pub const REFRESH_PERIOD_MS: u64 = 30_000;
    pub const AUTOSAVE_PERIOD_MS: u64 = 5 * 60 * 1_000;
    pub const ANIMATION_MS: u32 = 700;
    pub const HISTORY_WINDOW: u32 = 7;
    pub const SUMMARY_DEPTH_LIMIT: usize = 32;
    pub const ALERT_TTL_MS: u32 = 5_000;
    pub const ACHIEVEMENT_TTL_MS: u32 = 6_000;
    pub const WELCOME_DELAY_MS: u32 = 1_000;

    #[must_use]
    pub fn default_config() -> Self {
        Self {
            api_base: String::new(),
            refresh_period_ms: Self::REFRESH_PERIOD_MS,
            autosave_period_ms: Self::AUTOSAVE_PERIOD_MS,
            animation_ms: Self::ANIMATION_MS,
            history_window: Self::HISTORY_WINDOW,
            reset_route: ResetRoute::default(),
            summary_depth_limit: Self::SUMMARY_DEPTH_LIMIT,
            alert_ttl_ms: Self::ALERT_TTL_MS,
            achievement_ttl_ms: Self::ACHIEVEMENT_TTL_MS,
            welcome_delay_ms: Self::WELCOME_DELAY_MS,
        }
    }

    /// Parse a configuration document, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Join the configured base with an absolute API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
