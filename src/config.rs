use std::env;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Settings for the generation client.
#[derive(Clone)]
pub struct PlannerConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for PlannerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlannerConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl PlannerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read settings from the environment.
    ///
    /// A missing credential is not an error here; it only shows up as a
    /// failed generation call.
    pub fn from_env() -> Self {
        let api_key = env::var("API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .unwrap_or_else(|_| {
                warn!(target: "evasion::config", "no API key found in API_KEY or OPENAI_API_KEY");
                String::new()
            });

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("EVASION_BASE_URL")
            .or_else(|_| env::var("OPENAI_BASE_URL"))
            .or_else(|_| env::var("OPENROUTER_BASE_URL"))
        {
            config.base_url = base_url;
        }
        if let Ok(model) = env::var("EVASION_MODEL") {
            config.model = model;
        }
        config
    }
}
