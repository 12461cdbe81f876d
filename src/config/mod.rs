#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Resolved client settings, after file values and overrides are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl From<TomlConfig> for ClientSettings {
    fn from(config: TomlConfig) -> Self {
        // an unresolved ${VAR} means the variable was not exported
        let token = config.api.token.filter(|t| {
            let unresolved = t.starts_with("${") && t.ends_with('}');
            if unresolved {
                tracing::warn!("Token placeholder {} was not substituted, ignoring it", t);
            }
            !unresolved
        });

        Self {
            base_url: config.api.base_url,
            token,
            timeout_seconds: config.api.timeout_seconds,
            user_agent: config.api.user_agent,
        }
    }
}

impl ConfigProvider for ClientSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        if let Some(token) = &self.token {
            validation::validate_non_empty_string("token", token)?;
        }
        Ok(())
    }
}
