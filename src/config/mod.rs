#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::cache::DEFAULT_TTL;
use crate::core::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::core::retry::{Backoff, RetryPolicy};
use crate::utils::error::Result;
use crate::utils::format::DEFAULT_MEDIA_HOST;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 覆寫 base URL 的環境變數
pub const BASE_URL_ENV: &str = "CAFE_API_URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackoffKind {
    None,
    Linear,
    Exponential,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    pub media_host: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub backoff: BackoffKind,
    pub retry_step_ms: u64,
    pub max_backoff_ms: u64,
    pub cache_ttl_secs: u64,
    pub cache_busting: bool,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            media_host: DEFAULT_MEDIA_HOST.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            max_retries: 2,
            backoff: BackoffKind::Linear,
            retry_step_ms: 1000,
            max_backoff_ms: 30_000,
            cache_ttl_secs: DEFAULT_TTL.as_secs(),
            cache_busting: true,
            user_agent: format!("cafe-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// 預設值加上環境變數
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                tracing::debug!("Using base URL from {}: {}", BASE_URL_ENV, url);
                self.base_url = url.trim().to_string();
            }
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        let step = Duration::from_millis(self.retry_step_ms);
        let backoff = match self.backoff {
            BackoffKind::None => Backoff::None,
            BackoffKind::Linear => Backoff::Linear { step },
            BackoffKind::Exponential => Backoff::Exponential {
                initial: step,
                max: Duration::from_millis(self.max_backoff_ms),
            },
        };
        RetryPolicy::default()
            .with_max_retries(self.max_retries)
            .with_backoff(backoff)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("client.base_url", &self.base_url)?;
        validation::validate_url("client.media_host", &self.media_host)?;
        validation::validate_positive_number("client.timeout_secs", self.timeout_secs, 1)?;
        validation::validate_range("client.max_retries", self.max_retries, 0, 10)?;
        validation::validate_non_empty_string("client.user_agent", &self.user_agent)?;
        Ok(())
    }
}
