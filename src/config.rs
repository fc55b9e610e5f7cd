//! Client and logging configuration.
//!
//! Everything here is fixed once a client is built.

use std::path::PathBuf;
use std::time::Duration;

use crate::core::{ErrorPolicy, RetryConfig};

/// Public Sleeper API root.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Escalate undecodable responses instead of returning an absent result.
    pub raise_errors: bool,
    pub retry: RetryConfig,
    /// Pause before every request.
    pub throttle: Duration,
    pub user_agent: String,
    /// Per-attempt transport timeout.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: SLEEPER_BASE_URL.to_string(),
            raise_errors: true,
            retry: RetryConfig::default(),
            throttle: Duration::ZERO,
            user_agent: concat!("sleeper-ffl/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn raise_errors(mut self, raise: bool) -> Self {
        self.raise_errors = raise;
        self
    }

    #[must_use]
    pub fn max_attempts(mut self, n: u32) -> Self {
        self.retry.max_attempts = n;
        self
    }

    #[must_use]
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Throttle in (possibly fractional) seconds; negative or NaN means none.
    #[must_use]
    pub fn throttle_secs(mut self, secs: f64) -> Self {
        self.throttle = Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO);
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        ErrorPolicy {
            raise_errors: self.raise_errors,
            raise_on_exhausted_retries: self.retry.raise_on_exhausted_retries,
        }
    }
}

/// Where log events go and how verbose they are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Append to this file instead of writing to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
