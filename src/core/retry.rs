//! Retry decisions for a single logical request.
//!
//! The policy is pure: it looks at the attempt index and what that attempt
//! observed, and answers whether to go again and how long to wait first.

use std::collections::BTreeSet;
use std::time::Duration;

/// Statuses treated as transient: rate limiting and flaky upstreams.
pub const DEFAULT_RETRYABLE_STATUSES: [u16; 4] = [429, 500, 503, 522];

/// What one physical attempt observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observed {
    /// A response arrived with this status code.
    Status(u16),
    /// The request never produced a response (connect/timeout/body read).
    TransportFailure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total physical attempts per logical request, including the first.
    pub max_attempts: u32,
    pub retryable_statuses: BTreeSet<u16>,
    /// Escalate a retryable status that is still failing on the last attempt.
    pub raise_on_exhausted_retries: bool,
    /// Delay before the second attempt; doubles for each one after.
    pub initial_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retryable_statuses: DEFAULT_RETRYABLE_STATUSES.into_iter().collect(),
            raise_on_exhausted_retries: false,
            initial_backoff: Duration::from_millis(250),
        }
    }
}

impl RetryConfig {
    #[must_use]
    pub fn max_attempts(mut self, n: u32) -> Self {
        self.max_attempts = n;
        self
    }

    #[must_use]
    pub fn retryable_statuses(mut self, statuses: impl IntoIterator<Item = u16>) -> Self {
        self.retryable_statuses = statuses.into_iter().collect();
        self
    }

    #[must_use]
    pub fn raise_on_exhausted_retries(mut self, raise: bool) -> Self {
        self.raise_on_exhausted_retries = raise;
        self
    }

    #[must_use]
    pub fn initial_backoff(mut self, d: Duration) -> Self {
        self.initial_backoff = d;
        self
    }
}

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Attempt cap, never below one.
    pub fn max_attempts(&self) -> u32 {
        self.config.max_attempts.max(1)
    }

    /// Whether an observation is transient, ignoring the attempt budget.
    pub fn is_retryable(&self, observed: Observed) -> bool {
        match observed {
            Observed::TransportFailure => true,
            Observed::Status(code) => self.config.retryable_statuses.contains(&code),
        }
    }

    /// Decide what follows attempt `attempt` (1-based).
    ///
    /// Returns the delay to sleep before the next attempt, or `None` when the
    /// observation is final.
    pub fn should_retry(&self, attempt: u32, observed: Observed) -> Option<Duration> {
        if attempt >= self.max_attempts() || !self.is_retryable(observed) {
            return None;
        }
        Some(self.backoff(attempt))
    }

    /// Delay after attempt `attempt`: `initial_backoff * 2^(attempt - 1)`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.config
            .initial_backoff
            .saturating_mul(1u32 << exponent)
    }

    /// True when a final status was retryable but the budget ran out.
    pub fn exhausted_on(&self, attempt: u32, observed: Observed) -> bool {
        attempt >= self.max_attempts() && self.is_retryable(observed)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(
            RetryConfig::default()
                .max_attempts(max_attempts)
                .initial_backoff(Duration::from_millis(100)),
        )
    }

    #[test]
    fn test_retries_transient_status_until_cap() {
        let p = policy(3);
        assert!(p.should_retry(1, Observed::Status(503)).is_some());
        assert!(p.should_retry(2, Observed::Status(429)).is_some());
        assert!(p.should_retry(3, Observed::Status(503)).is_none());
    }

    #[test]
    fn test_does_not_retry_success_or_client_errors() {
        let p = policy(3);
        assert!(p.should_retry(1, Observed::Status(200)).is_none());
        assert!(p.should_retry(1, Observed::Status(404)).is_none());
        assert!(p.should_retry(1, Observed::Status(502)).is_none());
    }

    #[test]
    fn test_retries_transport_failures() {
        let p = policy(2);
        assert!(p.should_retry(1, Observed::TransportFailure).is_some());
        assert!(p.should_retry(2, Observed::TransportFailure).is_none());
    }

    #[test]
    fn test_backoff_grows_with_attempt() {
        let p = policy(5);
        assert_eq!(p.backoff(1), Duration::from_millis(100));
        assert_eq!(p.backoff(2), Duration::from_millis(200));
        assert_eq!(p.backoff(3), Duration::from_millis(400));
        assert_eq!(
            p.should_retry(2, Observed::Status(500)),
            Some(Duration::from_millis(200))
        );
    }

    #[test]
    fn test_zero_max_attempts_is_single_attempt() {
        let p = policy(0);
        assert_eq!(p.max_attempts(), 1);
        assert!(p.should_retry(1, Observed::Status(503)).is_none());
    }

    #[test]
    fn test_custom_retryable_statuses() {
        let p = RetryPolicy::new(RetryConfig::default().retryable_statuses([502]));
        assert!(p.is_retryable(Observed::Status(502)));
        assert!(!p.is_retryable(Observed::Status(503)));
    }

    #[test]
    fn test_exhausted_on() {
        let p = policy(2);
        assert!(!p.exhausted_on(1, Observed::Status(503)));
        assert!(p.exhausted_on(2, Observed::Status(503)));
        assert!(!p.exhausted_on(2, Observed::Status(404)));
    }
}
