//! Per-client accounting of physical attempts and outcomes.

use serde::Serialize;

/// Attempt and outcome counters owned by one session.
///
/// Only the call core mutates it; everyone else gets a shared borrow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallLedger {
    total_attempts: u64,
    last_call_succeeded: bool,
    has_ever_failed: bool,
}

impl Default for CallLedger {
    fn default() -> Self {
        Self {
            total_attempts: 0,
            last_call_succeeded: true,
            has_ever_failed: false,
        }
    }
}

impl CallLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Physical attempts made over the client's lifetime, retries included.
    pub fn total_attempts(&self) -> u64 {
        self.total_attempts
    }

    pub fn last_call_succeeded(&self) -> bool {
        self.last_call_succeeded
    }

    pub fn has_ever_failed(&self) -> bool {
        self.has_ever_failed
    }

    pub(crate) fn record_attempt(&mut self) {
        self.total_attempts = self.total_attempts.saturating_add(1);
    }

    pub(crate) fn record_success(&mut self) {
        self.last_call_succeeded = true;
    }

    pub(crate) fn record_failure(&mut self) {
        self.last_call_succeeded = false;
        self.has_ever_failed = true;
    }
}
