//! Resilient call core: every Sleeper request goes through [`ApiSession::call`].
//!
//! One logical request may take several physical attempts. The session
//! retries under its [`RetryPolicy`], counts every attempt in its
//! [`CallLedger`], classifies the final attempt into a [`RequestOutcome`],
//! emits exactly one log event for it, and then applies the configured
//! [`ErrorPolicy`] to decide between data, an absent result, or an error.

use serde_json::Value;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::core::ledger::CallLedger;
use crate::core::retry::{Observed, RetryPolicy};
use crate::core::transport::{Transport, TransportError};
use crate::{Result, SleeperError};


/// Final classification of one logical request.
#[derive(Debug)]
pub enum RequestOutcome {
    /// 200 with a non-empty JSON body.
    Success(Value),
    /// 200 with `null`, `false`, `0`, `""`, `[]` or `{}`.
    EmptySuccess,
    /// No response on the last attempt.
    TransportError {
        cause: TransportError,
        exhausted: bool,
    },
    /// Any status other than 200 on the last attempt.
    StatusError { status: u16, exhausted: bool },
    /// 200 with a body that is not JSON.
    DecodeError(serde_json::Error),
}

/// Which failed outcomes are escalated to the caller as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPolicy {
    /// Escalate decode failures.
    pub raise_errors: bool,
    /// Escalate retryable statuses and transport failures still failing
    /// after the last attempt.
    pub raise_on_exhausted_retries: bool,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self {
            raise_errors: true,
            raise_on_exhausted_retries: false,
        }
    }
}

impl ErrorPolicy {
    /// Unwrap an outcome into data, absence, or an escalated error.
    pub fn resolve(&self, url: &str, outcome: RequestOutcome) -> Result<Option<Value>> {
        match outcome {
            RequestOutcome::Success(data) => Ok(Some(data)),
            RequestOutcome::EmptySuccess => Ok(None),
            RequestOutcome::TransportError { cause, exhausted } => {
                if exhausted && self.raise_on_exhausted_retries {
                    Err(SleeperError::Transport {
                        url: url.to_string(),
                        source: cause,
                    })
                } else {
                    Ok(None)
                }
            }
            RequestOutcome::StatusError { status, exhausted } => {
                if exhausted && self.raise_on_exhausted_retries {
                    Err(SleeperError::Status {
                        url: url.to_string(),
                        status,
                    })
                } else {
                    Ok(None)
                }
            }
            RequestOutcome::DecodeError(source) => {
                if self.raise_errors {
                    Err(SleeperError::Decode {
                        url: url.to_string(),
                        source,
                    })
                } else {
                    Ok(None)
                }
            }
        }
    }
}

/// Falsy JSON: the API's way of saying "nothing here".
pub fn is_empty_json(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Owns the transport, retry policy, error policy, throttle and ledger of one client.
pub struct ApiSession {
    transport: Box<dyn Transport>,
    retry: RetryPolicy,
    errors: ErrorPolicy,
    throttle: Duration,
    ledger: CallLedger,
}

impl ApiSession {
    pub fn new(
        transport: Box<dyn Transport>,
        retry: RetryPolicy,
        errors: ErrorPolicy,
        throttle: Duration,
    ) -> Self {
        Self {
            transport,
            retry,
            errors,
            throttle,
            ledger: CallLedger::new(),
        }
    }

    pub fn ledger(&self) -> &CallLedger {
        &self.ledger
    }

    /// Fetch `url` and return decoded JSON, or `None` when absent/empty/failed.
    ///
    /// `warn_on_empty` raises the log level of an empty 200 from info to warn.
    /// Only decode failures (and, if enabled, exhausted retries) are errors.
    pub async fn call(&mut self, url: &str, warn_on_empty: bool) -> Result<Option<Value>> {
        let outcome = self.request(url, warn_on_empty).await;
        self.errors.resolve(url, outcome)
    }

    /// Like [`call`](Self::call) but returns the typed outcome untouched.
    pub async fn request(&mut self, url: &str, warn_on_empty: bool) -> RequestOutcome {
        if !self.throttle.is_zero() {
            tokio::time::sleep(self.throttle).await;
        }

        let outcome = self.execute(url).await;
        self.record(url, &outcome, warn_on_empty);
        outcome
    }

    async fn execute(&mut self, url: &str) -> RequestOutcome {
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            self.ledger.record_attempt();

            let (observed, result) = match self.transport.get(url).await {
                Ok(raw) => (Observed::Status(raw.status), Ok(raw)),
                Err(cause) => (Observed::TransportFailure, Err(cause)),
            };

            if let Some(delay) = self.retry.should_retry(attempt, observed) {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                continue;
            }

            let raw = match result {
                Ok(raw) => raw,
                Err(cause) => {
                    return RequestOutcome::TransportError {
                        cause,
                        exhausted: self.retry.exhausted_on(attempt, observed),
                    }
                }
            };

            if raw.status != 200 {
                return RequestOutcome::StatusError {
                    status: raw.status,
                    exhausted: self.retry.exhausted_on(attempt, observed),
                };
            }

            return match serde_json::from_str::<Value>(&raw.body) {
                Ok(data) if is_empty_json(&data) => RequestOutcome::EmptySuccess,
                Ok(data) => RequestOutcome::Success(data),
                Err(e) => RequestOutcome::DecodeError(e),
            };
        }
    }

    fn record(&mut self, url: &str, outcome: &RequestOutcome, warn_on_empty: bool) {
        match outcome {
            RequestOutcome::Success(_) => {
                self.ledger.record_success();
                info!(url, status = 200u16, "request succeeded");
            }
            RequestOutcome::EmptySuccess => {
                self.ledger.record_success();
                if warn_on_empty {
                    warn!(url, status = 200u16, note = "Unexpected Empty/Null Response");
                } else {
                    info!(url, status = 200u16, "empty response");
                }
            }
            RequestOutcome::StatusError { status, .. } => {
                self.ledger.record_failure();
                error!(url, status = *status, "request failed");
            }
            RequestOutcome::TransportError { cause, .. } => {
                self.ledger.record_failure();
                error!(url, cause = %cause, "request failed");
            }
            RequestOutcome::DecodeError(e) => {
                self.ledger.record_failure();
                error!(url, status = 200u16, cause = %e, "response is not valid JSON");
            }
        }
    }
}
