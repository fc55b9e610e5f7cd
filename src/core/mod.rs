//! Resilient call layer shared by every Sleeper resource.
//!
//! - `retry`: pure retry/backoff decisions
//! - `ledger`: per-client attempt and outcome accounting
//! - `transport`: the one-GET-per-attempt network seam
//! - `http`: the call core that ties them together
//! - `events`: log events not tied to a single request
//! - `cache`: file helpers for locally cached payloads

pub mod cache;
pub mod events;
pub mod http;
pub mod ledger;
pub mod retry;
pub mod transport;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use http::{is_empty_json, ApiSession, ErrorPolicy, RequestOutcome};
pub use ledger::CallLedger;
pub use retry::{Observed, RetryConfig, RetryPolicy};
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
