//! Events that are not tied to a single request.

use tracing::warn;

/// Report that a query produced nothing, naming the operation and its inputs.
pub fn missing(function: &str, args: &[&str], note: &str) {
    warn!(function, args = ?args, note, "no results");
}
