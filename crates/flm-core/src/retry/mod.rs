//! Retry and backoff policy for list downloads.
//!
//! Only transport-level failures (timeouts, refused connections, DNS) are
//! retried. A response with a failing HTTP status is final.

mod classify;
mod policy;
mod run;

pub use classify::classify_curl_error;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::{run_with_retry, Exhausted};
