//! Retry loop: run a closure until success or policy says stop.

use super::policy::{ErrorKind, RetryDecision, RetryPolicy};

/// Last error of a retried operation and how many attempts were made.
#[derive(Debug)]
pub struct Exhausted<E> {
    pub attempts: u32,
    pub error: E,
}

/// Runs `f` until it succeeds or the policy says to stop.
/// On a retryable failure, sleeps for the backoff duration then tries again.
pub fn run_with_retry<T, E, C, F>(
    policy: &RetryPolicy,
    classify: C,
    mut f: F,
) -> Result<T, Exhausted<E>>
where
    C: Fn(&E) -> ErrorKind,
    F: FnMut() -> Result<T, E>,
    E: std::fmt::Display,
{
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => match policy.decide(attempt, classify(&e)) {
                RetryDecision::NoRetry => {
                    return Err(Exhausted {
                        attempts: attempt,
                        error: e,
                    })
                }
                RetryDecision::RetryAfter(d) => {
                    tracing::debug!(
                        attempt,
                        delay_ms = d.as_millis() as u64,
                        error = %e,
                        "retrying"
                    );
                    std::thread::sleep(d);
                    attempt += 1;
                }
            },
        }
    }
}
