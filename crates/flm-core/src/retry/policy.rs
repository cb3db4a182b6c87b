use crate::config::RetryConfig;
use std::time::Duration;

/// Retry classification of a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/read).
    Timeout,
    /// Network-level failure (connection refused/reset, DNS, etc.).
    Connection,
    /// Anything else; not retried.
    Other,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    NoRetry,
    RetryAfter(Duration),
}

/// Exponential backoff with caps, limited to a set of URL schemes.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Base delay for backoff.
    pub base_delay: Duration,
    /// Upper bound on backoff delay.
    pub max_delay: Duration,
    /// URL schemes the policy is mounted on. Other schemes get one attempt.
    pub schemes: Vec<String>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(30),
            schemes: vec!["http".to_string(), "https".to_string()],
        }
    }
}

impl RetryPolicy {
    /// Builds a policy from config. A negative base delay becomes zero; a
    /// non-finite or oversized one is capped at `max_delay_secs`.
    pub fn from_config(cfg: &RetryConfig) -> Self {
        let max_delay = Duration::from_secs(cfg.max_delay_secs);
        let base_delay = if cfg.base_delay_secs.is_nan() || cfg.base_delay_secs <= 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(cfg.base_delay_secs)
                .unwrap_or(max_delay)
                .min(max_delay)
        };
        Self {
            max_attempts: cfg.max_attempts.max(1),
            base_delay,
            max_delay,
            ..Self::default()
        }
    }

    pub fn applies_to(&self, scheme: &str) -> bool {
        self.schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }

    /// Same policy restricted to a single attempt when `scheme` is not covered.
    pub fn for_scheme(&self, scheme: &str) -> Self {
        if self.applies_to(scheme) {
            self.clone()
        } else {
            Self {
                max_attempts: 1,
                ..self.clone()
            }
        }
    }

    /// `attempt` is 1-based (1 = first attempt).
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        if attempt >= self.max_attempts {
            return RetryDecision::NoRetry;
        }

        match kind {
            ErrorKind::Other => RetryDecision::NoRetry,
            ErrorKind::Timeout | ErrorKind::Connection => {
                // base * 2^(attempt-1), capped.
                let exp = 1u32 << attempt.saturating_sub(1).min(8);
                let raw = self.base_delay.saturating_mul(exp);
                RetryDecision::RetryAfter(raw.min(self.max_delay))
            }
        }
    }
}
