//! HTTP GET of filter lists.
//!
//! Uses the curl crate (libcurl). Every request carries a `t=<unix time>`
//! query parameter so CDN caches in front of list hosts are bypassed.

mod cache_bust;
mod error;

pub use cache_bust::cache_busting_url;
pub use error::FetchError;

use crate::config::FlmConfig;
use crate::retry::{classify_curl_error, run_with_retry, RetryPolicy};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Status code and raw body of one completed transfer.
struct Response {
    code: u32,
    body: Vec<u8>,
}

/// Blocking list downloader with transport-level retry.
#[derive(Debug, Clone)]
pub struct Fetcher {
    policy: RetryPolicy,
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::from_config(&FlmConfig::default())
    }
}

impl Fetcher {
    pub fn from_config(cfg: &FlmConfig) -> Self {
        let policy = cfg
            .retry
            .as_ref()
            .map(RetryPolicy::from_config)
            .unwrap_or_default();
        Self {
            policy,
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            user_agent: cfg.user_agent.clone(),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// GET `url` and return the body as text.
    ///
    /// Transport failures are retried per the policy; a non-2xx status is
    /// returned as [`FetchError::Status`] without retrying.
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let target = cache_busting_url(url, now).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let policy = self.policy.for_scheme(target.scheme());
        let response = run_with_retry(&policy, classify_curl_error, || {
            self.get_once(target.as_str())
        })
        .map_err(|e| FetchError::Transport {
            url: url.to_string(),
            attempts: e.attempts,
            source: e.error,
        })?;

        if !(200..300).contains(&response.code) {
            return Err(FetchError::Status {
                url: url.to_string(),
                code: response.code,
            });
        }

        Ok(String::from_utf8_lossy(&response.body).into_owned())
    }

    fn get_once(&self, url: &str) -> Result<Response, curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.accept_encoding("")?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok(Response { code, body })
    }
}
