use thiserror::Error;

/// Why a list could not be fetched. Every variant is non-fatal to a run:
/// the list is skipped and left out of the manifest.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The catalogued URL does not parse.
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Connection-level failure that outlasted the retry policy.
    #[error("GET {url} failed after {attempts} attempt(s): {source}")]
    Transport {
        url: String,
        attempts: u32,
        #[source]
        source: curl::Error,
    },
    /// A response arrived but its status is not 2xx.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: String, code: u32 },
}
