// src/error.rs
// =============================================================================
// Error types for the crawl core.
//
// Every per-page failure (bad link, failed fetch, non-HTML response) is one of
// these variants. The engine logs them and moves on; only `Configuration`
// stops a crawl, and only before it starts.
//
// main.rs wraps these in anyhow::Error, the rest of the crate returns them
// directly so callers can match on the kind of failure.
// =============================================================================

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    /// The address has no scheme or no host, or could not be parsed at all
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// HTML or URI parsing failed
    #[error("parse error: {0}")]
    Parse(String),

    /// Transport-level failure (DNS, connect, TLS, timeout, redirect loop)
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status code of 400 or above
    #[error("HTTP error fetching {url}: {status}")]
    Http { url: String, status: StatusCode },

    /// The response was not HTML
    #[error("unsupported content type for {url}: '{content_type}'")]
    UnsupportedContentType { url: String, content_type: String },

    /// The body could not be read to the end
    #[error("couldn't read response body of {url}: {source}")]
    BodyRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Bad crawl settings, surfaced once before the crawl starts
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CrawlError {
    pub(crate) fn invalid_address(address: &str, reason: impl ToString) -> Self {
        CrawlError::InvalidAddress {
            address: address.to_string(),
            reason: reason.to_string(),
        }
    }
}
