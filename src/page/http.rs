// src/page/http.rs
// =============================================================================
// This module downloads pages.
//
// Key functionality:
// - Plain GET with reqwest's default redirect policy and no custom headers
// - Any status >= 400 is an error
// - Anything that is not text/html is rejected before reading the body
// - Every failure is returned as a CrawlError; the caller decides what to do
//
// The fetcher sits behind the PageFetcher trait so the crawl engine can be
// driven by something other than the network (see the engine tests).
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};

use crate::error::CrawlError;

/// Something that can turn an address into an HTML body
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, CrawlError>;
}

/// Fetches pages over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    // Client is reference counted internally, cloning shares the connection pool
    client: Client,
}

impl HttpFetcher {
    // Builds the fetcher
    //
    // timeout: None leaves reqwest without a request timeout, so a server that
    // never answers stalls its task forever
    pub fn new(timeout: Option<Duration>) -> Result<Self, CrawlError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| CrawlError::Configuration(format!("couldn't build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, CrawlError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CrawlError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(CrawlError::Http {
                url: url.to_string(),
                status,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if !content_type.contains("text/html") {
            return Err(CrawlError::UnsupportedContentType {
                url: url.to_string(),
                content_type,
            });
        }

        response.text().await.map_err(|source| CrawlError::BodyRead {
            url: url.to_string(),
            source,
        })
    }
}
