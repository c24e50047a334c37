// src/crawl/config.rs
// =============================================================================
// Settings for one crawl. Validated once here, read-only afterwards.
// =============================================================================

use url::Url;

use crate::error::CrawlError;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    seed: String,
    base_url: Url,
    max_concurrency: usize,
    max_pages: usize,
}

impl CrawlConfig {
    // Validates the crawl settings
    //
    // Fails with Configuration when:
    // - base_url doesn't parse or has no host
    // - either limit is zero
    pub fn new(base_url: &str, max_concurrency: usize, max_pages: usize) -> Result<Self, CrawlError> {
        let parsed = Url::parse(base_url).map_err(|e| {
            CrawlError::Configuration(format!("couldn't parse base URL '{}': {}", base_url, e))
        })?;

        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(CrawlError::Configuration(format!(
                "base URL '{}' has no host",
                base_url
            )));
        }
        if max_concurrency == 0 {
            return Err(CrawlError::Configuration(
                "max concurrency must be at least 1".to_string(),
            ));
        }
        if max_pages == 0 {
            return Err(CrawlError::Configuration(
                "max pages must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            seed: base_url.to_string(),
            base_url: parsed,
            max_concurrency,
            max_pages,
        })
    }

    /// The address exactly as the user gave it; the crawl starts here
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Host every fetched page must share with the base URL
    pub fn base_host(&self) -> &str {
        self.base_url.host_str().unwrap_or_default()
    }

    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }
}
