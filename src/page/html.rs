// src/page/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which recovers from broken markup instead of failing
//
// We also use the `url` crate to resolve every href against a base address
// with standard relative-reference rules (relative paths, "//host/x", "#frag",
// absolute). The crawl engine passes the crawl's base URL as that address.
//
// Filtering is NOT done here. Duplicates and links to other sites are returned
// as-is; the crawl engine decides what to follow.
// =============================================================================

use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use crate::error::CrawlError;

// Extracts all anchor targets from HTML content, in document order
//
// Parameters:
//   html: the page body
//   base_url: the address relative links are resolved against
//
// Returns: absolute URLs, or a Parse error when base_url itself is unusable
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   base_url = "https://example.com"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, base_url: &str) -> Result<Vec<String>, CrawlError> {
    let base = Url::parse(base_url)
        .map_err(|e| CrawlError::Parse(format!("invalid base URL '{}': {}", base_url, e)))?;

    let selector = Selector::parse("a[href]")
        .map_err(|e| CrawlError::Parse(format!("anchor selector: {}", e)))?;

    let document = Html::parse_document(html);

    let mut links = Vec::new();
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        // A broken href only costs us that one link
        match base.join(href) {
            Ok(resolved) => links.push(resolved.to_string()),
            Err(e) => warn!(href, base = %base, error = %e, "couldn't parse href"),
        }
    }

    Ok(links)
}
