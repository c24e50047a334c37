// src/page/mod.rs
// =============================================================================
// Leaf services used by the crawl engine for a single page.
//
// Submodules:
// - http: downloads a page and checks it is HTML
// - html: pulls every anchor target out of a page, resolved to absolute URLs
// =============================================================================

mod html;
mod http;

pub use html::extract_links;
pub use http::{HttpFetcher, PageFetcher};
