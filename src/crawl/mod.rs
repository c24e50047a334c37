// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Concurrent crawling: every discovered link becomes its own tokio task
// - A fixed number of fetches in flight at once (max concurrency)
// - A hard ceiling on the number of distinct pages recorded (max pages)
// - Same-host restriction: links to other sites are never fetched
// - Counts how many times each page was reached
//
// Submodules:
// - config: validated crawl settings
// - registry: the shared page -> visit count map
// - tracker: completion detection for the growing set of tasks
// - engine: the per-page algorithm and the `crawl` entry point
// =============================================================================

mod config;
mod engine;
mod registry;
mod tracker;

pub use config::CrawlConfig;
pub use engine::crawl;
