// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   site-crawler <BASE_URL> <MAX_CONCURRENCY> <MAX_PAGES> [--json] [--timeout SECS]
//
// clap rejects missing, extra or non-numeric arguments before we ever see
// them. Range checks (limits >= 1, base URL has a host) live in CrawlConfig.
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "site-crawler",
    version = "0.1.0",
    about = "Crawl a website and report how often each internal page is linked",
    long_about = "site-crawler starts at BASE_URL, follows every link that stays on the same host, \
                  and prints each page it found together with the number of links pointing to it."
)]
pub struct Cli {
    /// Website to start from (e.g., https://example.com)
    pub base_url: String,

    /// Maximum number of pages fetched at the same time
    pub max_concurrency: usize,

    /// Maximum number of distinct pages to record
    pub max_pages: usize,

    /// Output the report in JSON format instead of text
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}
