// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing, filtered by RUST_LOG, written to stderr)
// 3. Validate the crawl settings and build the HTTP fetcher
// 4. Run the crawl and wait for every task to finish
// 5. Print the report (text or JSON) on stdout
// 6. Exit with proper code (0 = success, 1 = error)
// =============================================================================

mod cli;
mod crawl;
mod error;
mod normalize;
mod page;
mod report;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use crawl::CrawlConfig;
use page::HttpFetcher;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = CrawlConfig::new(&cli.base_url, cli.max_concurrency, cli.max_pages)
        .context("invalid crawl settings")?;
    let fetcher = HttpFetcher::new(cli.timeout.map(Duration::from_secs))
        .context("couldn't set up the page fetcher")?;

    let base_url = config.seed().to_string();
    let pages = crawl::crawl(config, Arc::new(fetcher)).await;
    let entries = report::sort_pages(pages);

    if cli.json {
        let json = report::render_json(&base_url, &entries).context("couldn't serialize report")?;
        println!("{}", json);
    } else {
        print!("{}", report::render_text(&base_url, &entries));
    }

    Ok(())
}

// Logs go to stderr so stdout only ever carries the report
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
