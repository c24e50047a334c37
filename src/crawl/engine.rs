// src/crawl/engine.rs
// =============================================================================
// The crawl engine.
//
// How it works:
// 1. The seed URL becomes the first task
// 2. Each task waits for a free slot (Semaphore with max_concurrency permits)
// 3. It drops out early if the ceiling is hit, the URL is on another host,
//    or the URL can't be normalized
// 4. It offers the page to the VisitRegistry; only the task that claims a
//    page first goes on to fetch it
// 5. Links on the page are resolved against the base URL, and every one becomes a new task, registered with the
//    becomes a new task, registered with the TaskTracker before the parent lets go of its slot
// 6. `crawl` returns once the tracker says every task has finished
//
// Nothing a single task runs into stops the crawl. Failures are logged and the
// task simply returns.
// =============================================================================

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};
use url::Url;

use super::config::CrawlConfig;
use super::registry::{Claim, VisitRegistry};
use super::tracker::TaskTracker;
use crate::normalize::{normalize, NormalizedKey};
use crate::page::{extract_links, PageFetcher};

// Everything a task needs, shared by all tasks of one crawl
struct Shared<F> {
    config: CrawlConfig,
    fetcher: Arc<F>,
    registry: VisitRegistry,
    slots: Semaphore,
    tracker: TaskTracker,
}

/// Crawls the site described by `config` and returns the visit count of
/// every page that was recorded.
///
/// Must be called from inside a tokio runtime.
pub async fn crawl<F>(config: CrawlConfig, fetcher: Arc<F>) -> HashMap<NormalizedKey, usize>
where
    F: PageFetcher + 'static,
{
    let shared = Arc::new(Shared {
        registry: VisitRegistry::new(config.max_pages()),
        slots: Semaphore::new(config.max_concurrency()),
        tracker: TaskTracker::new(),
        fetcher,
        config,
    });

    info!(
        base = %shared.config.seed(),
        max_concurrency = shared.config.max_concurrency(),
        max_pages = shared.config.max_pages(),
        "starting crawl"
    );

    spawn_page(&shared, shared.config.seed().to_string());
    shared.tracker.wait().await;

    let pages = shared.registry.snapshot();
    info!(pages = pages.len(), "crawl finished");
    pages
}

// Registers a task for `url` and hands it to the runtime
//
// The guard is taken here, in the caller, so the tracker already counts the
// child by the time the parent's own guard can be dropped
fn spawn_page<F>(shared: &Arc<Shared<F>>, url: String)
where
    F: PageFetcher + 'static,
{
    let guard = shared.tracker.register();
    let task = crawl_page(Arc::clone(shared), url);
    tokio::spawn(async move {
        let _guard = guard;
        task.await;
    });
}

// One task: claim, fetch, extract, fan out
//
// Boxed because the task spawns copies of itself
fn crawl_page<F>(shared: Arc<Shared<F>>, raw_url: String) -> BoxFuture<'static, ()>
where
    F: PageFetcher + 'static,
{
    async move {
        // The semaphore is never closed, so this only fails if that changes
        let Ok(permit) = shared.slots.acquire().await else {
            return;
        };

        if shared.registry.is_full() {
            debug!(url = %raw_url, "page ceiling reached, not starting");
            return;
        }

        let current = match Url::parse(&raw_url) {
            Ok(url) => url,
            Err(e) => {
                warn!(url = %raw_url, error = %e, "couldn't parse URL");
                return;
            }
        };

        // Exact host match only; sub.example.com is a different site
        let same_host = current
            .host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case(shared.config.base_host()));
        if !same_host {
            debug!(url = %raw_url, "skipping page on another host");
            return;
        }

        let key = match normalize(&raw_url) {
            Ok(key) => key,
            Err(e) => {
                warn!(error = %e, "couldn't normalize URL");
                return;
            }
        };

        match shared.registry.claim(key) {
            Claim::First => {}
            Claim::Revisit => {
                debug!(url = %raw_url, "already seen");
                return;
            }
            Claim::Full => {
                debug!(url = %raw_url, "page ceiling reached, not recording");
                return;
            }
        }

        info!(url = %raw_url, "crawling");

        let body = match shared.fetcher.fetch(&raw_url).await {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %raw_url, error = %e, "couldn't fetch page");
                return;
            }
        };

        // Relative links resolve against the crawl's base URL, not the page
        let links = match extract_links(&body, shared.config.seed()) {
            Ok(links) => links,
            Err(e) => {
                warn!(url = %raw_url, error = %e, "couldn't extract links");
                return;
            }
        };

        debug!(url = %raw_url, links = links.len(), "following links");
        for link in links {
            spawn_page(&shared, link);
        }

        drop(permit);
    }
    .boxed()
}
