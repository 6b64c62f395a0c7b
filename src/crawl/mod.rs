//! Bounded same-site crawl.
//!
//! After the seed page is extracted, up to `max_pages - 1` links from it are
//! fetched one after another with a fixed politeness delay. Failures are
//! recorded and skipped; they never fail the scrape.

mod filter;

use log::{debug, warn};
use scraper::Html;
use std::time::Duration;
use url::Url;

use crate::config::ScrapeOptions;
use crate::error_handling::ScrapeError;
use crate::extract::Extractor;
use crate::fetch::{fetch_page, FetchedPage};
use crate::models::{ScrapedBusiness, ScrapedPage};

pub use filter::{select_candidates, should_skip};

/// What the crawl produced.
#[derive(Debug, Default)]
pub struct CrawlOutcome {
    /// Crawled pages in fetch order (the seed page is not included)
    pub pages: Vec<ScrapedPage>,
    /// Business fields found on crawled pages, for filling gaps left by the seed
    pub business: ScrapedBusiness,
    /// Non-fatal failures, one per skipped candidate
    pub errors: Vec<ScrapeError>,
}

/// Fetches and summarizes additional pages linked from the seed page.
pub async fn crawl_additional(
    client: &reqwest::Client,
    base: &Url,
    seed_links: &[String],
    options: &ScrapeOptions,
    extractor: &dyn Extractor,
) -> CrawlOutcome {
    let mut outcome = CrawlOutcome::default();
    let limit = options.max_pages.saturating_sub(1);
    if limit == 0 {
        return outcome;
    }

    let candidates = select_candidates(base, seed_links, limit);
    debug!(
        "Crawling {} of {} seed links from {}",
        candidates.len(),
        seed_links.len(),
        base
    );

    for url in &candidates {
        if options.crawl_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(options.crawl_delay_ms)).await;
        }
        match fetch_page(client, url, options.timeout_ms, &options.user_agent).await {
            Ok(fetched) => {
                let (page, business) = summarize(extractor, &fetched);
                debug!("Crawled {} ({:?})", page.url, page.page_type);
                outcome.pages.push(page);
                outcome.business.fill_missing(business);
            }
            Err(e) => {
                warn!("Skipping {}: {}", url, e);
                outcome.errors.push(e);
            }
        }
    }

    outcome
}

fn summarize(extractor: &dyn Extractor, fetched: &FetchedPage) -> (ScrapedPage, ScrapedBusiness) {
    let document = Html::parse_document(&fetched.html);
    (
        extractor.page(&document, &fetched.final_url),
        extractor.business(&document, &fetched.html),
    )
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
