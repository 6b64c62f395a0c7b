//! Scrape orchestration.
//!
//! One call walks the stages
//! `Validating → Fetching → Classifying → RenderFallback? → Extracting →
//! Crawling? → Done`. Only validation and the seed fetch can fail the
//! scrape; every later problem is recorded in `scrapeErrors` and the run
//! continues with what it has.
//!
//! Parsed documents (`scraper::Html`) are not `Send`, so they are created
//! and dropped inside synchronous helpers and never live across an
//! `.await`. That keeps [`Scraper::scrape`] usable from `tokio::spawn`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use log::{debug, info, warn};
use reqwest::header::HeaderMap;
use scraper::Html;
use strum_macros::Display;
use url::Url;

use crate::config::ScrapeOptions;
use crate::crawl::crawl_additional;
use crate::error_handling::{InitializationError, RenderError, ScrapeError};
use crate::extract::{build_page, Extractor, ExtractorRegistry, ExtractorResult};
use crate::fetch::{fetch_with_retry, validate_url};
use crate::initialization::init_client;
use crate::models::{ScrapeResult, ScrapedSiteData};
use crate::platform::{detect_platform, PlatformDetectionResult};
use crate::render::{needs_headless_render, Renderer};
use crate::utils::duration_to_ms;

/// Pipeline stages, as they appear in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    Validating,
    Fetching,
    Classifying,
    RenderFallback,
    Extracting,
    Crawling,
    Done,
    Failed,
}

/// Reusable scraper: HTTP client, extractor registry and optional renderer.
///
/// `Scraper` is `Send + Sync`; share it behind an `Arc` to run scrapes
/// concurrently.
///
/// ```no_run
/// use site_scraper::{ScrapeOptions, Scraper};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let scraper = Scraper::new()?;
/// let result = scraper.scrape("https://example.com", &ScrapeOptions::default()).await;
/// println!("{}", serde_json::to_string_pretty(&result)?);
/// # Ok(())
/// # }
/// ```
pub struct Scraper {
    client: reqwest::Client,
    registry: ExtractorRegistry,
    renderer: Option<Arc<dyn Renderer>>,
}

impl Scraper {
    /// Scraper with a fresh HTTP client, every built-in extractor and no renderer.
    pub fn new() -> Result<Self, InitializationError> {
        Ok(Self::with_client(init_client()?))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            registry: ExtractorRegistry::new(),
            renderer: None,
        }
    }

    /// Enables the headless fallback for client-rendered platforms.
    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_registry(mut self, registry: ExtractorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Scrapes `url`. Never panics and never returns an error: failures are
    /// reported inside the [`ScrapeResult`].
    pub async fn scrape(&self, url: &str, options: &ScrapeOptions) -> ScrapeResult {
        let started = Instant::now();
        let mut errors: Vec<String> = Vec::new();

        enter(Stage::Validating, url);
        let seed = match validate_url(url) {
            Ok(seed) => seed,
            Err(e) => return fail(Stage::Validating, e, errors, started),
        };

        enter(Stage::Fetching, seed.as_str());
        let fetched = match fetch_with_retry(
            &self.client,
            &seed,
            options.timeout_ms,
            &options.user_agent,
            options.max_retries,
        )
        .await
        {
            Ok(fetched) => fetched,
            Err(e) => return fail(Stage::Fetching, e, errors, started),
        };
        let final_url = fetched.final_url.clone();
        if final_url != seed {
            debug!("{} redirected to {}", seed, final_url);
        }

        enter(Stage::Classifying, final_url.as_str());
        let (detection, wants_render) = classify(&fetched.html, &fetched.headers);
        info!(
            "{} looks like {} ({:?} confidence, score {})",
            final_url, detection.platform, detection.confidence, detection.score
        );

        let mut html = fetched.html;
        let mut rendered = false;
        if wants_render && options.render {
            enter(Stage::RenderFallback, final_url.as_str());
            match self.render(&final_url, options).await {
                Ok(source) => {
                    html = source;
                    rendered = true;
                }
                Err(source) => {
                    let e = ScrapeError::RenderFallback {
                        url: final_url.to_string(),
                        source,
                    };
                    warn!("{}; continuing with static HTML", e);
                    errors.push(e.to_string());
                }
            }
        }

        enter(Stage::Extracting, final_url.as_str());
        let extractor = self.registry.get(detection.platform);
        let mut extracted = extract_with_fallback(
            extractor,
            self.registry.generic(),
            &html,
            &final_url,
            &mut errors,
        );
        if !options.include_images {
            extracted.assets.images.clear();
            extracted.assets.hero_image = None;
        }

        let mut pages = extracted.pages;
        let mut business = extracted.business;
        if options.follow_links && options.max_pages > 1 {
            enter(Stage::Crawling, final_url.as_str());
            let seed_links = pages.first().map(|page| page.links.clone()).unwrap_or_default();
            let outcome =
                crawl_additional(&self.client, &final_url, &seed_links, options, extractor).await;
            pages.extend(outcome.pages);
            business.fill_missing(outcome.business);
            errors.extend(outcome.errors.iter().map(ToString::to_string));
        }

        let duration_ms = duration_to_ms(started.elapsed());
        enter(Stage::Done, final_url.as_str());
        info!(
            "Scraped {} in {} ms: {} page(s), {} non-fatal error(s)",
            seed,
            duration_ms,
            pages.len(),
            errors.len()
        );

        let data = ScrapedSiteData {
            url: seed.to_string(),
            platform: detection.platform,
            platform_detection: detection,
            business,
            content: extracted.content,
            assets: extracted.assets,
            seo: extracted.seo,
            social: extracted.social,
            pages,
            rendered,
            scraped_at: Utc::now(),
            scrape_errors: errors.clone(),
        };
        ScrapeResult {
            success: true,
            data: Some(data),
            errors,
            duration_ms,
        }
    }

    async fn render(&self, url: &Url, options: &ScrapeOptions) -> Result<String, RenderError> {
        let renderer = self.renderer.as_ref().ok_or(RenderError::Unavailable)?;
        renderer
            .render(url, Duration::from_millis(options.render_timeout_ms))
            .await
    }
}

impl std::fmt::Debug for Scraper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scraper")
            .field("registry", &self.registry)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

/// Scrapes `url` with a default [`Scraper`] (no headless renderer).
///
/// `options` defaults to [`ScrapeOptions::default`].
pub async fn scrape(url: &str, options: Option<ScrapeOptions>) -> ScrapeResult {
    let options = options.unwrap_or_default();
    match Scraper::new() {
        Ok(scraper) => scraper.scrape(url, &options).await,
        Err(e) => ScrapeResult::failed(vec![e.to_string()], 0),
    }
}

fn enter(stage: Stage, subject: &str) {
    debug!("[{}] {}", stage, subject);
}

fn fail(stage: Stage, error: ScrapeError, accumulated: Vec<String>, started: Instant) -> ScrapeResult {
    warn!("[{}] scrape failed during {}: {}", Stage::Failed, stage, error);
    let mut errors = vec![error.to_string()];
    errors.extend(accumulated);
    ScrapeResult::failed(errors, duration_to_ms(started.elapsed()))
}

fn classify(html: &str, headers: &HeaderMap) -> (PlatformDetectionResult, bool) {
    let document = Html::parse_document(html);
    let detection = detect_platform(&document, html, headers);
    let wants_render = needs_headless_render(&document, &detection);
    (detection, wants_render)
}

/// Runs `extractor`, falling back to `generic` when it fails.
///
/// The result always carries the page summary for `url`.
fn extract_with_fallback(
    extractor: &dyn Extractor,
    generic: &dyn Extractor,
    html: &str,
    url: &Url,
    errors: &mut Vec<String>,
) -> ExtractorResult {
    let document = Html::parse_document(html);
    let mut result = match extractor.extract(&document, url, html) {
        Ok(result) => result,
        Err(source) => {
            let e = ScrapeError::Extraction {
                extractor: extractor.name().to_string(),
                source,
            };
            warn!("{}; using the generic extractor", e);
            errors.push(e.to_string());
            match generic.extract(&document, url, html) {
                Ok(result) => result,
                Err(source) => {
                    let e = ScrapeError::Extraction {
                        extractor: generic.name().to_string(),
                        source,
                    };
                    errors.push(e.to_string());
                    ExtractorResult::default()
                }
            }
        }
    };
    if result.pages.is_empty() {
        result.pages.push(build_page(&document, url));
    }
    result
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
