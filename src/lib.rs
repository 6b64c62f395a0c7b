//! site_scraper library: business website extraction
//!
//! Given the URL of a small-business website, this library fetches the page,
//! works out which site builder produced it (WordPress, Squarespace, Wix,
//! Shopify and friends), optionally re-renders client-side sites through a
//! WebDriver browser, and extracts business details, marketing copy, media
//! assets, SEO metadata and social links into one JSON-serializable record.
//! A few additional same-site pages can be crawled to fill gaps.
//!
//! # Example
//!
//! ```no_run
//! use site_scraper::{scrape, ScrapeOptions};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let options = ScrapeOptions {
//!     max_pages: 3,
//!     ..Default::default()
//! };
//! let result = scrape("https://example.com", Some(options)).await;
//! if let Some(data) = result.data {
//!     println!("{} site: {:?}", data.platform, data.business.name);
//! }
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Headless rendering additionally
//! needs a WebDriver server (chromedriver, geckodriver, or Selenium).

pub mod config;
pub mod crawl;
pub mod domain;
pub mod error_handling;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod pipeline;
pub mod platform;
pub mod render;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, ScrapeOptions};
pub use error_handling::{ExtractionError, RenderError, ScrapeError};
pub use extract::{Extractor, ExtractorRegistry};
pub use models::{
    Feature, PageType, ScrapeResult, ScrapedAssets, ScrapedBusiness, ScrapedContent,
    ScrapedPage, ScrapedSeo, ScrapedSiteData, ScrapedSocial, Testimonial,
};
pub use pipeline::{scrape, Scraper, Stage};
pub use platform::{detect_platform, Confidence, Platform, PlatformDetectionResult};
pub use render::{Renderer, WebDriverRenderer};
