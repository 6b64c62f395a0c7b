//! Configuration types and CLI options.
//!
//! This module defines the per-request `ScrapeOptions` consumed by the library
//! and the `Config` struct parsed from the command line by the binary.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::constants::{
    DEFAULT_CRAWL_DELAY_MS, DEFAULT_MAX_PAGES, DEFAULT_MAX_RETRIES, DEFAULT_RENDER_TIMEOUT_MS,
    DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT, DEFAULT_WEBDRIVER_URL,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON lines for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Options for a single `scrape()` invocation.
///
/// Every field has a default, so callers (and JSON payloads) only need to set
/// what they want to change.
///
/// ```
/// use site_scraper::ScrapeOptions;
///
/// let options = ScrapeOptions {
///     max_pages: 3,
///     follow_links: true,
///     ..Default::default()
/// };
/// assert_eq!(options.timeout_ms, 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrapeOptions {
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// Total pages to return, seed page included
    pub max_pages: usize,
    /// Whether to crawl same-site links found on the seed page
    pub follow_links: bool,
    /// User-Agent header value
    pub user_agent: String,
    /// Whether image URLs (gallery and hero image) are reported
    pub include_images: bool,
    /// Pause between sequential crawl requests
    pub crawl_delay_ms: u64,
    /// Whether client-rendered platforms may be re-fetched through a headless browser
    pub render: bool,
    /// Upper bound for the whole headless render
    pub render_timeout_ms: u64,
    /// Extra attempts for transient seed-fetch failures
    pub max_retries: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_pages: DEFAULT_MAX_PAGES,
            follow_links: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            include_images: true,
            crawl_delay_ms: DEFAULT_CRAWL_DELAY_MS,
            render: true,
            render_timeout_ms: DEFAULT_RENDER_TIMEOUT_MS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Command-line configuration for the `site_scraper` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "site_scraper")]
#[command(about = "Scrape a business website into structured JSON")]
#[command(version)]
pub struct Config {
    /// Seed URL to scrape (http or https)
    pub url: String,

    /// Total pages to return, seed page included
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Do not crawl additional same-site pages
    #[arg(long)]
    pub no_follow_links: bool,

    /// Do not report image URLs
    #[arg(long)]
    pub no_images: bool,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Pause between crawl requests in milliseconds
    #[arg(long, default_value_t = DEFAULT_CRAWL_DELAY_MS)]
    pub crawl_delay_ms: u64,

    /// Never fall back to headless rendering
    #[arg(long)]
    pub no_render: bool,

    /// WebDriver endpoint for headless rendering
    #[arg(long, env = "WEBDRIVER_URL", default_value = DEFAULT_WEBDRIVER_URL)]
    pub webdriver_url: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Pretty-print the JSON result
    #[arg(long)]
    pub pretty: bool,
}

impl Config {
    /// Builds the per-request options from the parsed command line.
    pub fn scrape_options(&self) -> ScrapeOptions {
        ScrapeOptions {
            timeout_ms: self.timeout_ms,
            max_pages: self.max_pages,
            follow_links: !self.no_follow_links,
            user_agent: self.user_agent.clone(),
            include_images: !self.no_images,
            crawl_delay_ms: self.crawl_delay_ms,
            render: !self.no_render,
            ..Default::default()
        }
    }
}
