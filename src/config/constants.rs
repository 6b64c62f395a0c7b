//! Configuration constants.
//!
//! This module defines all configuration constants used throughout the crate,
//! including timeouts, size limits, scoring weights and extraction caps.

// Request defaults
/// Default per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Default number of pages to return (seed page included)
pub const DEFAULT_MAX_PAGES: usize = 5;
/// Fixed pause between sequential crawl requests
pub const DEFAULT_CRAWL_DELAY_MS: u64 = 500;
/// Upper bound for a whole headless render (connect + navigate + capture)
pub const DEFAULT_RENDER_TIMEOUT_MS: u64 = 20_000;
/// Bounded wait for the `body` element after headless navigation
pub const RENDER_BODY_WAIT_MS: u64 = 10_000;
/// Grace period for closing a WebDriver session
pub const SESSION_CLOSE_TIMEOUT_SECS: u64 = 5;
/// Extra attempts for transient seed-fetch failures (connect errors, 429, 502-504)
pub const DEFAULT_MAX_RETRIES: usize = 1;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// WebDriver endpoint used when `WEBDRIVER_URL` is not set.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";

/// Default User-Agent string for HTTP requests.
///
/// Mimics a current desktop Chrome so that builder platforms serve the same
/// markup a visitor would see. Users can override this per request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Accept header sent with every page request.
pub const ACCEPT_HEADER_VALUE: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
/// Accept-Language header sent with every page request.
pub const ACCEPT_LANGUAGE_HEADER_VALUE: &str = "en-US,en;q=0.9";

// Response and body size limits
/// Maximum response body size in bytes (5MB)
pub const MAX_RESPONSE_BODY_SIZE: usize = 5 * 1024 * 1024;
/// Maximum number of redirect hops to follow
pub const MAX_REDIRECT_HOPS: usize = 10;
/// Maximum URL length accepted as a seed
pub const MAX_URL_LENGTH: usize = 2048;

/// File extensions that are never fetched as pages.
pub const BLOCKED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "xls", "xlsx", "zip", "rar", "exe", "dmg"];

/// Content types accepted as HTML documents.
pub const HTML_CONTENT_TYPES: &[&str] = &["text/html", "application/xhtml+xml"];

// Platform scoring
pub const SCRIPT_MATCH_WEIGHT: u32 = 3;
pub const LINK_MATCH_WEIGHT: u32 = 2;
pub const HTML_MATCH_WEIGHT: u32 = 2;
pub const META_MATCH_WEIGHT: u32 = 5;
pub const HEADER_MATCH_WEIGHT: u32 = 4;
/// Scores at or above this are reported with high confidence
pub const HIGH_CONFIDENCE_SCORE: u32 = 10;
/// Scores at or above this (and below high) are reported with medium confidence
pub const MEDIUM_CONFIDENCE_SCORE: u32 = 5;

// Render heuristic
/// Body text shorter than this (in chars) counts as "empty"
pub const EMPTY_BODY_TEXT_CHARS: usize = 500;
/// Fewer headings than this counts as "empty"
pub const MIN_CONTENT_HEADINGS: usize = 2;

// Extraction caps
pub const MAX_IMAGES: usize = 20;
pub const MAX_VIDEOS: usize = 5;
pub const MAX_PAGE_CONTENT_CHARS: usize = 5000;
pub const MAX_PAGE_HEADINGS: usize = 20;
pub const MAX_PAGE_LINKS: usize = 50;
pub const MAX_SERVICES: usize = 12;
pub const MAX_TESTIMONIALS: usize = 10;
pub const MAX_FEATURES: usize = 12;
/// Images declaring a smaller `width` attribute are treated as icons
pub const MIN_IMAGE_WIDTH: u32 = 50;

// Retry strategy
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 5;
