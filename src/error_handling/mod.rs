//! Error handling for the scrape pipeline.
//!
//! This module provides:
//! - Error type definitions (`ScrapeError` and its sources)
//! - Fetch failure categorization (`ErrorType`)
//! - Retry strategy configuration
//!
//! Errors are split into:
//! - **Fatal**: seed URL validation and seed fetch failures
//! - **Non-fatal**: render fallback, extraction and crawl failures, recorded in
//!   `scrapeErrors`

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_status, get_retry_strategy};
pub use types::{
    ErrorType, ExtractionError, InitializationError, RenderError, ScrapeError,
};
