//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{MAX_REDIRECT_HOPS, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Builds the shared HTTP client used for every page fetch.
///
/// Per-request concerns (User-Agent, timeout) are applied to each request
/// rather than baked into the client, so one client serves any number of
/// `scrape()` calls with different options.
///
/// The client follows up to `MAX_REDIRECT_HOPS` redirects, decompresses
/// gzip/brotli/deflate bodies and keeps cookies out of the picture.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend cannot
/// be initialized.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()?;
    Ok(client)
}
