//! Content acquisition.
//!
//! One HTTP GET per page with browser-like headers, bounded by a deadline
//! that covers both the request and the body read. Scheme and file-type
//! checks run before anything touches the network.

mod request;
mod response;
mod validate;

use std::time::Duration;

use log::{debug, warn};
use tokio_retry::RetryIf;
use url::Url;

use crate::error_handling::{categorize_reqwest_error, get_retry_strategy, ErrorType, ScrapeError};
use request::RequestHeaders;
use response::read_html_response;

pub use response::{is_html_content_type, FetchedPage};
pub use validate::{blocked_extension, ensure_fetchable, validate_url};

/// Fetches one HTML page.
///
/// The whole exchange runs under `tokio::time::timeout`; when the deadline
/// passes, the request future is dropped, which aborts the connection.
///
/// # Errors
///
/// - `InvalidUrl` / `UnsupportedContent` before any network activity
/// - `Fetch` for network failures, timeouts, non-2xx statuses, non-HTML
///   content and oversized bodies
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &Url,
    timeout_ms: u64,
    user_agent: &str,
) -> Result<FetchedPage, ScrapeError> {
    ensure_fetchable(url)?;
    debug!("Fetching {url} (timeout {timeout_ms} ms)");

    let request = RequestHeaders::apply_to_request_builder(client.get(url.clone()), user_agent);
    let exchange = async {
        let response = request.send().await.map_err(|e| {
            ScrapeError::fetch(url.as_str(), categorize_reqwest_error(&e), e.to_string())
        })?;
        read_html_response(response).await
    };

    match tokio::time::timeout(Duration::from_millis(timeout_ms), exchange).await {
        Ok(result) => result,
        Err(_) => Err(ScrapeError::fetch(
            url.as_str(),
            ErrorType::HttpRequestTimeoutError,
            format!("no complete response within {} ms", timeout_ms),
        )),
    }
}

/// [`fetch_page`] with exponential-backoff retries for transient failures
/// (connect errors, 429, 502, 503, 504).
///
/// At most `max_retries` extra attempts; everything else fails immediately.
pub async fn fetch_with_retry(
    client: &reqwest::Client,
    url: &Url,
    timeout_ms: u64,
    user_agent: &str,
    max_retries: usize,
) -> Result<FetchedPage, ScrapeError> {
    RetryIf::spawn(
        get_retry_strategy(max_retries),
        || fetch_page(client, url, timeout_ms, user_agent),
        |e: &ScrapeError| {
            let transient = e.is_transient();
            if transient {
                warn!("Transient fetch error for {url}: {e}");
            }
            transient
        },
    )
    .await
}
