//! Response checks and body capture.

use log::debug;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use url::Url;

use crate::config::{HTML_CONTENT_TYPES, MAX_RESPONSE_BODY_SIZE};
use crate::error_handling::{categorize_reqwest_error, categorize_status, ErrorType, ScrapeError};

/// A successfully fetched HTML document.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL after redirects
    pub final_url: Url,
    pub status: u16,
    pub headers: HeaderMap,
    pub html: String,
}

/// Whether a `Content-Type` value denotes an HTML document.
pub fn is_html_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    HTML_CONTENT_TYPES.contains(&mime.as_str())
}

/// Validates status and content type, then reads the body up to
/// `MAX_RESPONSE_BODY_SIZE` bytes.
///
/// A missing `Content-Type` header is accepted; some servers don't send it.
pub(crate) async fn read_html_response(
    mut response: reqwest::Response,
) -> Result<FetchedPage, ScrapeError> {
    let final_url = response.url().clone();
    let status = response.status();
    debug!("Final url after redirects: {final_url} ({status})");

    if !status.is_success() {
        return Err(ScrapeError::fetch(
            final_url.as_str(),
            categorize_status(status),
            format!("HTTP status {}", status),
        ));
    }

    let headers = response.headers().clone();
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        let content_type = content_type.to_str().unwrap_or_default();
        if !is_html_content_type(content_type) {
            return Err(ScrapeError::fetch(
                final_url.as_str(),
                ErrorType::NonHtmlContent,
                format!("content type '{}'", content_type),
            ));
        }
    } else {
        debug!("No Content-Type header for {final_url}, continuing anyway");
    }

    let too_large = |size: u64| {
        ScrapeError::fetch(
            final_url.as_str(),
            ErrorType::BodyTooLarge,
            format!("body exceeds {} bytes ({} so far)", MAX_RESPONSE_BODY_SIZE, size),
        )
    };
    if let Some(length) = response.content_length() {
        if length > MAX_RESPONSE_BODY_SIZE as u64 {
            return Err(too_large(length));
        }
    }

    // Read chunk by chunk so a lying or absent Content-Length can't blow the cap
    let mut body: Vec<u8> = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(|e| {
        ScrapeError::fetch(final_url.as_str(), categorize_reqwest_error(&e), e.to_string())
    })? {
        if body.len() + chunk.len() > MAX_RESPONSE_BODY_SIZE {
            return Err(too_large((body.len() + chunk.len()) as u64));
        }
        body.extend_from_slice(&chunk);
    }
    debug!("Body length for {final_url}: {} bytes", body.len());

    Ok(FetchedPage {
        html: String::from_utf8_lossy(&body).into_owned(),
        final_url,
        status: status.as_u16(),
        headers,
    })
}
