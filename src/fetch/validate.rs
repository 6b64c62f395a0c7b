//! Pre-network URL checks.

use log::warn;
use url::Url;

use crate::config::{BLOCKED_EXTENSIONS, MAX_URL_LENGTH};
use crate::error_handling::ScrapeError;

/// Validates a seed URL string.
///
/// A bare host such as `example.com` gets an `https://` prefix. The result
/// must be an http(s) URL with a host, no longer than `MAX_URL_LENGTH`, whose
/// path does not end in a blocked file extension.
///
/// # Errors
///
/// `ScrapeError::InvalidUrl` for unparsable, over-long or non-http(s) URLs;
/// `ScrapeError::UnsupportedContent` for blocked extensions.
pub fn validate_url(input: &str) -> Result<Url, ScrapeError> {
    let input = input.trim();
    let invalid = |reason: &str| ScrapeError::InvalidUrl {
        url: input.to_string(),
        reason: reason.to_string(),
    };

    if input.is_empty() {
        return Err(invalid("empty URL"));
    }
    if input.len() > MAX_URL_LENGTH {
        warn!(
            "Rejecting URL exceeding maximum length ({} > {}): {}...",
            input.len(),
            MAX_URL_LENGTH,
            input.chars().take(50).collect::<String>()
        );
        return Err(invalid("URL exceeds maximum length"));
    }

    let parsed = match Url::parse(input) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{input}"))
            .map_err(|e| invalid(&e.to_string()))?,
        Err(e) => return Err(invalid(&e.to_string())),
    };

    ensure_fetchable(&parsed)?;
    Ok(parsed)
}

/// Checks scheme, host and file extension of an already-parsed URL.
///
/// Runs before every fetch (seed and crawl candidates) so nothing blocked
/// ever reaches the network.
pub fn ensure_fetchable(url: &Url) -> Result<(), ScrapeError> {
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ScrapeError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}', expected http or https", other),
            })
        }
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => {
            return Err(ScrapeError::InvalidUrl {
                url: url.to_string(),
                reason: "URL has no host".to_string(),
            })
        }
    }
    if let Some(extension) = blocked_extension(url) {
        return Err(ScrapeError::UnsupportedContent {
            url: url.to_string(),
            extension,
        });
    }
    Ok(())
}

/// The blocked extension the URL path ends with, if any (case-insensitive).
pub fn blocked_extension(url: &Url) -> Option<String> {
    let last_segment = url.path().rsplit('/').next()?;
    let (_, extension) = last_segment.rsplit_once('.')?;
    let extension = extension.to_ascii_lowercase();
    BLOCKED_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}
