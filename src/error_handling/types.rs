//! Error type definitions.
//!
//! This module defines all error types used throughout the scraper.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Categories of fetch failures.
///
/// Every `ScrapeError::Fetch` carries one of these so callers (and the retry
/// policy) can tell a timeout from a 404 without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // HTTP/Network errors
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestStatusError,
    HttpRequestTimeoutError,
    HttpRequestRequestError,
    HttpRequestConnectError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
    HttpRequestTooManyRequests,
    HttpRequestBotDetectionError, // 403 Forbidden - typically bot detection
    // Specific HTTP status code errors
    HttpRequestBadRequest,          // 400 Bad Request
    HttpRequestUnauthorized,        // 401 Unauthorized
    HttpRequestNotFound,            // 404 Not Found
    HttpRequestInternalServerError, // 500 Internal Server Error
    HttpRequestBadGateway,          // 502 Bad Gateway
    HttpRequestServiceUnavailable,  // 503 Service Unavailable
    HttpRequestGatewayTimeout,      // 504 Gateway Timeout
    // Response content errors
    NonHtmlContent,
    BodyTooLarge,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests",
            ErrorType::HttpRequestBotDetectionError => "Bot detection (403 Forbidden)",
            ErrorType::HttpRequestBadRequest => "Bad Request (400)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestBadGateway => "Bad Gateway (502)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
            ErrorType::NonHtmlContent => "Non-HTML content type",
            ErrorType::BodyTooLarge => "Response body too large",
        }
    }

    /// Whether a retry has a reasonable chance of succeeding.
    ///
    /// Timeouts are deliberately excluded: the caller's timeout budget is
    /// per request and a slow site rarely gets faster on a second try.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ErrorType::HttpRequestConnectError
                | ErrorType::HttpRequestTooManyRequests
                | ErrorType::HttpRequestBadGateway
                | ErrorType::HttpRequestServiceUnavailable
                | ErrorType::HttpRequestGatewayTimeout
        )
    }
}

/// Failures of the headless render fallback. Always non-fatal.
#[derive(Error, Debug)]
pub enum RenderError {
    /// No headless backend was available to the pipeline.
    #[error("no headless renderer configured")]
    Unavailable,

    /// The WebDriver session could not be created.
    #[error("WebDriver session could not be started: {0}")]
    Session(String),

    /// Navigation or source capture failed inside the browser.
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// The render did not finish within its time budget.
    #[error("render timed out after {0} ms")]
    Timeout(u64),

    /// The browser returned an empty document.
    #[error("rendered document was empty")]
    EmptyDocument,
}

/// Failures raised by an extractor implementation.
///
/// The built-in extractors represent missing data as `None` and never return
/// these; the pipeline still guards against third-party extractors that do.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The extractor could not make sense of the document.
    #[error("{0}")]
    Failed(String),
}

/// Errors surfaced by the scrape pipeline.
///
/// `InvalidUrl`, `UnsupportedContent` and `Fetch` are fatal when they concern
/// the seed URL. `RenderFallback` and `Extraction` are recorded in
/// `scrapeErrors` and never stop the pipeline.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unsupported content at '{url}': .{extension} files are not scraped")]
    UnsupportedContent { url: String, extension: String },

    #[error("Failed to fetch {url}: {kind}: {message}")]
    Fetch {
        url: String,
        kind: ErrorType,
        message: String,
    },

    #[error("Headless render failed for {url}: {source}")]
    RenderFallback {
        url: String,
        #[source]
        source: RenderError,
    },

    #[error("Extractor '{extractor}' failed: {source}")]
    Extraction {
        extractor: String,
        #[source]
        source: ExtractionError,
    },
}

impl ScrapeError {
    /// Builds a fetch error for `url`.
    pub fn fetch(url: impl Into<String>, kind: ErrorType, message: impl Into<String>) -> Self {
        ScrapeError::Fetch {
            url: url.into(),
            kind,
            message: message.into(),
        }
    }

    /// The fetch category, if this is a fetch error.
    pub fn fetch_kind(&self) -> Option<ErrorType> {
        match self {
            ScrapeError::Fetch { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Whether the seed fetch should be retried after this error.
    pub fn is_transient(&self) -> bool {
        self.fetch_kind().is_some_and(|kind| kind.is_transient())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str() {
        assert_eq!(
            ErrorType::HttpRequestTimeoutError.as_str(),
            "HTTP request timeout error"
        );
        assert_eq!(
            ErrorType::HttpRequestBotDetectionError.as_str(),
            "Bot detection (403 Forbidden)"
        );
        assert_eq!(ErrorType::HttpRequestNotFound.as_str(), "Not Found (404)");
        assert_eq!(ErrorType::NonHtmlContent.as_str(), "Non-HTML content type");
    }

    #[test]
    fn test_all_error_types_have_string_representation() {
        for error_type in ErrorType::iter() {
            let str_repr = error_type.as_str();
            assert!(
                !str_repr.is_empty(),
                "{:?} should have non-empty string",
                error_type
            );
        }
    }

    #[test]
    fn test_transient_error_types() {
        assert!(ErrorType::HttpRequestConnectError.is_transient());
        assert!(ErrorType::HttpRequestServiceUnavailable.is_transient());
        assert!(!ErrorType::HttpRequestTimeoutError.is_transient());
        assert!(!ErrorType::HttpRequestNotFound.is_transient());
        assert!(!ErrorType::NonHtmlContent.is_transient());
    }

    #[test]
    fn test_scrape_error_display() {
        let err = ScrapeError::fetch(
            "https://example.com",
            ErrorType::HttpRequestNotFound,
            "status 404",
        );
        assert_eq!(
            err.to_string(),
            "Failed to fetch https://example.com: Not Found (404): status 404"
        );
        assert_eq!(err.fetch_kind(), Some(ErrorType::HttpRequestNotFound));

        let err = ScrapeError::UnsupportedContent {
            url: "https://example.com/brochure.pdf".to_string(),
            extension: "pdf".to_string(),
        };
        assert!(err.to_string().contains(".pdf files are not scraped"));
        assert_eq!(err.fetch_kind(), None);
    }

    #[test]
    fn test_render_fallback_is_not_transient() {
        let err = ScrapeError::RenderFallback {
            url: "https://example.com".to_string(),
            source: RenderError::Timeout(100),
        };
        assert!(!err.is_transient());
        assert!(err.to_string().contains("render timed out after 100 ms"));
    }
}
