//! Error categorization and retry strategy.
//!
//! This module provides functions to categorize errors and configure retry strategies.

use reqwest::StatusCode;
use std::time::Duration;
use tokio_retry::strategy::ExponentialBackoff;

use super::types::ErrorType;

/// Creates an exponential backoff retry strategy.
///
/// Returns a retry strategy configured with:
/// - Initial delay: `RETRY_INITIAL_DELAY_MS` milliseconds
/// - Backoff factor: `RETRY_FACTOR`
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - At most `max_retries` delays (one per retry after the initial attempt)
pub fn get_retry_strategy(max_retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(crate::config::RETRY_INITIAL_DELAY_MS)
        .factor(crate::config::RETRY_FACTOR)
        .max_delay(Duration::from_secs(crate::config::RETRY_MAX_DELAY_SECS))
        .take(max_retries)
}

/// Maps a non-success HTTP status to an `ErrorType`.
pub fn categorize_status(status: StatusCode) -> ErrorType {
    match status.as_u16() {
        // Client errors (4xx)
        400 => ErrorType::HttpRequestBadRequest,
        401 => ErrorType::HttpRequestUnauthorized,
        403 => ErrorType::HttpRequestBotDetectionError,
        404 => ErrorType::HttpRequestNotFound,
        429 => ErrorType::HttpRequestTooManyRequests,
        // Server errors (5xx)
        500 => ErrorType::HttpRequestInternalServerError,
        502 => ErrorType::HttpRequestBadGateway,
        503 => ErrorType::HttpRequestServiceUnavailable,
        504 => ErrorType::HttpRequestGatewayTimeout,
        // Redirect that was not followed to completion
        _ if status.is_redirection() => ErrorType::HttpRequestRedirectError,
        _ => ErrorType::HttpRequestStatusError,
    }
}

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    // Check HTTP status codes first
    if let Some(status) = error.status() {
        return categorize_status(status);
    }

    // Check reqwest error types
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}
