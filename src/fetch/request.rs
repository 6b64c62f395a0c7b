//! Outbound request headers.

use crate::config::{ACCEPT_HEADER_VALUE, ACCEPT_LANGUAGE_HEADER_VALUE};

/// Browser-like request headers.
///
/// Builder platforms vary their markup by client; sending what a desktop
/// browser sends gets us the markup a visitor sees. Compression negotiation
/// (`Accept-Encoding`) is left to reqwest so that bodies are decoded
/// transparently.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
        user_agent: &str,
    ) -> reqwest::RequestBuilder {
        builder
            .header(reqwest::header::USER_AGENT, user_agent)
            .header(reqwest::header::ACCEPT, ACCEPT_HEADER_VALUE)
            .header(
                reqwest::header::ACCEPT_LANGUAGE,
                ACCEPT_LANGUAGE_HEADER_VALUE,
            )
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
    }
}
