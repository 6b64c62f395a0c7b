//! Render strategy selection and the headless renderer boundary.
//!
//! Most builder platforms ship their content in the static HTML. A few
//! (Wix, GoDaddy, Duda) can serve a near-empty shell that is filled in by
//! JavaScript. For those, and only when the static document actually looks
//! empty, the pipeline asks a [`Renderer`] for the browser-rendered HTML.

mod webdriver;

use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use scraper::{Html, Selector};
use url::Url;

use crate::config::{EMPTY_BODY_TEXT_CHARS, MIN_CONTENT_HEADINGS};
use crate::error_handling::RenderError;
use crate::parse::body_text;
use crate::platform::PlatformDetectionResult;

pub use webdriver::WebDriverRenderer;

static CONTENT_CONTAINER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(
        "main, article, .content, #content",
        "CONTENT_CONTAINER_SELECTOR",
    )
});
static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe("h1, h2, h3, h4, h5, h6", "HEADING_SELECTOR")
});

/// Produces the rendered HTML of a page through a real browser engine.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Navigates to `url` and returns the rendered document source.
    ///
    /// Implementations must finish (successfully or not) within `timeout`
    /// and release any browser resources on every exit path.
    async fn render(&self, url: &Url, timeout: Duration) -> Result<String, RenderError>;
}

/// Whether the static document should be re-fetched through a renderer.
///
/// Both must hold:
/// - the detected platform is typically client-rendered
/// - the document looks empty: under `EMPTY_BODY_TEXT_CHARS` of body text,
///   no `main`/`article`/`.content`/`#content` container and fewer than
///   `MIN_CONTENT_HEADINGS` headings
pub fn needs_headless_render(document: &Html, detection: &PlatformDetectionResult) -> bool {
    detection.info().js_rendered && looks_empty(document)
}

fn looks_empty(document: &Html) -> bool {
    let text_chars = body_text(document).chars().count();
    let has_container = document.select(&CONTENT_CONTAINER_SELECTOR).next().is_some();
    let headings = document.select(&HEADING_SELECTOR).count();

    text_chars < EMPTY_BODY_TEXT_CHARS && !has_container && headings < MIN_CONTENT_HEADINGS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Confidence, Platform};

    fn detection(platform: Platform) -> PlatformDetectionResult {
        PlatformDetectionResult {
            platform,
            confidence: Confidence::High,
            score: 12,
            indicators: vec![],
        }
    }

    const EMPTY_SHELL: &str =
        r#"<html><head><script src="app.js"></script></head><body><div id="root"></div></body></html>"#;

    #[test]
    fn test_empty_wix_shell_needs_render() {
        let document = Html::parse_document(EMPTY_SHELL);
        assert!(needs_headless_render(&document, &detection(Platform::Wix)));
        assert!(needs_headless_render(&document, &detection(Platform::Duda)));
    }

    #[test]
    fn test_static_platform_never_needs_render() {
        let document = Html::parse_document(EMPTY_SHELL);
        assert!(!needs_headless_render(&document, &detection(Platform::WordPress)));
        assert!(!needs_headless_render(&document, &detection(Platform::Unknown)));
    }

    #[test]
    fn test_content_container_counts_as_content() {
        let document =
            Html::parse_document("<html><body><main><p>Short</p></main></body></html>");
        assert!(!needs_headless_render(&document, &detection(Platform::Wix)));
    }

    #[test]
    fn test_headings_count_as_content() {
        let document =
            Html::parse_document("<html><body><h1>Acme</h1><h2>Services</h2></body></html>");
        assert!(!needs_headless_render(&document, &detection(Platform::GoDaddy)));
    }

    #[test]
    fn test_long_body_text_counts_as_content() {
        let html = format!("<html><body><div>{}</div></body></html>", "word ".repeat(200));
        let document = Html::parse_document(&html);
        assert!(!needs_headless_render(&document, &detection(Platform::Wix)));
    }
}
