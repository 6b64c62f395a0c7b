//! Document-level metadata: title, meta tags, canonical link.

use scraper::{Html, Selector};
use std::sync::LazyLock;

use crate::parse::text::{clean_text, element_text};

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("title", "TITLE_SELECTOR"));
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("meta[content]", "META_SELECTOR"));
static CANONICAL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe("link[rel='canonical'][href]", "CANONICAL_SELECTOR")
});

/// Text of the first `<title>` element.
pub fn extract_title(document: &Html) -> Option<String> {
    let title = document.select(&TITLE_SELECTOR).next().and_then(element_text);
    if title.is_none() {
        log::debug!("No title element found in document");
    }
    title
}

/// Content of the first `<meta>` whose `name` or `property` equals `key`
/// (ASCII case-insensitive), cleaned.
///
/// Covers both `<meta name="description">` and `<meta property="og:image">`.
pub fn meta_content(document: &Html, key: &str) -> Option<String> {
    document
        .select(&META_SELECTOR)
        .filter(|element| {
            let value = element.value();
            value
                .attr("name")
                .or_else(|| value.attr("property"))
                .is_some_and(|name| name.trim().eq_ignore_ascii_case(key))
        })
        .find_map(|element| element.value().attr("content").and_then(clean_text))
}

/// `<meta name="description">`, falling back to `og:description`.
pub fn extract_meta_description(document: &Html) -> Option<String> {
    meta_content(document, "description").or_else(|| meta_content(document, "og:description"))
}

/// Comma-separated `<meta name="keywords">`, trimmed and lowercased.
pub fn extract_meta_keywords(document: &Html) -> Vec<String> {
    meta_content(document, "keywords")
        .map(|content| {
            content
                .split(',')
                .map(|keyword| keyword.trim().to_lowercase())
                .filter(|keyword| !keyword.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Raw `href` of `<link rel="canonical">`.
pub fn extract_canonical_href(document: &Html) -> Option<String> {
    document
        .select(&CANONICAL_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("href"))
        .and_then(clean_text)
}
