//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector, falling back to one that matches nothing.
///
/// Used for selector lists owned by extractors and platform signatures: a bad
/// entry is logged and skipped instead of aborting the whole scrape.
///
/// # Arguments
///
/// * `selector_str` - The CSS selector string to parse
/// * `context` - Where the selector comes from, for the error log
pub fn parse_selector_with_fallback(selector_str: &str, context: &str) -> Selector {
    match Selector::parse(selector_str) {
        Ok(selector) => selector,
        Err(e) => {
            log::error!(
                "Failed to parse CSS selector '{}' in {}: {}. Using fallback selector.",
                selector_str,
                context,
                e
            );
            match_nothing()
        }
    }
}

/// Parses a CSS selector that must succeed.
///
/// Only for `LazyLock` statics with literal selectors.
///
/// # Panics
///
/// Panics if the selector cannot be parsed (indicates a programming error).
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

fn match_nothing() -> Selector {
    // `*:not(*)` is valid CSS; the fallback branch is unreachable in practice
    Selector::parse("*:not(*)").unwrap_or_else(|_| unreachable!("'*:not(*)' always parses"))
}
