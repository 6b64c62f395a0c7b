//! Text cleanup helpers.

use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

/// Elements whose text never reaches a visitor.
const HIDDEN_TEXT_TAGS: &[&str] = &["script", "style", "noscript", "template", "svg"];

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("body", "BODY_SELECTOR"));

/// Collapses runs of whitespace into single spaces and trims.
///
/// Returns `None` when nothing but whitespace is left.
pub fn clean_text(text: &str) -> Option<String> {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Cleaned text content of a single element, `None` if blank.
pub fn element_text(element: ElementRef<'_>) -> Option<String> {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

/// Separators between the page part and the site part of a `<title>`.
const TITLE_SEPARATORS: &[&str] = &[" | ", " - ", " – ", " — ", " :: ", " • "];

/// Splits a `<title>` on the first separator style it contains.
///
/// "About Us | Acme Plumbing" gives `["About Us", "Acme Plumbing"]`; a title
/// without a separator is a single segment.
pub fn title_segments(title: &str) -> Vec<&str> {
    TITLE_SEPARATORS
        .iter()
        .find(|sep| title.contains(**sep))
        .map(|sep| title.split(*sep).map(str::trim).collect())
        .unwrap_or_else(|| vec![title.trim()])
}

/// Truncates to at most `max_chars` characters (not bytes).
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Visible text below `element`, skipping scripts, styles and similar.
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_TEXT_TAGS.contains(&el.name()))
        });
        if !hidden {
            out.push_str(text);
            out.push(' ');
        }
    }
    clean_text(&out).unwrap_or_default()
}

/// Visible text of the document body (the whole document if there is no body).
pub fn body_text(document: &Html) -> String {
    match document.select(&BODY_SELECTOR).next() {
        Some(body) => visible_text(body),
        None => visible_text(document.root_element()),
    }
}
