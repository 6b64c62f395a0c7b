//! Page type classification.

use crate::models::PageType;

use super::text::title_segments;

/// Keyword groups in priority order; the first group with a hit wins.
///
/// Keywords match at the start of a word (after `/`, `-`, `_` or the start of
/// the haystack). A leading `/` restricts the keyword to the start of a path
/// segment, so `/plans` matches `/plans` but not `/floor-plans`.
const PAGE_TYPE_KEYWORDS: &[(PageType, &[&str])] = &[
    (PageType::Contact, &["contact", "get-in-touch", "reach-us", "locations"]),
    (PageType::About, &["about", "our-story", "who-we-are", "our-team", "meet-the-team"]),
    (PageType::Services, &["service", "what-we-do", "offerings", "solutions", "treatments"]),
    (PageType::Pricing, &["pricing", "prices", "/plans", "/rates", "packages"]),
    (PageType::Portfolio, &["portfolio", "gallery", "our-work", "projects", "case-stud"]),
    (PageType::Blog, &["blog", "news", "articles", "posts", "journal"]),
];

const HOME_PATHS: &[&str] = &["", "/", "/index", "/index.html", "/index.php", "/home"];

/// Phrases typical of a page's own copy. Navigation menus repeat the path
/// keywords on every page, so the body is matched on these instead.
const BODY_PHRASES: &[(PageType, &[&str])] = &[
    (PageType::Contact, &["send us a message", "fill out the form", "get back to you"]),
    (PageType::Pricing, &["per month", "/month", "billed annually"]),
    (PageType::Blog, &["posted on", "min read"]),
];

/// Classifies a page from its path, then its title, then its body copy.
///
/// `/` (and `index.html`-style paths) are always `home`; anything without a
/// keyword hit is `other`. Only the page part of the title is considered:
/// in "FAQ | Acme Plumbing Services" the trailing site name is ignored.
pub fn determine_page_type(path: &str, title: Option<&str>, body_text: &str) -> PageType {
    let path = path.trim().trim_end_matches('/').to_ascii_lowercase();
    if HOME_PATHS.contains(&path.as_str()) {
        return PageType::Home;
    }

    if let Some(page_type) = match_keywords(&path) {
        return page_type;
    }

    if let Some(page_type) = title.and_then(match_title) {
        return page_type;
    }

    let body = body_text.to_lowercase();
    BODY_PHRASES
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|p| body.contains(p)))
        .map(|(page_type, _)| *page_type)
        .unwrap_or(PageType::Other)
}

fn match_title(title: &str) -> Option<PageType> {
    let segments = title_segments(title);
    // The last segment is the site name repeated on every page
    let page_part = match segments.len() {
        0 | 1 => &segments[..],
        n => &segments[..n - 1],
    };
    page_part.iter().find_map(|segment| {
        // Titles use spaces where paths use dashes
        let words: Vec<String> = segment.split_whitespace().map(str::to_lowercase).collect();
        if words.is_empty() {
            return None;
        }
        match_keywords(&format!("/{}", words.join("-")))
    })
}

fn match_keywords(haystack: &str) -> Option<PageType> {
    PAGE_TYPE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| starts_word(haystack, k)))
        .map(|(page_type, _)| *page_type)
}

fn starts_word(haystack: &str, keyword: &str) -> bool {
    haystack.match_indices(keyword).any(|(idx, _)| {
        keyword.starts_with('/')
            || haystack[..idx]
                .chars()
                .next_back()
                .map_or(true, |c| matches!(c, '/' | '-' | '_'))
    })
}
