//! Candidate selection for the bounded crawl.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

use crate::domain::is_same_site;
use crate::parse::normalize_link;

fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// Admin and login areas, feeds, carts, APIs.
const SKIP_PATH_PATTERN: &str = concat!(
    r"(?i)(?:^|/)(?:wp-admin|wp-login\.php|wp-json|xmlrpc\.php|admin|administrator|login|logout|",
    r"signin|sign-in|signup|register|account|my-account|cart|checkout|basket|feed|rss|api|",
    r"graphql|cdn-cgi|cgi-bin)(?:/|\.|$)",
);

/// Static assets and downloads.
const SKIP_EXTENSION_PATTERN: &str = concat!(
    r"(?i)\.(?:jpe?g|png|gif|webp|avif|svg|ico|bmp|css|js|mjs|json|xml|rss|atom|txt|csv|",
    r"woff2?|ttf|eot|otf|mp4|webm|mov|avi|mp3|wav|ogg|pdf|docx?|xlsx?|pptx?|zip|rar|gz|exe|dmg)$",
);

/// Query keys that mark actions rather than pages.
const SKIP_QUERY_KEYS: &[&str] = &["add-to-cart", "replytocom", "share", "s"];

static SKIP_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(SKIP_PATH_PATTERN, "SKIP_PATH_RE"));
static SKIP_EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(SKIP_EXTENSION_PATTERN, "SKIP_EXTENSION_RE"));

/// Whether `url` is never worth crawling.
pub fn should_skip(url: &Url) -> bool {
    let path = url.path();
    SKIP_PATH_RE.is_match(path)
        || SKIP_EXTENSION_RE.is_match(path)
        || url
            .query_pairs()
            .any(|(key, _)| SKIP_QUERY_KEYS.iter().any(|skip| key == *skip))
}

/// Dedup key: the path without its trailing slash ("/" for the root).
fn path_key(url: &Url) -> String {
    let trimmed = url.path().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Same-site, crawlable links from the seed page, one per path, at most `limit`.
///
/// The root path and the seed's own path count as already visited.
pub fn select_candidates(base: &Url, seed_links: &[String], limit: usize) -> Vec<Url> {
    let mut visited: HashSet<String> = HashSet::from(["/".to_string(), path_key(base)]);
    let mut candidates = Vec::new();

    for link in seed_links {
        if candidates.len() == limit {
            break;
        }
        let Some(url) = normalize_link(link, base) else {
            continue;
        };
        if !is_same_site(base, &url) || should_skip(&url) {
            continue;
        }
        if visited.insert(path_key(&url)) {
            candidates.push(url);
        }
    }
    candidates
}
