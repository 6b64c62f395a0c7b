//! Signature scoring.

use std::sync::LazyLock;

use reqwest::header::HeaderMap;
use scraper::{Html, Selector};

use super::signatures::{PlatformSignature, SIGNATURES};
use super::{Confidence, PlatformDetectionResult};
use crate::config::{
    HEADER_MATCH_WEIGHT, HTML_MATCH_WEIGHT, LINK_MATCH_WEIGHT, META_MATCH_WEIGHT,
    SCRIPT_MATCH_WEIGHT,
};

static SCRIPT_SRC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("script[src]", "SCRIPT_SRC_SELECTOR"));
static LINK_HREF_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("link[href]", "LINK_HREF_SELECTOR"));
static META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("meta", "META_SELECTOR"));

/// Everything the signatures look at, lowercased once per document.
struct PageEvidence {
    script_srcs: Vec<String>,
    link_hrefs: Vec<String>,
    /// (name or property, content)
    meta: Vec<(String, String)>,
    html: String,
    /// (header name, value); names are already lowercase in a `HeaderMap`
    headers: Vec<(String, String)>,
}

impl PageEvidence {
    fn collect(document: &Html, raw_html: &str, headers: &HeaderMap) -> Self {
        let attr_values = |selector: &Selector, attr: &str| -> Vec<String> {
            document
                .select(selector)
                .filter_map(|el| el.value().attr(attr))
                .map(str::to_lowercase)
                .collect()
        };

        let meta = document
            .select(&META_SELECTOR)
            .filter_map(|el| {
                let value = el.value();
                let key = value.attr("name").or_else(|| value.attr("property"))?;
                let content = value.attr("content").unwrap_or_default();
                Some((key.trim().to_lowercase(), content.to_lowercase()))
            })
            .collect();

        let headers = headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_lowercase(),
                )
            })
            .collect();

        Self {
            script_srcs: attr_values(&SCRIPT_SRC_SELECTOR, "src"),
            link_hrefs: attr_values(&LINK_HREF_SELECTOR, "href"),
            meta,
            html: raw_html.to_lowercase(),
            headers,
        }
    }
}

/// Running score for one signature.
#[derive(Default)]
struct Tally {
    score: u32,
    indicators: Vec<String>,
}

impl Tally {
    fn add(&mut self, weight: u32, indicator: String) {
        self.score += weight;
        if !self.indicators.contains(&indicator) {
            self.indicators.push(indicator);
        }
    }
}

fn score_signature(signature: &PlatformSignature, evidence: &PageEvidence) -> Tally {
    let mut tally = Tally::default();

    // Every (pattern, element) pair counts, so overlapping patterns add up
    for pattern in &signature.scripts {
        for _ in evidence.script_srcs.iter().filter(|src| pattern.matches(src)) {
            tally.add(SCRIPT_MATCH_WEIGHT, format!("script:{}", pattern.as_str()));
        }
    }

    for pattern in &signature.links {
        for _ in evidence.link_hrefs.iter().filter(|href| pattern.matches(href)) {
            tally.add(LINK_MATCH_WEIGHT, format!("link:{}", pattern.as_str()));
        }
    }

    for pattern in &signature.html {
        if pattern.matches(&evidence.html) {
            tally.add(HTML_MATCH_WEIGHT, format!("html:{}", pattern.as_str()));
        }
    }

    for (name, content) in &evidence.meta {
        if let Some(pattern) = signature.meta.iter().find(|p| p.matches(name, content)) {
            tally.add(META_MATCH_WEIGHT, format!("meta:{}", pattern.describe()));
        }
    }

    for pattern in &signature.headers {
        if evidence
            .headers
            .iter()
            .any(|(name, value)| pattern.matches(name, value))
        {
            tally.add(HEADER_MATCH_WEIGHT, format!("header:{}", pattern.describe()));
        }
    }

    tally
}

/// Classifies a document against the built-in signature table.
///
/// Pure and deterministic: identical input yields an identical result.
pub fn detect_platform(
    document: &Html,
    raw_html: &str,
    headers: &HeaderMap,
) -> PlatformDetectionResult {
    detect_platform_with(&SIGNATURES, document, raw_html, headers)
}

/// Classifies a document against a caller-supplied signature table.
///
/// Signatures are scored in slice order; a later signature replaces the
/// leader only with a strictly higher score. When nothing scores, the result
/// is `unknown` with `low` confidence.
pub fn detect_platform_with(
    signatures: &[PlatformSignature],
    document: &Html,
    raw_html: &str,
    headers: &HeaderMap,
) -> PlatformDetectionResult {
    let evidence = PageEvidence::collect(document, raw_html, headers);

    let mut best: Option<(&PlatformSignature, Tally)> = None;
    for signature in signatures {
        let tally = score_signature(signature, &evidence);
        if tally.score == 0 {
            continue;
        }
        log::trace!(
            "Signature {} scored {} ({:?})",
            signature.platform(),
            tally.score,
            tally.indicators
        );
        let leads = best
            .as_ref()
            .map_or(true, |(_, leader)| tally.score > leader.score);
        if leads {
            best = Some((signature, tally));
        }
    }

    match best {
        Some((signature, tally)) => PlatformDetectionResult {
            platform: signature.platform(),
            confidence: Confidence::from_score(tally.score),
            score: tally.score,
            indicators: tally.indicators,
        },
        None => PlatformDetectionResult::unknown(),
    }
}
