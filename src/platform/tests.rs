// Platform classification tests.

use super::*;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use scraper::Html;
use strum::IntoEnumIterator;

fn detect(html: &str) -> PlatformDetectionResult {
    detect_platform(&Html::parse_document(html), html, &HeaderMap::new())
}

fn header_map(pairs: &[(&str, &str)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        headers.insert(
            HeaderName::from_bytes(name.as_bytes()).unwrap(),
            HeaderValue::from_str(value).unwrap(),
        );
    }
    headers
}

const WORDPRESS_SCRIPTS: &str = r#"<html><head>
    <script src="https://acme.com/wp-content/themes/acme/app.js"></script>
    <script src="https://acme.com/wp-includes/js/jquery.min.js"></script>
</head><body><p>Hello</p></body></html>"#;

#[test]
fn test_wordpress_scripts_detected() {
    let result = detect(WORDPRESS_SCRIPTS);
    assert_eq!(result.platform, Platform::WordPress);
    assert_eq!(result.score, 6);
    assert_eq!(result.confidence, Confidence::Medium);
    assert_eq!(
        result.indicators,
        vec!["script:wp-content/", "script:wp-includes/"]
    );
}

#[test]
fn test_every_matching_element_is_counted() {
    let html = r#"<html><head>
        <script src="/wp-content/a.js"></script>
        <script src="/wp-content/b.js"></script>
        <script src="/wp-content/c.js"></script>
        <script src="/wp-content/d.js"></script>
    </head><body></body></html>"#;
    let result = detect(html);
    assert_eq!(result.platform, Platform::WordPress);
    assert_eq!(result.score, 12);
    assert_eq!(result.confidence, Confidence::High);
    // Repeated matches of one pattern are reported once
    assert_eq!(result.indicators, vec!["script:wp-content/"]);
}

#[test]
fn test_overlapping_script_patterns_each_count() {
    let html = r#"<html><head>
        <script src="https://cdn.shopify.com/shopifycloud/shop-js/client.js"></script>
    </head><body></body></html>"#;
    let result = detect(html);
    assert_eq!(result.platform, Platform::Shopify);
    assert_eq!(result.score, 6);
    assert_eq!(result.confidence, Confidence::Medium);
    assert_eq!(
        result.indicators,
        vec!["script:cdn.shopify.com", "script:shopifycloud"]
    );
}

#[test]
fn test_overlapping_patterns_across_scripts_and_links() {
    let html = r#"<html><head>
        <link rel="stylesheet" href="https://img1.wsimg.com/blobby/go/site.css">
        <script src="https://img1.wsimg.com/signals/js/app.js"></script>
    </head><body></body></html>"#;
    let result = detect(html);
    assert_eq!(result.platform, Platform::GoDaddy);
    // Two script patterns (+3 each) and one link pattern (+2)
    assert_eq!(result.score, 8);
}

#[test]
fn test_generator_meta_alone_is_medium() {
    let html = r#"<html><head><meta name="generator" content="WordPress 6.3"></head>
        <body><h1>Acme</h1></body></html>"#;
    let result = detect(html);
    assert_eq!(result.platform, Platform::WordPress);
    assert_eq!(result.score, 5);
    assert_eq!(result.confidence, Confidence::Medium);
    assert_eq!(result.indicators, vec!["meta:generator=wordpress"]);
}

#[test]
fn test_generator_meta_with_scripts_is_high() {
    let html = r#"<html><head>
        <meta name="generator" content="WordPress 6.3">
        <script src="/wp-content/themes/x/app.js"></script>
        <script src="/wp-includes/js/wp-embed.min.js"></script>
    </head><body></body></html>"#;
    let result = detect(html);
    assert_eq!(result.platform, Platform::WordPress);
    assert!(result.score >= 10);
    assert_eq!(result.confidence, Confidence::High);
}

#[test]
fn test_detection_is_deterministic() {
    let first = detect(WORDPRESS_SCRIPTS);
    for _ in 0..5 {
        assert_eq!(detect(WORDPRESS_SCRIPTS), first);
    }
}

#[test]
fn test_plain_document_is_unknown() {
    let result = detect("<html><head><title>Hi</title></head><body><p>Plain</p></body></html>");
    assert_eq!(result, PlatformDetectionResult::unknown());
    assert_eq!(result.confidence, Confidence::Low);
}

#[test]
fn test_header_match() {
    let html = "<html><body></body></html>";
    let result = detect_platform(
        &Html::parse_document(html),
        html,
        &header_map(&[("X-ShopId", "1234")]),
    );
    assert_eq!(result.platform, Platform::Shopify);
    assert_eq!(result.score, 4);
    assert_eq!(result.confidence, Confidence::Low);
    assert_eq!(result.indicators, vec!["header:x-shopid"]);
}

#[test]
fn test_wix_markers() {
    let html = r#"<html><head>
        <meta name="generator" content="Wix.com Website Builder">
        <script src="https://static.parastorage.com/services/wix-thunderbolt/main.js"></script>
    </head><body><div id="SITE_CONTAINER"></div></body></html>"#;
    let result = detect_platform(
        &Html::parse_document(html),
        html,
        &header_map(&[("x-wix-request-id", "abc")]),
    );
    assert_eq!(result.platform, Platform::Wix);
    assert_eq!(result.confidence, Confidence::High);
    assert!(result.info().js_rendered);
}

#[test]
fn test_strongest_signature_wins_over_embedded_widget() {
    // A WordPress site embedding a Shopify buy button
    let html = r#"<html><head>
        <meta name="generator" content="WordPress 6.4">
        <script src="/wp-content/plugins/x.js"></script>
        <script src="https://cdn.shopify.com/buy-button/buybutton.js"></script>
    </head><body></body></html>"#;
    let result = detect(html);
    assert_eq!(result.platform, Platform::WordPress);
    assert_eq!(result.score, 8);
}

#[test]
fn test_ties_keep_first_registered_signature() {
    let html = r#"<html><body><div class="shared-marker"></div></body></html>"#;
    let document = Html::parse_document(html);
    let squarespace = PlatformSignature::new(Platform::Squarespace).html(&["shared-marker"]);
    let wix = PlatformSignature::new(Platform::Wix).html(&["shared-marker"]);

    let result = detect_platform_with(
        &[squarespace.clone(), wix.clone()],
        &document,
        html,
        &HeaderMap::new(),
    );
    assert_eq!(result.platform, Platform::Squarespace);

    let result = detect_platform_with(&[wix, squarespace], &document, html, &HeaderMap::new());
    assert_eq!(result.platform, Platform::Wix);
}

#[test]
fn test_confidence_thresholds() {
    assert_eq!(Confidence::from_score(0), Confidence::Low);
    assert_eq!(Confidence::from_score(4), Confidence::Low);
    assert_eq!(Confidence::from_score(5), Confidence::Medium);
    assert_eq!(Confidence::from_score(9), Confidence::Medium);
    assert_eq!(Confidence::from_score(10), Confidence::High);
}

#[test]
fn test_every_platform_has_a_signature() {
    for platform in Platform::iter().filter(|p| *p != Platform::Unknown) {
        assert!(
            SIGNATURES.iter().any(|s| s.platform() == platform),
            "{} has no signature",
            platform
        );
    }
}

#[test]
fn test_js_rendered_platforms() {
    let rendered: Vec<Platform> = Platform::iter().filter(|p| p.info().js_rendered).collect();
    assert_eq!(rendered, vec![Platform::Wix, Platform::GoDaddy, Platform::Duda]);
}

#[test]
fn test_platform_serialization() {
    assert_eq!(
        serde_json::to_value(Platform::WordPress).unwrap(),
        serde_json::json!("wordpress")
    );
    assert_eq!(Platform::GoDaddy.to_string(), "godaddy");
    let result = serde_json::to_value(PlatformDetectionResult::unknown()).unwrap();
    assert_eq!(result["platform"], "unknown");
    assert_eq!(result["confidence"], "low");
}
