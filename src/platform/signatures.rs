//! The platform signature table.

use std::sync::LazyLock;

use super::patterns::{KeyedPattern, Pattern};
use super::Platform;

/// Weighted pattern rules recognizing one platform.
///
/// Built with a small builder so custom tables can be assembled for
/// [`detect_platform_with`](super::detect_platform_with):
///
/// ```
/// use site_scraper::platform::{Platform, PlatformSignature};
///
/// let signature = PlatformSignature::new(Platform::Wix)
///     .scripts(&["static.parastorage.com"])
///     .meta(&[("generator", "wix.com")]);
/// assert_eq!(signature.platform(), Platform::Wix);
/// ```
#[derive(Debug, Clone)]
pub struct PlatformSignature {
    platform: Platform,
    pub(super) scripts: Vec<Pattern>,
    pub(super) links: Vec<Pattern>,
    pub(super) html: Vec<Pattern>,
    pub(super) meta: Vec<KeyedPattern>,
    pub(super) headers: Vec<KeyedPattern>,
}

impl PlatformSignature {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            scripts: Vec::new(),
            links: Vec::new(),
            html: Vec::new(),
            meta: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Patterns for `<script src>` URLs.
    pub fn scripts(mut self, patterns: &[&str]) -> Self {
        self.scripts.extend(patterns.iter().map(|p| Pattern::new(p)));
        self
    }

    /// Patterns for `<link href>` URLs.
    pub fn links(mut self, patterns: &[&str]) -> Self {
        self.links.extend(patterns.iter().map(|p| Pattern::new(p)));
        self
    }

    /// Substrings (or regexes) searched in the raw HTML.
    pub fn html(mut self, patterns: &[&str]) -> Self {
        self.html.extend(patterns.iter().map(|p| Pattern::new(p)));
        self
    }

    /// `(meta name or property, content pattern)` pairs.
    pub fn meta(mut self, patterns: &[(&str, &str)]) -> Self {
        self.meta
            .extend(patterns.iter().map(|(k, v)| KeyedPattern::new(k, v)));
        self
    }

    /// `(header name, value pattern)` pairs; an empty value means "present".
    pub fn headers(mut self, patterns: &[(&str, &str)]) -> Self {
        self.headers
            .extend(patterns.iter().map(|(k, v)| KeyedPattern::new(k, v)));
        self
    }
}

/// Built-in signatures in registration order. Earlier entries win ties.
pub static SIGNATURES: LazyLock<Vec<PlatformSignature>> = LazyLock::new(|| {
    vec![
        PlatformSignature::new(Platform::WordPress)
            .scripts(&["wp-content/", "wp-includes/"])
            .links(&["wp-content/", "wp-includes/", "/wp-json/"])
            .html(&["wp-block-", "wp-embed", "wp-emoji"])
            .meta(&[("generator", "wordpress")])
            .headers(&[("link", "api.w.org"), ("x-pingback", "xmlrpc.php")]),
        PlatformSignature::new(Platform::Squarespace)
            .scripts(&["static1.squarespace.com", "assets.squarespace.com"])
            .links(&["static1.squarespace.com", "squarespace-cdn.com"])
            .html(&["squarespace-cdn.com", "data-squarespace", "sqs-block"])
            .meta(&[("generator", "squarespace")])
            .headers(&[("server", "squarespace")]),
        PlatformSignature::new(Platform::Wix)
            .scripts(&["static.parastorage.com", "static.wixstatic.com"])
            .links(&["static.parastorage.com", "wixstatic.com"])
            .html(&["wix-image", "x-wix-", "wixsite.com", "data-mesh-id"])
            .meta(&[("generator", "wix.com")])
            .headers(&[("x-wix-request-id", ""), ("server", "pepyaka")]),
        PlatformSignature::new(Platform::Shopify)
            .scripts(&["cdn.shopify.com", "shopifycloud"])
            .links(&["cdn.shopify.com", "myshopify.com"])
            .html(&["shopify.theme", "shopify-section", "window.shopify"])
            .meta(&[
                ("shopify-checkout-api-token", ""),
                ("shopify-digital-wallet", ""),
            ])
            .headers(&[("x-shopid", ""), ("x-shopify-stage", ""), ("powered-by", "shopify")]),
        PlatformSignature::new(Platform::Webflow)
            .scripts(&["webflow.js", "website-files.com"])
            .links(&["website-files.com"])
            .html(&["data-wf-page", "data-wf-site", "w-webflow-badge"])
            .meta(&[("generator", "webflow")]),
        PlatformSignature::new(Platform::GoDaddy)
            .scripts(&["img1.wsimg.com", "wsimg.com"])
            .links(&["wsimg.com"])
            .html(&["data-ux=", "godaddy website builder"])
            .meta(&[("generator", "go daddy"), ("generator", "godaddy")]),
        PlatformSignature::new(Platform::Weebly)
            .scripts(&["editmysite.com", "weebly.com"])
            .links(&["editmysite.com"])
            .html(&["wsite-", "weebly-"])
            .meta(&[("generator", "weebly")]),
        PlatformSignature::new(Platform::Duda)
            .scripts(&["cdn-website.com", "multiscreensite.com", "dudamobile.com"])
            .links(&["cdn-website.com", "multiscreensite.com"])
            .html(&["dmbody", "dmroot", "duda_website"])
            .meta(&[("generator", "duda")]),
    ]
});
