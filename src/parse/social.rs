//! Social profile link extraction.
//!
//! Scans every anchor `href` for known social networks. The first profile
//! link found for a network wins; share/intent widgets are ignored.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::models::ScrapedSocial;
use crate::parse::resolve::normalize_url;

// Matched against absolute, normalized URLs
const FACEBOOK_URL_PATTERN: &str = r"(?i)^https?://(?:[\w-]+\.)*(?:facebook\.com|fb\.com)/[^?#\s]+";
const INSTAGRAM_URL_PATTERN: &str = r"(?i)^https?://(?:[\w-]+\.)*instagram\.com/[^?#\s]+";
const TWITTER_URL_PATTERN: &str = r"(?i)^https?://(?:[\w-]+\.)*(?:twitter\.com|x\.com)/[^?#\s]+";
const LINKEDIN_URL_PATTERN: &str =
    r"(?i)^https?://(?:[\w-]+\.)*linkedin\.com/(?:company|in|school|showcase)/[^?#\s]+";
const YOUTUBE_URL_PATTERN: &str =
    r"(?i)^https?://(?:[\w-]+\.)*youtube\.com/(?:channel/|c/|user/|@)[^?#\s]+";
const TIKTOK_URL_PATTERN: &str = r"(?i)^https?://(?:[\w-]+\.)*tiktok\.com/@[^?#\s]+";
const PINTEREST_URL_PATTERN: &str =
    r"(?i)^https?://(?:[\w-]+\.)*pinterest\.(?:com|ca|co\.uk|com\.au)/[^?#\s]+";
const YELP_URL_PATTERN: &str = r"(?i)^https?://(?:[\w-]+\.)*yelp\.(?:com|ca|co\.uk)/biz/[^?#\s]+";
const GOOGLE_BUSINESS_URL_PATTERN: &str = concat!(
    r"(?i)^https?://(?:g\.page/|business\.google\.com/|maps\.app\.goo\.gl/|goo\.gl/maps/|",
    r"(?:www\.)?google\.[a-z.]+/maps/|maps\.google\.[a-z.]+/)"
);

/// Share buttons and embed widgets, not profiles.
const SHARE_LINK_PATTERN: &str =
    r"(?i)/(?:sharer|share|intent|dialog|plugins|pin/create)(?:[/.?]|$)|shareArticle|/tr\?";

const ANCHOR_SELECTOR_STR: &str = "a[href]";

fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static FACEBOOK_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(FACEBOOK_URL_PATTERN, "FACEBOOK_RE"));
static INSTAGRAM_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(INSTAGRAM_URL_PATTERN, "INSTAGRAM_RE"));
static TWITTER_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TWITTER_URL_PATTERN, "TWITTER_RE"));
static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LINKEDIN_URL_PATTERN, "LINKEDIN_RE"));
static YOUTUBE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(YOUTUBE_URL_PATTERN, "YOUTUBE_RE"));
static TIKTOK_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TIKTOK_URL_PATTERN, "TIKTOK_RE"));
static PINTEREST_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PINTEREST_URL_PATTERN, "PINTEREST_RE"));
static YELP_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(YELP_URL_PATTERN, "YELP_RE"));
static GOOGLE_BUSINESS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(GOOGLE_BUSINESS_URL_PATTERN, "GOOGLE_BUSINESS_RE"));
static SHARE_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(SHARE_LINK_PATTERN, "SHARE_LINK_RE"));

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(ANCHOR_SELECTOR_STR, "ANCHOR_SELECTOR"));

#[derive(Debug, Clone, Copy)]
enum Network {
    Facebook,
    Instagram,
    Twitter,
    LinkedIn,
    YouTube,
    TikTok,
    Pinterest,
    Yelp,
    GoogleBusiness,
}

const NETWORKS: [Network; 9] = [
    Network::Facebook,
    Network::Instagram,
    Network::Twitter,
    Network::LinkedIn,
    Network::YouTube,
    Network::TikTok,
    Network::Pinterest,
    Network::Yelp,
    Network::GoogleBusiness,
];

impl Network {
    fn regex(self) -> &'static Regex {
        match self {
            Network::Facebook => &*FACEBOOK_RE,
            Network::Instagram => &*INSTAGRAM_RE,
            Network::Twitter => &*TWITTER_RE,
            Network::LinkedIn => &*LINKEDIN_RE,
            Network::YouTube => &*YOUTUBE_RE,
            Network::TikTok => &*TIKTOK_RE,
            Network::Pinterest => &*PINTEREST_RE,
            Network::Yelp => &*YELP_RE,
            Network::GoogleBusiness => &*GOOGLE_BUSINESS_RE,
        }
    }

    fn slot(self, social: &mut ScrapedSocial) -> &mut Option<String> {
        match self {
            Network::Facebook => &mut social.facebook,
            Network::Instagram => &mut social.instagram,
            Network::Twitter => &mut social.twitter,
            Network::LinkedIn => &mut social.linkedin,
            Network::YouTube => &mut social.youtube,
            Network::TikTok => &mut social.tiktok,
            Network::Pinterest => &mut social.pinterest,
            Network::Yelp => &mut social.yelp,
            Network::GoogleBusiness => &mut social.google_business,
        }
    }
}

/// Extracts social profile URLs from every anchor in `document`.
///
/// Relative and protocol-relative hrefs are resolved against `base` first.
pub fn extract_social_links(document: &Html, base: &Url) -> ScrapedSocial {
    let mut social = ScrapedSocial::default();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(url) = normalize_url(href, base) else {
            continue;
        };
        if SHARE_LINK_RE.is_match(&url) {
            continue;
        }
        if let Some(network) = NETWORKS.into_iter().find(|n| n.regex().is_match(&url)) {
            let field = network.slot(&mut social);
            if field.is_none() {
                *field = Some(url);
            }
        }
    }

    social
}
