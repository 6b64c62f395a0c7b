//! Extraction routines shared by every extractor.
//!
//! Each function takes the extractor's [`SiteProfile`] (where a field is
//! profile-driven) and a parsed document. None of them fail: a field that
//! cannot be found is `None` or an empty list.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

use super::probe::{Cascade, Probe};
use super::profile::SiteProfile;
use crate::config::{
    MAX_FEATURES, MAX_IMAGES, MAX_PAGE_CONTENT_CHARS, MAX_PAGE_HEADINGS, MAX_PAGE_LINKS,
    MAX_SERVICES, MAX_TESTIMONIALS, MAX_VIDEOS, MIN_IMAGE_WIDTH,
};
use crate::models::{
    Feature, ScrapedAssets, ScrapedBusiness, ScrapedContent, ScrapedPage, ScrapedSeo, Testimonial,
};
use crate::parse::{
    body_text, determine_page_type, element_text, email_from_mailto, extract_address,
    extract_business_data, extract_canonical_href, extract_email, extract_meta_description,
    extract_meta_keywords, extract_phone, extract_title, meta_content, normalize_link,
    normalize_url, phone_from_tel, title_segments, truncate_chars, visible_text,
};

fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static MAILTO_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe("a[href^='mailto:' i]", "MAILTO_SELECTOR")
});
static TEL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("a[href^='tel:' i]", "TEL_SELECTOR"));
static IMG_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("img", "IMG_SELECTOR"));
static VIDEO_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(
        "video[src], video source[src], iframe[src]",
        "VIDEO_SELECTOR",
    )
});
static FAVICON_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(
        "link[rel~='icon' i][href], link[rel='apple-touch-icon' i][href]",
        "FAVICON_SELECTOR",
    )
});
static HEADING_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe("h1, h2, h3, h4, h5, h6", "HEADING_SELECTOR")
});
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("a[href]", "ANCHOR_SELECTOR"));

static BACKGROUND_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r#"(?i)background(?:-image)?\s*:[^;]*url\(\s*['"]?([^'")]+)['"]?\s*\)"#,
        "BACKGROUND_URL_RE",
    )
});

static TESTIMONIAL_TEXT: LazyLock<Cascade> = LazyLock::new(|| {
    Cascade::new(vec![
        Probe::text("blockquote p, [class*='quote'] p, [class*='text'] p").min_chars(20),
        Probe::text("blockquote, q, [class*='quote'], [class*='content']").min_chars(20),
        Probe::text("p").min_chars(20),
    ])
});
static TESTIMONIAL_AUTHOR: LazyLock<Cascade> = LazyLock::new(|| {
    Cascade::new(vec![
        Probe::text("cite, [class*='author'], [class*='name']").max_chars(80),
        Probe::text("strong").max_chars(80),
    ])
});
static TESTIMONIAL_ROLE: LazyLock<Cascade> = LazyLock::new(|| {
    Cascade::new(vec![Probe::text("[class*='role'], [class*='position'], [class*='job']").max_chars(80)])
});
static TESTIMONIAL_COMPANY: LazyLock<Cascade> = LazyLock::new(|| {
    Cascade::new(vec![Probe::text("[class*='company'], [class*='organization']").max_chars(80)])
});
static FEATURE_TITLE: LazyLock<Cascade> = LazyLock::new(|| {
    Cascade::new(vec![
        Probe::text("h3, h4").max_chars(100),
        Probe::text("h2, h5, strong").max_chars(100),
    ])
});
static FEATURE_DESCRIPTION: LazyLock<Cascade> =
    LazyLock::new(|| Cascade::new(vec![Probe::text("p").max_chars(500)]));

/// Markers of tracking pixels, avatars and third-party script hosts.
const EXCLUDED_ASSET_MARKERS: &[&str] = &[
    "gravatar.com",
    "favicon",
    "pixel",
    "spacer.gif",
    "1x1",
    "/tr?",
    "google-analytics.com",
    "googletagmanager.com",
    "doubleclick.net",
    "facebook.com/tr",
    "bat.bing.com",
    "px.ads.linkedin.com",
];

/// Attributes checked, in order, for an image's address (lazy loaders move `src`).
const IMAGE_SOURCE_ATTRS: &[&str] = &["src", "data-src", "data-lazy-src", "data-image", "data-original"];

/// Embed hosts whose iframes count as videos.
const VIDEO_HOSTS: &[&str] = &[
    "youtube.com",
    "youtube-nocookie.com",
    "youtu.be",
    "vimeo.com",
    "wistia.com",
    "wistia.net",
    "loom.com",
];

// Business

/// Business identity from the profile cascades, then JSON-LD, then the title.
pub fn extract_business(profile: &SiteProfile, document: &Html, raw_html: &str) -> ScrapedBusiness {
    let pool = contact_pool(profile, document);

    let mut business = ScrapedBusiness {
        name: profile.name.first(document),
        tagline: profile.tagline.first(document),
        description: profile.description.first(document),
        phone: first_tel(document).or_else(|| extract_phone(&pool)),
        email: first_mailto(document).or_else(|| extract_email(&pool)),
        address: extract_address(&pool).or_else(|| profile.address.first(document)),
        hours: profile.hours.first(document),
    };

    if let Some(structured) = extract_business_data(raw_html) {
        business.fill_missing(structured);
    }
    if business.name.is_none() {
        business.name = extract_title(document).and_then(|title| name_from_title(&title));
    }
    business
}

/// Text pooled from every contact-ish block for the regex recognizers.
fn contact_pool(profile: &SiteProfile, document: &Html) -> String {
    let mut pool = String::new();
    for probe in profile.contact_blocks.probes() {
        for element in probe.elements(document) {
            pool.push_str(&visible_text(element));
            pool.push('\n');
        }
    }
    pool
}

fn first_mailto(document: &Html) -> Option<String> {
    document
        .select(&MAILTO_SELECTOR)
        .find_map(|a| a.value().attr("href").and_then(email_from_mailto))
}

fn first_tel(document: &Html) -> Option<String> {
    document
        .select(&TEL_SELECTOR)
        .find_map(|a| a.value().attr("href").and_then(phone_from_tel))
}

/// Business name from a `<title>` such as "Acme Plumbing | Home".
pub fn name_from_title(title: &str) -> Option<String> {
    title_segments(title)
        .iter()
        .find(|segment| !segment.is_empty() && !segment.eq_ignore_ascii_case("home"))
        .map(|segment| segment.to_string())
}

// Content

pub fn extract_content(profile: &SiteProfile, document: &Html) -> ScrapedContent {
    let hero_text = profile.hero_text.first(document);
    let hero_subtext = profile
        .hero_subtext
        .probes()
        .iter()
        .flat_map(|probe| probe.all(document))
        .find(|text| Some(text) != hero_text.as_ref());

    ScrapedContent {
        hero_text,
        hero_subtext,
        about_text: profile.about_text.first(document),
        services: profile.services.collect(document, MAX_SERVICES),
        testimonials: extract_testimonials(profile, document),
        features: extract_features(profile, document),
        cta_text: profile.cta_text.first(document),
    }
}

fn extract_testimonials(profile: &SiteProfile, document: &Html) -> Vec<Testimonial> {
    let mut testimonials: Vec<Testimonial> = Vec::new();
    for container in profile.testimonials.containers(document) {
        if testimonials.len() == MAX_TESTIMONIALS {
            break;
        }
        let Some(text) = testimonial_text(container) else {
            continue;
        };
        if testimonials.iter().any(|t| t.text == text) {
            continue;
        }
        let author = TESTIMONIAL_AUTHOR
            .first_in(container)
            .map(|a| a.trim_start_matches(['-', '–', '—', '~', ' ']).to_string())
            .filter(|a| !a.is_empty() && *a != text);
        testimonials.push(Testimonial {
            text,
            author,
            role: TESTIMONIAL_ROLE.first_in(container),
            company: TESTIMONIAL_COMPANY.first_in(container),
        });
    }
    testimonials
}

fn testimonial_text(container: ElementRef<'_>) -> Option<String> {
    TESTIMONIAL_TEXT
        .first_in(container)
        .or_else(|| element_text(container).filter(|text| text.chars().count() >= 20))
        .map(|text| {
            text.trim_matches(|c: char| c == '"' || c == '“' || c == '”' || c.is_whitespace())
                .to_string()
        })
}

fn extract_features(profile: &SiteProfile, document: &Html) -> Vec<Feature> {
    let mut features: Vec<Feature> = Vec::new();
    for container in profile.features.containers(document) {
        if features.len() == MAX_FEATURES {
            break;
        }
        let (Some(title), Some(description)) = (
            FEATURE_TITLE.first_in(container),
            FEATURE_DESCRIPTION.first_in(container),
        ) else {
            continue;
        };
        if features.iter().any(|f| f.title == title) {
            continue;
        }
        features.push(Feature { title, description });
    }
    features
}

// Assets

/// Harvests logo, favicon, hero image, gallery images and videos.
///
/// `canonical` rewrites each resolved URL before de-duplication, so that
/// size or format variants of one image collapse into one entry.
pub fn extract_assets<F>(profile: &SiteProfile, document: &Html, base: &Url, canonical: F) -> ScrapedAssets
where
    F: Fn(Url) -> Url,
{
    let resolve = |candidate: &str| -> Option<String> {
        let resolved = normalize_url(candidate, base)?;
        let url = Url::parse(&resolved).ok()?;
        Some(canonical(url).to_string())
    };

    let logo = first_asset_url(&profile.logo, document, &resolve);
    let favicon = document
        .select(&FAVICON_SELECTOR)
        .find_map(|link| link.value().attr("href").and_then(&resolve));
    let hero_image = first_asset_url(&profile.hero_image, document, &resolve)
        .or_else(|| hero_background_url(profile, document, &resolve))
        .or_else(|| meta_content(document, "og:image").and_then(|v| resolve(&v)));

    let mut images: Vec<String> = Vec::new();
    for img in document.select(&IMG_SELECTOR) {
        if images.len() == MAX_IMAGES {
            break;
        }
        if declared_width(img).is_some_and(|width| width < MIN_IMAGE_WIDTH) {
            continue;
        }
        let source = IMAGE_SOURCE_ATTRS
            .iter()
            .filter_map(|attr| img.value().attr(attr))
            .find_map(&resolve);
        if let Some(url) = source {
            if !is_excluded_asset(&url) && !images.contains(&url) {
                images.push(url);
            }
        }
    }

    let mut videos: Vec<String> = Vec::new();
    for element in document.select(&VIDEO_SELECTOR) {
        if videos.len() == MAX_VIDEOS {
            break;
        }
        let is_iframe = element.value().name() == "iframe";
        let Some(url) = element.value().attr("src").and_then(&resolve) else {
            continue;
        };
        if is_iframe && !is_video_embed(&url) {
            continue;
        }
        if !is_excluded_asset(&url) && !videos.contains(&url) {
            videos.push(url);
        }
    }

    ScrapedAssets {
        logo,
        favicon,
        hero_image,
        images,
        videos,
    }
}

fn first_asset_url(
    cascade: &Cascade,
    document: &Html,
    resolve: &impl Fn(&str) -> Option<String>,
) -> Option<String> {
    cascade
        .probes()
        .iter()
        .flat_map(|probe| probe.all(document))
        .filter_map(|candidate| resolve(&candidate))
        .find(|url| !is_excluded_asset(url))
}

fn hero_background_url(
    profile: &SiteProfile,
    document: &Html,
    resolve: &impl Fn(&str) -> Option<String>,
) -> Option<String> {
    profile
        .hero_background
        .probes()
        .iter()
        .flat_map(|probe| probe.all(document))
        .find_map(|style| {
            let captures = BACKGROUND_URL_RE.captures(&style)?;
            resolve(captures.get(1)?.as_str())
        })
}

/// Leading digits of the `width` attribute ("40", "40px").
fn declared_width(img: ElementRef<'_>) -> Option<u32> {
    let width = img.value().attr("width")?.trim();
    let digits: String = width.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Tracking pixels, avatars, favicons and script URLs.
pub fn is_excluded_asset(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    let path = lower.split(['?', '#']).next().unwrap_or_default();
    path.ends_with(".js") || EXCLUDED_ASSET_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn is_video_embed(url: &str) -> bool {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_ascii_lowercase))
        .is_some_and(|host| {
            VIDEO_HOSTS
                .iter()
                .any(|known| host == *known || host.ends_with(&format!(".{}", known)))
        })
}

// SEO

pub fn extract_seo(document: &Html, base: &Url) -> ScrapedSeo {
    ScrapedSeo {
        title: extract_title(document),
        description: extract_meta_description(document),
        keywords: extract_meta_keywords(document),
        og_image: meta_content(document, "og:image").and_then(|v| normalize_url(&v, base)),
        canonical_url: extract_canonical_href(document).and_then(|href| normalize_url(&href, base)),
    }
}

// Pages

/// Summary of one page: type, visible text, headings and outgoing links.
pub fn build_page(document: &Html, url: &Url) -> ScrapedPage {
    let title = extract_title(document);
    let text = body_text(document);
    let page_type = determine_page_type(url.path(), title.as_deref(), &text);

    let mut headings: Vec<String> = Vec::new();
    for heading in document.select(&HEADING_SELECTOR) {
        if headings.len() == MAX_PAGE_HEADINGS {
            break;
        }
        if let Some(text) = element_text(heading) {
            if !headings.contains(&text) {
                headings.push(text);
            }
        }
    }

    ScrapedPage {
        url: url.to_string(),
        path: url.path().to_string(),
        title,
        page_type,
        content: truncate_chars(&text, MAX_PAGE_CONTENT_CHARS),
        headings,
        links: collect_links(document, url, MAX_PAGE_LINKS),
    }
}

/// Absolute, fragment-free http(s) links in document order, de-duplicated.
pub fn collect_links(document: &Html, base: &Url, limit: usize) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for anchor in document.select(&ANCHOR_SELECTOR) {
        if links.len() == limit {
            break;
        }
        let Some(link) = anchor.value().attr("href").and_then(|h| normalize_link(h, base)) else {
            continue;
        };
        let link = link.to_string();
        if !links.contains(&link) {
            links.push(link);
        }
    }
    links
}
