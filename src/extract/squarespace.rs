//! Squarespace 7.0 and 7.1 templates.

use std::sync::LazyLock;

use url::Url;

use super::{Extractor, Probe, SiteProfile};

static PROFILE: LazyLock<SiteProfile> = LazyLock::new(|| {
    let base = SiteProfile::generic();
    SiteProfile {
        name: base.name.before(vec![
            Probe::text(".header-title-text a, #site-title, .site-title").max_chars(100),
            Probe::attr(".header-title-logo img", "alt").max_chars(100),
        ]),
        hero_text: base.hero_text.before(vec![
            Probe::text("section.page-section:first-of-type h1").max_chars(200),
            Probe::text(".sqs-block-html h1, .sqs-block-content h1").max_chars(200),
        ]),
        hero_subtext: base.hero_subtext.before(vec![
            Probe::text("section.page-section:first-of-type .sqs-block-html p").max_chars(400),
        ]),
        about_text: base.about_text.before(vec![
            Probe::text(".sqs-block-html p").min_chars(80),
        ]),
        services: base.services.before(vec![
            Probe::text(".summary-title, .list-item-content__title").max_chars(120),
        ]),
        cta_text: base.cta_text.before(vec![
            Probe::text(".sqs-block-button-element, .sqs-button-element--primary").max_chars(60),
        ]),
        testimonials: base.testimonials.before(vec![Probe::text(
            ".sqs-block-quote, .user-items-list-item-container .list-item",
        )]),
        logo: base.logo.before(vec![
            Probe::attr(".header-title-logo img", "data-src"),
            Probe::attr(".header-title-logo img", "src"),
        ]),
        hero_image: base.hero_image.before(vec![
            Probe::attr("section.page-section:first-of-type .section-background img", "data-src"),
            Probe::attr(".sqs-block-image img", "data-src"),
        ]),
        ..base
    }
});

/// Query parameters the image CDN uses to pick a rendition.
const RENDITION_PARAMS: &[&str] = &["format", "content-type"];

#[derive(Debug, Clone, Copy, Default)]
pub struct SquarespaceExtractor;

impl Extractor for SquarespaceExtractor {
    fn name(&self) -> &'static str {
        "squarespace"
    }

    fn profile(&self) -> &SiteProfile {
        &PROFILE
    }

    /// Drops rendition parameters (`?format=750w`) from CDN images.
    fn canonical_asset_url(&self, mut url: Url) -> Url {
        let on_cdn = url
            .host_str()
            .is_some_and(|host| {
                host.ends_with("squarespace-cdn.com") || host.ends_with("squarespace.com")
            });
        if !on_cdn || url.query().is_none() {
            return url;
        }
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !RENDITION_PARAMS.iter().any(|param| key == param))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }
        url
    }
}
