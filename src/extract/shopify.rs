//! Shopify storefronts (Dawn family and older sectioned themes).
//!
//! Product titles on the home page stand in for services.

use std::sync::LazyLock;

use url::Url;

use super::{Extractor, Probe, SiteProfile};

static PROFILE: LazyLock<SiteProfile> = LazyLock::new(|| {
    let base = SiteProfile::generic();
    SiteProfile {
        name: base.name.before(vec![
            Probe::text(".header__heading-link span, .site-header__logo a").max_chars(100),
            Probe::attr(".header__heading-logo", "alt").max_chars(100),
        ]),
        hero_text: base.hero_text.before(vec![
            Probe::text(".banner__heading, .hero__title, .slideshow__text h2").max_chars(200),
        ]),
        hero_subtext: base.hero_subtext.before(vec![
            Probe::text(".banner__text, .hero__subtitle, .slideshow__text p").max_chars(400),
        ]),
        about_text: base.about_text.before(vec![
            Probe::text(".rich-text__text p, .image-with-text__text p").min_chars(40),
        ]),
        services: base.services.before(vec![
            Probe::text(".card__heading a, .product-card__title, .grid-product__title")
                .max_chars(120),
        ]),
        cta_text: base.cta_text.before(vec![
            Probe::text(".banner__buttons a, .hero__btn").max_chars(60),
        ]),
        logo: base.logo.before(vec![
            Probe::attr(".header__heading-logo, .site-header__logo-image img", "src"),
        ]),
        hero_image: base.hero_image.before(vec![
            Probe::attr(".banner__media img, .slideshow__media img, .hero__image img", "src"),
        ]),
        ..base
    }
});

#[derive(Debug, Clone, Copy, Default)]
pub struct ShopifyExtractor;

impl Extractor for ShopifyExtractor {
    fn name(&self) -> &'static str {
        "shopify"
    }

    fn profile(&self) -> &SiteProfile {
        &PROFILE
    }

    /// Drops the `width` and `v` (cache-buster) parameters from CDN images.
    fn canonical_asset_url(&self, mut url: Url) -> Url {
        let on_cdn = url.host_str().is_some_and(|host| host == "cdn.shopify.com")
            || url.path().starts_with("/cdn/shop/");
        if !on_cdn || url.query().is_none() {
            return url;
        }
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "width" && key != "v" && key != "height")
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
