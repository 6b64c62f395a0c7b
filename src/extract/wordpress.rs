//! WordPress: classic themes, the block editor and Elementor.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use super::{Extractor, Probe, SiteProfile};

fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// Size variants generated by the media library: `photo-300x200.jpg`
static RESIZED_UPLOAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"(?i)-\d{2,5}x\d{2,5}(\.(?:jpe?g|png|gif|webp|avif))$",
        "RESIZED_UPLOAD_RE",
    )
});

static PROFILE: LazyLock<SiteProfile> = LazyLock::new(|| {
    let base = SiteProfile::generic();
    SiteProfile {
        name: base.name.before(vec![
            Probe::text(".site-title a, .site-title, #site-title").max_chars(100),
            Probe::text(".wp-block-site-title").max_chars(100),
            Probe::attr(".custom-logo", "alt").max_chars(100),
        ]),
        tagline: base.tagline.before(vec![
            Probe::text(".site-description, .wp-block-site-tagline").max_chars(200),
        ]),
        hero_text: base.hero_text.before(vec![
            Probe::text(".wp-block-cover h1, .wp-block-cover h2").max_chars(200),
            Probe::text(".elementor-section:first-of-type .elementor-heading-title")
                .max_chars(200),
        ]),
        hero_subtext: base.hero_subtext.before(vec![
            Probe::text(".wp-block-cover p").max_chars(400),
            Probe::text(".elementor-section:first-of-type .elementor-text-editor p")
                .max_chars(400),
        ]),
        services: base.services.before(vec![
            Probe::text(".elementor-icon-box-title, .elementor-image-box-title").max_chars(120),
            Probe::text("[class*='service'] .wp-block-heading").max_chars(120),
        ]),
        cta_text: base.cta_text.before(vec![
            Probe::text(".wp-block-button__link, .elementor-button-text").max_chars(60),
        ]),
        testimonials: base.testimonials.before(vec![Probe::text(
            ".elementor-testimonial, .wp-block-quote, [class*='testimonial']",
        )]),
        features: base.features.before(vec![Probe::text(".elementor-icon-box-wrapper")]),
        logo: base.logo.before(vec![
            Probe::attr("img.custom-logo, .wp-block-site-logo img", "src"),
        ]),
        hero_image: base.hero_image.before(vec![
            Probe::attr(".wp-block-cover img, .wp-block-cover__image-background", "src"),
        ]),
        ..base
    }
});

#[derive(Debug, Clone, Copy, Default)]
pub struct WordPressExtractor;

impl Extractor for WordPressExtractor {
    fn name(&self) -> &'static str {
        "wordpress"
    }

    fn profile(&self) -> &SiteProfile {
        &PROFILE
    }

    /// Collapses media-library size variants onto the original upload.
    fn canonical_asset_url(&self, mut url: Url) -> Url {
        if !url.path().contains("/wp-content/uploads/") {
            return url;
        }
        let path = RESIZED_UPLOAD_RE.replace(url.path(), "$1").into_owned();
        url.set_path(&path);
        url
    }
}
