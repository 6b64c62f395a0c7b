//! Wix (Thunderbolt renderer).
//!
//! Wix markup is generated: class names are hashed, so the profile leans on
//! `data-testid` and element ids that stay stable across sites.

use std::sync::LazyLock;

use url::Url;

use super::{Extractor, Probe, SiteProfile};

static PROFILE: LazyLock<SiteProfile> = LazyLock::new(|| {
    let base = SiteProfile::generic();
    SiteProfile {
        name: base.name.before(vec![
            Probe::text("#SITE_HEADER [data-testid='richTextElement'] h1").max_chars(100),
            Probe::text("#SITE_HEADER [data-testid='richTextElement'] p").max_chars(100),
        ]),
        hero_text: base.hero_text.before(vec![
            Probe::text("#PAGES_CONTAINER section:first-of-type h1").max_chars(200),
            Probe::text("[data-testid='richTextElement'] h1").max_chars(200),
        ]),
        hero_subtext: base.hero_subtext.before(vec![
            Probe::text("#PAGES_CONTAINER section:first-of-type [data-testid='richTextElement'] p")
                .max_chars(400),
        ]),
        about_text: base.about_text.before(vec![
            Probe::text("[data-testid='richTextElement'] p").min_chars(80),
        ]),
        services: base.services.before(vec![
            Probe::text("[data-testid='richTextElement'] h3").max_chars(120),
        ]),
        cta_text: base.cta_text.before(vec![
            Probe::text("a[data-testid='linkElement'] span, [data-testid='buttonElement'] span")
                .max_chars(60),
        ]),
        contact_blocks: base.contact_blocks.before(vec![Probe::text("#SITE_FOOTER")]),
        logo: base.logo.before(vec![
            Probe::attr("#SITE_HEADER wow-image img, #SITE_HEADER img", "src"),
        ]),
        hero_image: base.hero_image.before(vec![
            Probe::attr("#PAGES_CONTAINER section:first-of-type wow-image img", "src"),
            Probe::attr("#PAGES_CONTAINER section:first-of-type img", "src"),
        ]),
        ..base
    }
});

#[derive(Debug, Clone, Copy, Default)]
pub struct WixExtractor;

impl Extractor for WixExtractor {
    fn name(&self) -> &'static str {
        "wix"
    }

    fn profile(&self) -> &SiteProfile {
        &PROFILE
    }

    /// Strips the on-the-fly transform suffix from media URLs:
    /// `/media/abc.jpg/v1/fill/w_300,h_200/abc.jpg` becomes `/media/abc.jpg`.
    fn canonical_asset_url(&self, mut url: Url) -> Url {
        if url.host_str() != Some("static.wixstatic.com") {
            return url;
        }
        let path = match url.path().find("/v1/") {
            Some(idx) => url.path()[..idx].to_string(),
            None => return url,
        };
        url.set_path(&path);
        url.set_query(None);
        url
    }
}
