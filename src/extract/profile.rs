//! Per-platform selector profiles.
//!
//! A [`SiteProfile`] holds one [`Cascade`] per extracted field. Platform
//! profiles start from [`SiteProfile::generic`] and put their own,
//! more specific probes in front of the generic ones.

use super::probe::{Cascade, Probe};

/// Selector cascades for every extracted field.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    // business
    pub name: Cascade,
    pub tagline: Cascade,
    pub description: Cascade,
    pub address: Cascade,
    pub hours: Cascade,
    /// Containers whose text is pooled for email, phone and address matching
    pub contact_blocks: Cascade,

    // content
    pub hero_text: Cascade,
    pub hero_subtext: Cascade,
    pub about_text: Cascade,
    pub services: Cascade,
    pub cta_text: Cascade,
    /// Testimonial containers
    pub testimonials: Cascade,
    /// Feature containers (title + description)
    pub features: Cascade,

    // assets (attribute probes yielding URLs)
    pub logo: Cascade,
    pub hero_image: Cascade,
    /// Elements with an inline `background-image` that may carry the hero
    pub hero_background: Cascade,
}

impl SiteProfile {
    /// Selectors that work across hand-built sites and most themes.
    pub fn generic() -> Self {
        Self {
            name: Cascade::new(vec![
                Probe::attr("meta[property='og:site_name']", "content"),
                Probe::text("[itemprop='name']").max_chars(100),
                Probe::text("header .site-title, header .site-name, .site-title").max_chars(100),
                Probe::text(".navbar-brand, .brand, header .logo").max_chars(100),
                Probe::attr("header img[class*='logo'], img[class*='logo']", "alt").max_chars(100),
            ]),
            tagline: Cascade::new(vec![
                Probe::text(".tagline, .site-description, .slogan, [class*='tagline']")
                    .max_chars(200),
                Probe::text("[itemprop='slogan']").max_chars(200),
            ]),
            description: Cascade::new(vec![
                Probe::attr("meta[name='description']", "content"),
                Probe::attr("meta[property='og:description']", "content"),
                Probe::text("[itemprop='description']"),
            ]),
            address: Cascade::new(vec![
                Probe::text("[itemprop='address']").max_chars(200),
                Probe::text("address").max_chars(200),
            ]),
            hours: Cascade::new(vec![
                Probe::text("[class*='hours']").max_chars(300),
                Probe::text("[id*='hours']").max_chars(300),
            ]),
            contact_blocks: Cascade::new(vec![
                Probe::text("footer"),
                Probe::text("aside, .sidebar, #sidebar"),
                Probe::text("address, [class*='contact'], [id*='contact']"),
                Probe::text("[itemprop='telephone'], [itemprop='email']"),
            ]),

            hero_text: Cascade::new(vec![
                Probe::text(".hero h1, [class*='hero'] h1, .jumbotron h1").max_chars(200),
                Probe::text("[class*='banner'] h1, header h1").max_chars(200),
                Probe::text("h1").max_chars(200),
            ]),
            hero_subtext: Cascade::new(vec![
                Probe::text(".hero p, [class*='hero'] p, .jumbotron p").max_chars(400),
                Probe::text("[class*='hero'] h2, [class*='banner'] p").max_chars(400),
                Probe::text("h1 + p, h1 + h2").max_chars(400),
            ]),
            about_text: Cascade::new(vec![
                Probe::text("#about p, .about p, section[id*='about'] p").min_chars(40),
                Probe::text("[class*='about'] p").min_chars(40),
                Probe::text("main p, article p").min_chars(80),
                Probe::text("p").min_chars(80),
            ]),
            services: Cascade::new(vec![
                Probe::text("#services h3, .services h3, section[id*='service'] h3").max_chars(120),
                Probe::text("[class*='service'] h3, [class*='service'] h4").max_chars(120),
                Probe::text("#services li, .services li").max_chars(120),
            ]),
            cta_text: Cascade::new(vec![
                Probe::text(".cta a, [class*='cta'] a, a[class*='cta']").max_chars(60),
                Probe::text("a.btn, a.button, a[class*='button'], a[class*='btn']").max_chars(60),
                Probe::text("button").max_chars(60),
            ]),
            testimonials: Cascade::new(vec![
                Probe::text(".testimonial, [class*='testimonial-item'], [class*='review-item']"),
                Probe::text("[class*='testimonial'] blockquote, [class*='review'] blockquote"),
                Probe::text("blockquote"),
            ]),
            features: Cascade::new(vec![
                Probe::text(".feature, [class*='feature-item'], [class*='feature-box']"),
                Probe::text("[class*='feature']"),
            ]),

            logo: Cascade::new(vec![
                Probe::attr("header img[class*='logo'], img[class*='logo']", "src"),
                Probe::attr("[class*='logo'] img, [id*='logo'] img", "src"),
                Probe::attr("header img", "src"),
            ]),
            hero_image: Cascade::new(vec![
                Probe::attr(".hero img, [class*='hero'] img", "src"),
                Probe::attr("[class*='banner'] img, .jumbotron img", "src"),
            ]),
            hero_background: Cascade::new(vec![Probe::attr(
                "[class*='hero'][style], [class*='banner'][style], .jumbotron[style]",
                "style",
            )]),
        }
    }
}
