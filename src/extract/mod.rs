//! Platform-specific content extraction.
//!
//! # Architecture
//!
//! - [`Extractor`]: one strategy per website builder, behind a common trait
//! - [`ExtractorRegistry`]: maps a detected [`Platform`](crate::platform::Platform)
//!   to its extractor, falling back to [`GenericExtractor`]
//! - [`SiteProfile`]: the selector cascades an extractor reads each field with
//!
//! Built-in extractors only differ in their profile and in how they
//! canonicalize asset URLs; the field routines themselves live in
//! `common` and are shared.

mod common;
mod generic;
mod probe;
mod profile;
mod registry;
mod shopify;
mod squarespace;
mod wix;
mod wordpress;

use scraper::Html;
use url::Url;

use crate::error_handling::ExtractionError;
use crate::models::{
    ScrapedAssets, ScrapedBusiness, ScrapedContent, ScrapedPage, ScrapedSeo, ScrapedSocial,
};
use crate::parse::extract_social_links;

pub use common::{build_page, collect_links, is_excluded_asset, name_from_title};
pub use generic::GenericExtractor;
pub use probe::{Cascade, Probe};
pub use profile::SiteProfile;
pub use registry::ExtractorRegistry;
pub use shopify::ShopifyExtractor;
pub use squarespace::SquarespaceExtractor;
pub use wix::WixExtractor;
pub use wordpress::WordPressExtractor;

/// Everything one extractor pulls from one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractorResult {
    pub business: ScrapedBusiness,
    pub content: ScrapedContent,
    pub assets: ScrapedAssets,
    pub seo: ScrapedSeo,
    pub social: ScrapedSocial,
    /// The page the document was parsed from
    pub pages: Vec<ScrapedPage>,
}

/// Extraction strategy for one family of sites.
///
/// Implementors provide a [`SiteProfile`]; every concern has a default
/// implementation driven by it. Override a concern when a platform needs
/// more than different selectors.
pub trait Extractor: Send + Sync {
    /// Short identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    fn profile(&self) -> &SiteProfile;

    /// Rewrites a resolved asset URL to its canonical form (default: unchanged).
    fn canonical_asset_url(&self, url: Url) -> Url {
        url
    }

    fn business(&self, document: &Html, raw_html: &str) -> ScrapedBusiness {
        common::extract_business(self.profile(), document, raw_html)
    }

    fn content(&self, document: &Html) -> ScrapedContent {
        common::extract_content(self.profile(), document)
    }

    fn assets(&self, document: &Html, url: &Url) -> ScrapedAssets {
        common::extract_assets(self.profile(), document, url, |asset| {
            self.canonical_asset_url(asset)
        })
    }

    fn seo(&self, document: &Html, url: &Url) -> ScrapedSeo {
        common::extract_seo(document, url)
    }

    fn social(&self, document: &Html, url: &Url) -> ScrapedSocial {
        extract_social_links(document, url)
    }

    fn page(&self, document: &Html, url: &Url) -> ScrapedPage {
        common::build_page(document, url)
    }

    /// Runs every concern over `document`, fetched from `url`.
    fn extract(
        &self,
        document: &Html,
        url: &Url,
        raw_html: &str,
    ) -> Result<ExtractorResult, ExtractionError> {
        Ok(ExtractorResult {
            business: self.business(document, raw_html),
            content: self.content(document),
            assets: self.assets(document, url),
            seo: self.seo(document, url),
            social: self.social(document, url),
            pages: vec![self.page(document, url)],
        })
    }
}
