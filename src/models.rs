//! Output data model.
//!
//! Field names serialize in camelCase and every nullable field is an
//! `Option` that serializes as `null`; downstream consumers rely on both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::platform::{Platform, PlatformDetectionResult};

/// Business identity. Every field is independently nullable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedBusiness {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub hours: Option<String>,
}

impl ScrapedBusiness {
    /// Fills every `None` field from `other`, keeping values already set.
    pub fn fill_missing(&mut self, other: ScrapedBusiness) {
        fn fill(slot: &mut Option<String>, value: Option<String>) {
            if slot.is_none() {
                *slot = value;
            }
        }
        fill(&mut self.name, other.name);
        fill(&mut self.tagline, other.tagline);
        fill(&mut self.description, other.description);
        fill(&mut self.phone, other.phone);
        fill(&mut self.email, other.email);
        fill(&mut self.address, other.address);
        fill(&mut self.hours, other.hours);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub text: String,
    pub author: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// Marketing copy found on the seed page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedContent {
    pub hero_text: Option<String>,
    pub hero_subtext: Option<String>,
    pub about_text: Option<String>,
    pub services: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub features: Vec<Feature>,
    pub cta_text: Option<String>,
}

/// Visual assets as absolute URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedAssets {
    pub logo: Option<String>,
    pub favicon: Option<String>,
    pub hero_image: Option<String>,
    /// At most `MAX_IMAGES`, no duplicates
    pub images: Vec<String>,
    /// At most `MAX_VIDEOS`, no duplicates
    pub videos: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedSeo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
}

/// Social profile URLs, first match per network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedSocial {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
    pub tiktok: Option<String>,
    pub pinterest: Option<String>,
    pub yelp: Option<String>,
    pub google_business: Option<String>,
}

impl ScrapedSocial {
    pub fn is_empty(&self) -> bool {
        *self == ScrapedSocial::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Home,
    About,
    Services,
    Contact,
    Blog,
    Portfolio,
    Pricing,
    Other,
}

/// One fetched page (the seed or a crawled page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedPage {
    pub url: String,
    pub path: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub page_type: PageType,
    /// Visible text, at most `MAX_PAGE_CONTENT_CHARS` characters
    pub content: String,
    pub headings: Vec<String>,
    pub links: Vec<String>,
}

/// Aggregate result of one scrape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedSiteData {
    /// The validated seed URL
    pub url: String,
    pub platform: Platform,
    pub platform_detection: PlatformDetectionResult,
    pub business: ScrapedBusiness,
    pub content: ScrapedContent,
    pub assets: ScrapedAssets,
    pub seo: ScrapedSeo,
    pub social: ScrapedSocial,
    /// Never empty; the first entry is the seed page
    pub pages: Vec<ScrapedPage>,
    /// Whether the HTML came from the headless renderer
    pub rendered: bool,
    pub scraped_at: DateTime<Utc>,
    pub scrape_errors: Vec<String>,
}

/// What every `scrape()` call returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResult {
    pub success: bool,
    pub data: Option<ScrapedSiteData>,
    pub errors: Vec<String>,
    /// Wall-clock time in milliseconds
    #[serde(rename = "duration")]
    pub duration_ms: u64,
}

impl ScrapeResult {
    pub fn failed(errors: Vec<String>, duration_ms: u64) -> Self {
        Self {
            success: false,
            data: None,
            errors,
            duration_ms,
        }
    }
}
