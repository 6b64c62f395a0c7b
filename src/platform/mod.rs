//! Platform classification.
//!
//! Scores a fetched document against a static table of website-builder
//! signatures and reports the best match with a confidence level and the
//! list of patterns that fired.
//!
//! Scoring weights per match:
//! - script `src` matching a script pattern: +3 per `<script>` element
//! - `<link href>` matching a link pattern: +2 per `<link>` element
//! - raw HTML containing a pattern: +2 per pattern
//! - `<meta>` whose name and content match: +5 per `<meta>` element
//! - response header matching a header pattern: +4 per pattern
//!
//! The strictly highest score wins; on a tie the signature registered first
//! keeps the lead. Scores of 10 and above are `high` confidence, 5 to 9
//! `medium`, anything lower `low`.

mod detection;
mod patterns;
mod signatures;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::config::{HIGH_CONFIDENCE_SCORE, MEDIUM_CONFIDENCE_SCORE};

pub use detection::{detect_platform, detect_platform_with};
pub use signatures::{PlatformSignature, SIGNATURES};

/// Website-building platforms the classifier knows about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    WordPress,
    Squarespace,
    Wix,
    Shopify,
    Webflow,
    GoDaddy,
    Weebly,
    Duda,
    Unknown,
}

/// Static metadata about a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformInfo {
    pub display_name: &'static str,
    /// Primary content is typically rendered client-side
    pub js_rendered: bool,
}

impl Platform {
    pub fn info(self) -> PlatformInfo {
        let (display_name, js_rendered) = match self {
            Platform::WordPress => ("WordPress", false),
            Platform::Squarespace => ("Squarespace", false),
            Platform::Wix => ("Wix", true),
            Platform::Shopify => ("Shopify", false),
            Platform::Webflow => ("Webflow", false),
            Platform::GoDaddy => ("GoDaddy Website Builder", true),
            Platform::Weebly => ("Weebly", false),
            Platform::Duda => ("Duda", true),
            Platform::Unknown => ("Unknown", false),
        };
        PlatformInfo {
            display_name,
            js_rendered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_CONFIDENCE_SCORE {
            Confidence::High
        } else if score >= MEDIUM_CONFIDENCE_SCORE {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }
}

/// Outcome of classifying one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDetectionResult {
    pub platform: Platform,
    pub confidence: Confidence,
    pub score: u32,
    /// Matched patterns in the order they were found, e.g. `script:wp-content/`
    pub indicators: Vec<String>,
}

impl PlatformDetectionResult {
    pub fn unknown() -> Self {
        Self {
            platform: Platform::Unknown,
            confidence: Confidence::Low,
            score: 0,
            indicators: Vec::new(),
        }
    }

    /// Static metadata of the detected platform.
    pub fn info(&self) -> PlatformInfo {
        self.platform.info()
    }
}
