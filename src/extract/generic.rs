//! Fallback extractor for unknown platforms and builders without a
//! dedicated strategy.

use std::sync::LazyLock;

use super::{Extractor, SiteProfile};

static PROFILE: LazyLock<SiteProfile> = LazyLock::new(SiteProfile::generic);

#[derive(Debug, Clone, Copy, Default)]
pub struct GenericExtractor;

impl Extractor for GenericExtractor {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn profile(&self) -> &SiteProfile {
        &PROFILE
    }
}
