//! Platform to extractor dispatch.

use std::collections::HashMap;

use crate::platform::Platform;

use super::{
    Extractor, GenericExtractor, ShopifyExtractor, SquarespaceExtractor, WixExtractor,
    WordPressExtractor,
};

/// Maps platforms to extraction strategies.
///
/// Platforms without an entry (including `Unknown`) use the generic
/// extractor.
pub struct ExtractorRegistry {
    extractors: HashMap<Platform, Box<dyn Extractor>>,
    fallback: Box<dyn Extractor>,
}

impl ExtractorRegistry {
    /// Registry with every built-in extractor.
    pub fn new() -> Self {
        let mut registry = Self::generic_only();
        registry.register(Platform::WordPress, Box::new(WordPressExtractor));
        registry.register(Platform::Squarespace, Box::new(SquarespaceExtractor));
        registry.register(Platform::Wix, Box::new(WixExtractor));
        registry.register(Platform::Shopify, Box::new(ShopifyExtractor));
        registry
    }

    /// Registry that sends every platform to the generic extractor.
    pub fn generic_only() -> Self {
        Self {
            extractors: HashMap::new(),
            fallback: Box::new(GenericExtractor),
        }
    }

    /// Installs `extractor` for `platform`, returning the one it replaces.
    pub fn register(
        &mut self,
        platform: Platform,
        extractor: Box<dyn Extractor>,
    ) -> Option<Box<dyn Extractor>> {
        self.extractors.insert(platform, extractor)
    }

    /// Extractor for `platform`, or the generic one.
    pub fn get(&self, platform: Platform) -> &dyn Extractor {
        self.extractors
            .get(&platform)
            .map(|extractor| extractor.as_ref())
            .unwrap_or_else(|| self.fallback.as_ref())
    }

    /// The fallback extractor.
    pub fn generic(&self) -> &dyn Extractor {
        self.fallback.as_ref()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut mapped: Vec<(String, &'static str)> = self
            .extractors
            .iter()
            .map(|(platform, extractor)| (platform.to_string(), extractor.name()))
            .collect();
        mapped.sort();
        f.debug_struct("ExtractorRegistry")
            .field("extractors", &mapped)
            .field("fallback", &self.fallback.name())
            .finish()
    }
}
