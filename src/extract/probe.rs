//! Ordered selector cascades.
//!
//! A [`Probe`] is one CSS selector plus what to read from the matched
//! element (its text or an attribute). A [`Cascade`] tries its probes in
//! order; the first probe that yields a non-blank value wins.

use scraper::{ElementRef, Html, Selector};

use crate::parse::{clean_text, element_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Text,
    Attr(&'static str),
}

/// One selector in a cascade.
#[derive(Debug, Clone)]
pub struct Probe {
    selector: Selector,
    source: Source,
    min_chars: usize,
    max_chars: Option<usize>,
}

impl Probe {
    /// Reads the cleaned text of matched elements.
    pub fn text(selector: &str) -> Self {
        Self::with_source(selector, Source::Text)
    }

    /// Reads attribute `attr` of matched elements.
    pub fn attr(selector: &str, attr: &'static str) -> Self {
        Self::with_source(selector, Source::Attr(attr))
    }

    fn with_source(selector: &str, source: Source) -> Self {
        Self {
            selector: crate::utils::parse_selector_with_fallback(selector, "extractor probe"),
            source,
            min_chars: 1,
            max_chars: None,
        }
    }

    /// Ignores values shorter than `chars` characters.
    pub fn min_chars(mut self, chars: usize) -> Self {
        self.min_chars = chars.max(1);
        self
    }

    /// Ignores values longer than `chars` characters.
    pub fn max_chars(mut self, chars: usize) -> Self {
        self.max_chars = Some(chars);
        self
    }

    fn read(&self, element: ElementRef<'_>) -> Option<String> {
        let value = match self.source {
            Source::Text => element_text(element)?,
            Source::Attr(attr) => clean_text(element.value().attr(attr)?)?,
        };
        let chars = value.chars().count();
        if chars < self.min_chars || self.max_chars.is_some_and(|max| chars > max) {
            return None;
        }
        Some(value)
    }

    /// First acceptable value in document order.
    pub fn first(&self, document: &Html) -> Option<String> {
        document.select(&self.selector).find_map(|el| self.read(el))
    }

    /// First acceptable value below `root`.
    pub fn first_in(&self, root: ElementRef<'_>) -> Option<String> {
        root.select(&self.selector).find_map(|el| self.read(el))
    }

    /// Every acceptable value in document order.
    pub fn all(&self, document: &Html) -> Vec<String> {
        document
            .select(&self.selector)
            .filter_map(|el| self.read(el))
            .collect()
    }

    /// Matched elements, for probes used as containers.
    pub fn elements<'a>(&'a self, document: &'a Html) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        document.select(&self.selector)
    }
}

/// Probes tried in priority order.
#[derive(Debug, Clone, Default)]
pub struct Cascade(Vec<Probe>);

impl Cascade {
    pub fn new(probes: Vec<Probe>) -> Self {
        Self(probes)
    }

    /// Prepends `probes`, keeping the existing ones as fallbacks.
    pub fn before(self, probes: Vec<Probe>) -> Self {
        let mut combined = probes;
        combined.extend(self.0);
        Self(combined)
    }

    pub fn probes(&self) -> &[Probe] {
        &self.0
    }

    /// Value of the first probe that yields anything.
    pub fn first(&self, document: &Html) -> Option<String> {
        self.0.iter().find_map(|probe| probe.first(document))
    }

    /// Same as [`Cascade::first`], scoped below `root`.
    pub fn first_in(&self, root: ElementRef<'_>) -> Option<String> {
        self.0.iter().find_map(|probe| probe.first_in(root))
    }

    /// Values of the first probe that yields anything, de-duplicated and capped.
    pub fn collect(&self, document: &Html, limit: usize) -> Vec<String> {
        for probe in &self.0 {
            let mut values: Vec<String> = Vec::new();
            for value in probe.all(document) {
                if values.len() == limit {
                    break;
                }
                if !values.contains(&value) {
                    values.push(value);
                }
            }
            if !values.is_empty() {
                return values;
            }
        }
        Vec::new()
    }

    /// Container elements of the first probe that matches anything.
    pub fn containers<'a>(&'a self, document: &'a Html) -> Vec<ElementRef<'a>> {
        self.0
            .iter()
            .map(|probe| probe.elements(document).collect::<Vec<_>>())
            .find(|found| !found.is_empty())
            .unwrap_or_default()
    }
}
