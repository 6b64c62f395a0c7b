//! Signature pattern matching.
//!
//! Patterns are plain substrings unless they carry regex syntax, in which
//! case they are compiled once as case-insensitive regexes. Matching runs
//! against lowercased text. An empty pattern matches anything, which is how
//! "this header/meta tag is present" is expressed.

use regex::Regex;

#[derive(Debug, Clone)]
pub(crate) enum Pattern {
    Substring(String),
    Regex { source: String, regex: Regex },
}

impl Pattern {
    pub(crate) fn new(pattern: &str) -> Self {
        let is_regex = pattern.starts_with('^')
            || pattern.contains('$')
            || pattern.contains('\\')
            || pattern.contains('[')
            || pattern.contains('(')
            || pattern.contains('*')
            || pattern.contains('+')
            || pattern.contains('?');

        if is_regex {
            match Regex::new(&format!("(?i){}", pattern)) {
                Ok(regex) => {
                    return Pattern::Regex {
                        source: pattern.to_string(),
                        regex,
                    }
                }
                Err(e) => {
                    // Treated as a literal below
                    log::error!("Invalid signature regex '{}': {}", pattern, e);
                }
            }
        }
        Pattern::Substring(pattern.to_lowercase())
    }

    /// Matches against already-lowercased text.
    pub(crate) fn matches(&self, lowered: &str) -> bool {
        match self {
            Pattern::Substring(s) => s.is_empty() || lowered.contains(s.as_str()),
            Pattern::Regex { regex, .. } => regex.is_match(lowered),
        }
    }

    /// The pattern as written, for indicator strings.
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Pattern::Substring(s) => s,
            Pattern::Regex { source, .. } => source,
        }
    }
}

/// A `(key, value)` pattern for meta tags and response headers.
#[derive(Debug, Clone)]
pub(crate) struct KeyedPattern {
    /// Lowercased meta name / header name, compared for equality
    pub(crate) key: String,
    pub(crate) value: Pattern,
}

impl KeyedPattern {
    pub(crate) fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_ascii_lowercase(),
            value: Pattern::new(value),
        }
    }

    pub(crate) fn matches(&self, key: &str, lowered_value: &str) -> bool {
        self.key == key && self.value.matches(lowered_value)
    }

    pub(crate) fn describe(&self) -> String {
        if self.value.as_str().is_empty() {
            self.key.clone()
        } else {
            format!("{}={}", self.key, self.value.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_pattern_is_case_insensitive() {
        let pattern = Pattern::new("WP-Content/");
        assert!(pattern.matches("https://acme.com/wp-content/themes/x.js"));
        assert!(!pattern.matches("https://acme.com/content/x.js"));
    }

    #[test]
    fn test_regex_pattern() {
        let pattern = Pattern::new(r"^wordpress\s*\d");
        assert!(pattern.matches("wordpress 6.3"));
        assert!(!pattern.matches("powered by wordpress"));
        assert_eq!(pattern.as_str(), r"^wordpress\s*\d");
    }

    #[test]
    fn test_invalid_regex_falls_back_to_substring() {
        let pattern = Pattern::new("wix(");
        assert!(pattern.matches("static.wix(.com"));
    }

    #[test]
    fn test_empty_pattern_means_present() {
        let keyed = KeyedPattern::new("X-Shopid", "");
        assert!(keyed.matches("x-shopid", "12345"));
        assert!(!keyed.matches("x-request-id", "12345"));
        assert_eq!(keyed.describe(), "x-shopid");
    }
}
