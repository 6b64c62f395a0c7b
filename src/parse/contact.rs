//! Email, phone and postal address recognizers.
//!
//! Each recognizer runs over a pool of candidate text (footer, sidebar,
//! contact blocks) and returns the first plausible match.

use regex::Regex;
use std::sync::LazyLock;

fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

const EMAIL_PATTERN: &str = r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b";

// North American numbers first, then "+CC ..." international forms
const PHONE_NANP_PATTERN: &str = r"(?:\+?1[\s.-]?)?\(?\b\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}\b";
const PHONE_INTL_PATTERN: &str = r"\+\d{1,3}(?:[\s.-]?\(?\d{1,4}\)?){2,5}";

const ADDRESS_PATTERN: &str = concat!(
    r"\b\d{1,6}\s+",
    r"(?:[A-Z0-9][\w.'-]*\s+){1,5}?",
    r"(?i:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln|Way|Court|Ct|Place|Pl|",
    r"Parkway|Pkwy|Highway|Hwy|Circle|Cir|Square|Sq|Terrace|Trail|Plaza)\b\.?",
    r"(?:,?\s+(?:Suite|Ste|Unit|#)\s*[\w-]+)?",
    r"(?:,\s*[A-Z][A-Za-z.' -]+)?",
    r"(?:,\s*[A-Z]{2}\b)?",
    r"(?:\s+\d{5}(?:-\d{4})?)?",
);

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(EMAIL_PATTERN, "EMAIL_RE"));
static PHONE_NANP_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PHONE_NANP_PATTERN, "PHONE_NANP_RE"));
static PHONE_INTL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PHONE_INTL_PATTERN, "PHONE_INTL_RE"));
static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ADDRESS_PATTERN, "ADDRESS_RE"));

/// Asset file names such as `logo@2x.png` look like addresses to the regex.
const NOT_EMAIL_SUFFIXES: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp"];

/// First email address in `text`, lowercased.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_ascii_lowercase())
        .find(|email| !NOT_EMAIL_SUFFIXES.iter().any(|ext| email.ends_with(ext)))
}

/// First phone number in `text`, as written.
///
/// Candidates must carry 10 to 15 digits.
pub fn extract_phone(text: &str) -> Option<String> {
    [&*PHONE_NANP_RE, &*PHONE_INTL_RE].into_iter().find_map(|re| {
        re.find_iter(text)
            .map(|m| m.as_str().trim())
            .find(|candidate| (10..=15).contains(&digit_count(candidate)))
            .map(str::to_string)
    })
}

/// First street address in `text`.
pub fn extract_address(text: &str) -> Option<String> {
    ADDRESS_RE.find(text).map(|m| {
        m.as_str()
            .trim()
            .trim_end_matches(|c: char| c == ',' || c.is_whitespace())
            .to_string()
    })
}

/// Value of a `mailto:` href without the scheme or query.
pub fn email_from_mailto(href: &str) -> Option<String> {
    let rest = strip_scheme(href, "mailto:")?;
    let address = rest.split('?').next().unwrap_or_default();
    extract_email(address)
}

/// Value of a `tel:` href without the scheme.
pub fn phone_from_tel(href: &str) -> Option<String> {
    let number = strip_scheme(href, "tel:")?.trim();
    if digit_count(number) >= 7 {
        Some(number.to_string())
    } else {
        None
    }
}

fn strip_scheme<'a>(href: &'a str, scheme: &str) -> Option<&'a str> {
    let href = href.trim();
    match (href.get(..scheme.len()), href.get(scheme.len()..)) {
        (Some(prefix), Some(rest)) if prefix.eq_ignore_ascii_case(scheme) => Some(rest),
        _ => None,
    }
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}
