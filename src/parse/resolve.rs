//! URL normalization against a page's base URL.

use url::Url;

/// Schemes that never point at a fetchable resource.
const NON_NAVIGABLE_SCHEMES: &[&str] = &["javascript:", "data:", "mailto:", "tel:", "sms:", "about:"];

/// Resolves `candidate` against `base` into an absolute http(s) URL.
///
/// Handles relative (`/img/a.png`, `../a.png`) and protocol-relative
/// (`//cdn.example.com/a.png`) references. Already-absolute URLs come back
/// unchanged apart from standard normalization, so applying this twice is a
/// no-op. Returns `None` for empty and fragment-only candidates, and for
/// `javascript:`, `data:`, `mailto:` and `tel:` references.
pub fn normalize_url(candidate: &str, base: &Url) -> Option<String> {
    let candidate = candidate.trim();
    if candidate.is_empty() || candidate.starts_with('#') {
        return None;
    }
    let lower = candidate.to_ascii_lowercase();
    if NON_NAVIGABLE_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        return None;
    }

    let resolved = base.join(candidate).ok()?;
    match resolved.scheme() {
        "http" | "https" => Some(resolved.to_string()),
        _ => None,
    }
}

/// Same as [`normalize_url`] but with the fragment removed.
pub fn normalize_link(candidate: &str, base: &Url) -> Option<Url> {
    let normalized = normalize_url(candidate, base)?;
    let mut url = Url::parse(&normalized).ok()?;
    url.set_fragment(None);
    Some(url)
}
