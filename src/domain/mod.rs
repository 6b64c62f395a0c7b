//! Site identity helpers.
//!
//! Two URLs belong to the same site when they share a registrable domain
//! according to the Public Suffix List (`www.example.co.uk` and
//! `shop.example.co.uk` are the same site, `example.co.uk` and `other.co.uk`
//! are not). Hosts without a registrable domain (IP addresses, `localhost`)
//! only match themselves.

use url::{Host, Url};

/// Returns the registrable domain of `url` (e.g. `example.com` for
/// `https://www.example.com/path`).
///
/// Returns `None` for URLs without a host and for IP addresses.
pub fn registrable_domain(url: &Url) -> Option<String> {
    match url.host()? {
        Host::Ipv4(_) | Host::Ipv6(_) => None,
        Host::Domain(host) => {
            let host = host.trim_end_matches('.').to_ascii_lowercase();
            psl::domain_str(&host).map(str::to_string)
        }
    }
}

/// Returns a stable key identifying the site `url` belongs to.
///
/// The registrable domain when there is one, otherwise the lowercase host.
pub fn site_key(url: &Url) -> Option<String> {
    registrable_domain(url).or_else(|| url.host_str().map(|h| h.to_ascii_lowercase()))
}

/// Whether `a` and `b` belong to the same site.
pub fn is_same_site(a: &Url, b: &Url) -> bool {
    match (site_key(a), site_key(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
