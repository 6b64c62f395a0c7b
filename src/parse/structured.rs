//! JSON-LD structured data.
//!
//! Business sites frequently embed a schema.org `LocalBusiness` (or
//! `Organization`) block carrying exactly the identity fields we want. This
//! module finds those blocks, including ones nested in `@graph`, and maps
//! them onto [`ScrapedBusiness`].

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::models::ScrapedBusiness;
use crate::parse::text::clean_text;

// Matches both quote styles and any attribute order
const JSON_LD_SCRIPT_PATTERN: &str =
    r#"(?is)<script[^>]*type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#;

static JSON_LD_SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(JSON_LD_SCRIPT_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in JSON_LD_SCRIPT_RE: {}. This is a programming error.",
            JSON_LD_SCRIPT_PATTERN, e
        )
    })
});

/// schema.org types treated as "the business" besides anything ending in
/// `Business`.
const BUSINESS_TYPES: &[&str] = &[
    "Organization",
    "Corporation",
    "Restaurant",
    "Store",
    "Dentist",
    "Physician",
    "MedicalClinic",
    "Attorney",
    "Plumber",
    "Electrician",
    "HVACBusiness",
    "HairSalon",
    "BeautySalon",
    "DaySpa",
    "AutoRepair",
    "RealEstateAgent",
    "Hotel",
    "CafeOrCoffeeShop",
    "Bakery",
    "GeneralContractor",
    "RoofingContractor",
    "ProfessionalService",
];

/// Parses every JSON-LD block in `html`.
///
/// Top-level arrays are flattened; malformed blocks are skipped with a debug log.
pub fn extract_json_ld(html: &str) -> Vec<Value> {
    let mut values = Vec::new();

    for cap in JSON_LD_SCRIPT_RE.captures_iter(html) {
        let Some(content) = cap.get(1) else {
            continue;
        };
        match serde_json::from_str::<Value>(content.as_str().trim()) {
            Ok(Value::Array(items)) => values.extend(items),
            Ok(value) => values.push(value),
            Err(e) => log::debug!("Skipping malformed JSON-LD block: {}", e),
        }
    }

    values
}

/// Business identity from the first business-typed JSON-LD node.
///
/// Returns `None` when no such node exists.
pub fn extract_business_data(html: &str) -> Option<ScrapedBusiness> {
    let values = extract_json_ld(html);
    let node = business_nodes(&values).next()?;

    Some(ScrapedBusiness {
        name: string_field(node, "name"),
        tagline: string_field(node, "slogan"),
        description: string_field(node, "description"),
        phone: string_field(node, "telephone"),
        email: string_field(node, "email")
            .map(|e| e.trim_start_matches("mailto:").to_string()),
        address: node.get("address").and_then(format_address),
        hours: format_hours(node),
    })
}

/// Business-typed nodes, searching top-level values and `@graph` arrays.
fn business_nodes(values: &[Value]) -> impl Iterator<Item = &Value> {
    values
        .iter()
        .flat_map(|value| {
            let graph = value
                .get("@graph")
                .and_then(Value::as_array)
                .map(|items| items.iter())
                .into_iter()
                .flatten();
            std::iter::once(value).chain(graph)
        })
        .filter(|node| is_business_type(node))
}

fn is_business_type(node: &Value) -> bool {
    let matches = |t: &str| t.ends_with("Business") || BUSINESS_TYPES.contains(&t);
    match node.get("@type") {
        Some(Value::String(t)) => matches(t),
        Some(Value::Array(types)) => types.iter().filter_map(Value::as_str).any(matches),
        _ => false,
    }
}

fn string_field(node: &Value, key: &str) -> Option<String> {
    node.get(key).and_then(Value::as_str).and_then(clean_text)
}

/// Formats a `PostalAddress` (or plain string) as a single line:
/// `street, locality, region postalCode`.
fn format_address(address: &Value) -> Option<String> {
    if let Some(text) = address.as_str() {
        return clean_text(text);
    }
    // Some sites publish a list of addresses; the first is the main location
    if let Some(first) = address.as_array().and_then(|items| items.first()) {
        return format_address(first);
    }

    let part = |key: &str| string_field(address, key);
    let region_postal = [part("addressRegion"), part("postalCode")]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    let parts: Vec<String> = [
        part("streetAddress"),
        part("addressLocality"),
        clean_text(&region_postal),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// `openingHours` (string or list), else `openingHoursSpecification`
/// rendered as `Monday 09:00-17:00; ...`.
fn format_hours(node: &Value) -> Option<String> {
    match node.get("openingHours") {
        Some(Value::String(hours)) => return clean_text(hours),
        Some(Value::Array(items)) => {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("; ");
            return clean_text(&joined);
        }
        _ => {}
    }

    let specs = node.get("openingHoursSpecification")?;
    let specs: Vec<&Value> = match specs {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };
    let lines: Vec<String> = specs
        .into_iter()
        .filter_map(|spec| {
            let days = match spec.get("dayOfWeek")? {
                Value::String(day) => short_day(day).to_string(),
                Value::Array(days) => days
                    .iter()
                    .filter_map(Value::as_str)
                    .map(short_day)
                    .collect::<Vec<_>>()
                    .join(", "),
                _ => return None,
            };
            let opens = spec.get("opens").and_then(Value::as_str)?;
            let closes = spec.get("closes").and_then(Value::as_str)?;
            Some(format!("{} {}-{}", days, opens, closes))
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("; "))
    }
}

/// `https://schema.org/Monday` -> `Monday`
fn short_day(day: &str) -> &str {
    day.rsplit('/').next().unwrap_or(day)
}
