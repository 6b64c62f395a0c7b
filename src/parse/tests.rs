// Parse module tests.

use super::*;
use crate::models::PageType;
use scraper::Html;
use url::Url;

fn base(s: &str) -> Url {
    Url::parse(s).unwrap()
}

// clean_text / truncate_chars / visible text

#[test]
fn test_clean_text_collapses_whitespace() {
    assert_eq!(
        clean_text("  Acme \n\t Plumbing   Co. ").as_deref(),
        Some("Acme Plumbing Co.")
    );
}

#[test]
fn test_clean_text_blank_is_none() {
    assert_eq!(clean_text(""), None);
    assert_eq!(clean_text(" \n\t "), None);
}

#[test]
fn test_truncate_chars_counts_characters() {
    assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
    assert_eq!(truncate_chars("short", 100), "short");
}

#[test]
fn test_body_text_skips_scripts_and_styles() {
    let html = r#"<html><head><title>T</title></head><body>
        <h1>Welcome</h1>
        <script>var tracking = "secret";</script>
        <style>.x { color: red }</style>
        <p>We fix   pipes.</p>
        <noscript>Enable JS</noscript>
    </body></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(body_text(&document), "Welcome We fix pipes.");
}

// Contact recognizers

#[test]
fn test_extract_email() {
    assert_eq!(
        extract_email("Write to Info@AcmePlumbing.com for a quote").as_deref(),
        Some("info@acmeplumbing.com")
    );
    assert_eq!(extract_email("No address here"), None);
}

#[test]
fn test_extract_email_ignores_retina_image_names() {
    assert_eq!(
        extract_email("logo@2x.png hello@acme.io").as_deref(),
        Some("hello@acme.io")
    );
}

#[test]
fn test_extract_phone_north_american_formats() {
    assert_eq!(
        extract_phone("Call us at (555) 123-4567 today").as_deref(),
        Some("(555) 123-4567")
    );
    assert_eq!(
        extract_phone("Phone: 555.123.4567").as_deref(),
        Some("555.123.4567")
    );
    assert_eq!(
        extract_phone("Tel +1 555-123-4567").as_deref(),
        Some("+1 555-123-4567")
    );
}

#[test]
fn test_extract_phone_international() {
    assert_eq!(
        extract_phone("Ring +44 20 7946 0958 anytime").as_deref(),
        Some("+44 20 7946 0958")
    );
}

#[test]
fn test_extract_phone_rejects_short_numbers() {
    assert_eq!(extract_phone("Open 9 to 5, est. 1998"), None);
}

#[test]
fn test_extract_address() {
    assert_eq!(
        extract_address("Visit us at 123 Main Street, Springfield, IL 62704 any day").as_deref(),
        Some("123 Main Street, Springfield, IL 62704")
    );
    assert_eq!(
        extract_address("Find us: 42 Oak Hill Rd. Suite 200").as_deref(),
        Some("42 Oak Hill Rd. Suite 200")
    );
    assert_eq!(extract_address("We have 20 years of experience"), None);
}

#[test]
fn test_mailto_and_tel_hrefs() {
    assert_eq!(
        email_from_mailto("mailto:hello@acme.com?subject=Hi").as_deref(),
        Some("hello@acme.com")
    );
    assert_eq!(email_from_mailto("https://acme.com"), None);
    assert_eq!(
        phone_from_tel("tel:+15551234567").as_deref(),
        Some("+15551234567")
    );
    assert_eq!(phone_from_tel("tel:"), None);
}

#[test]
fn test_mailto_and_tel_hrefs_with_non_ascii_input() {
    assert_eq!(phone_from_tel("aéé"), None);
    assert_eq!(email_from_mailto("mailé"), None);
    assert_eq!(phone_from_tel("é"), None);
}

// normalize_url

#[test]
fn test_normalize_url_relative_path() {
    assert_eq!(
        normalize_url("/img/a.png", &base("https://ex.com/blog/")).as_deref(),
        Some("https://ex.com/img/a.png")
    );
    assert_eq!(
        normalize_url("a.png", &base("https://ex.com/blog/")).as_deref(),
        Some("https://ex.com/blog/a.png")
    );
}

#[test]
fn test_normalize_url_protocol_relative() {
    assert_eq!(
        normalize_url("//cdn.ex.com/x.jpg", &base("https://ex.com/")).as_deref(),
        Some("https://cdn.ex.com/x.jpg")
    );
}

#[test]
fn test_normalize_url_is_idempotent_on_absolute_urls() {
    let page = base("https://ex.com/blog/");
    let absolute = "https://other.com/path/file.jpg?w=200";
    let once = normalize_url(absolute, &page).unwrap();
    assert_eq!(once, absolute);
    assert_eq!(normalize_url(&once, &page).unwrap(), once);
}

#[test]
fn test_normalize_url_rejects_non_navigable() {
    let page = base("https://ex.com/");
    assert_eq!(normalize_url("javascript:void(0)", &page), None);
    assert_eq!(normalize_url("data:image/png;base64,AAAA", &page), None);
    assert_eq!(normalize_url("mailto:a@b.com", &page), None);
    assert_eq!(normalize_url("tel:5551234567", &page), None);
    assert_eq!(normalize_url("#top", &page), None);
    assert_eq!(normalize_url("   ", &page), None);
    assert_eq!(normalize_url("ftp://ex.com/file", &page), None);
}

#[test]
fn test_normalize_link_strips_fragment() {
    let link = normalize_link("/about#team", &base("https://ex.com/")).unwrap();
    assert_eq!(link.as_str(), "https://ex.com/about");
}

// Social links

#[test]
fn test_extract_social_links_first_match_wins() {
    let html = r#"<html><body><footer>
        <a href="https://www.facebook.com/acmeplumbing">FB</a>
        <a href="https://facebook.com/someone-else">FB 2</a>
        <a href="https://instagram.com/acme">IG</a>
        <a href="https://x.com/acme">X</a>
        <a href="//www.linkedin.com/company/acme">LI</a>
        <a href="https://www.youtube.com/@acme">YT</a>
        <a href="https://www.yelp.com/biz/acme-plumbing-springfield">Yelp</a>
        <a href="https://g.page/acme-plumbing">Google</a>
    </footer></body></html>"#;
    let document = Html::parse_document(html);
    let social = extract_social_links(&document, &base("https://acme.com/"));
    assert_eq!(
        social.facebook.as_deref(),
        Some("https://www.facebook.com/acmeplumbing")
    );
    assert_eq!(social.instagram.as_deref(), Some("https://instagram.com/acme"));
    assert_eq!(social.twitter.as_deref(), Some("https://x.com/acme"));
    assert_eq!(
        social.linkedin.as_deref(),
        Some("https://www.linkedin.com/company/acme")
    );
    assert_eq!(social.youtube.as_deref(), Some("https://www.youtube.com/@acme"));
    assert!(social.yelp.is_some());
    assert_eq!(
        social.google_business.as_deref(),
        Some("https://g.page/acme-plumbing")
    );
    assert_eq!(social.tiktok, None);
    assert_eq!(social.pinterest, None);
}

#[test]
fn test_extract_social_links_skips_share_widgets() {
    let html = r#"<html><body>
        <a href="https://www.facebook.com/sharer/sharer.php?u=https://acme.com">Share</a>
        <a href="https://twitter.com/intent/tweet?text=hi">Tweet</a>
        <a href="https://www.facebook.com/acme">Follow</a>
    </body></html>"#;
    let document = Html::parse_document(html);
    let social = extract_social_links(&document, &base("https://acme.com/"));
    assert_eq!(social.facebook.as_deref(), Some("https://www.facebook.com/acme"));
    assert_eq!(social.twitter, None);
}

#[test]
fn test_extract_social_links_empty_document() {
    let document = Html::parse_document("<html><body></body></html>");
    assert!(extract_social_links(&document, &base("https://acme.com/")).is_empty());
}

// Page types

#[test]
fn test_determine_page_type_from_path() {
    assert_eq!(determine_page_type("/", None, ""), PageType::Home);
    assert_eq!(determine_page_type("", None, ""), PageType::Home);
    assert_eq!(determine_page_type("/contact-us/", None, ""), PageType::Contact);
    assert_eq!(determine_page_type("/about", None, ""), PageType::About);
    assert_eq!(determine_page_type("/our-services/drains", None, ""), PageType::Services);
    assert_eq!(determine_page_type("/pricing", None, ""), PageType::Pricing);
    assert_eq!(determine_page_type("/gallery", None, ""), PageType::Portfolio);
    assert_eq!(determine_page_type("/blog/2024/post", None, ""), PageType::Blog);
}

#[test]
fn test_determine_page_type_from_title_then_body() {
    assert_eq!(
        determine_page_type("/p/123", Some("About Us | Acme"), ""),
        PageType::About
    );
    assert_eq!(
        determine_page_type("/p/456", None, "Plans start at $29 per month"),
        PageType::Pricing
    );
}

#[test]
fn test_determine_page_type_default_other() {
    assert_eq!(
        determine_page_type("/faq", Some("FAQ"), "Questions and answers"),
        PageType::Other
    );
}

#[test]
fn test_determine_page_type_ignores_site_name_in_title() {
    assert_eq!(
        determine_page_type("/faq", Some("FAQ | Acme Plumbing Services"), ""),
        PageType::Other
    );
    assert_eq!(
        determine_page_type("/p/9", Some("Our Services - Acme"), ""),
        PageType::Services
    );
    // Without a separator the whole title is the page part
    assert_eq!(
        determine_page_type("/p/10", Some("Contact"), ""),
        PageType::Contact
    );
}

#[test]
fn test_determine_page_type_read_more_is_not_blog() {
    assert_eq!(
        determine_page_type("/team", Some("Team | Acme"), "Meet Dana. Read more"),
        PageType::Other
    );
    assert_eq!(
        determine_page_type("/p/7", None, "Posted on March 3 by Dana"),
        PageType::Blog
    );
}

#[test]
fn test_determine_page_type_matches_whole_words() {
    assert_eq!(determine_page_type("/floor-plans", None, ""), PageType::Other);
    assert_eq!(determine_page_type("/pirates", None, ""), PageType::Other);
    assert_eq!(determine_page_type("/plans", None, ""), PageType::Pricing);
    assert_eq!(determine_page_type("/membership/rates", None, ""), PageType::Pricing);
}

#[test]
fn test_title_segments() {
    assert_eq!(title_segments("About Us | Acme"), vec!["About Us", "Acme"]);
    assert_eq!(title_segments("Acme"), vec!["Acme"]);
}

// Document metadata

#[test]
fn test_document_metadata() {
    let html = r#"<html><head>
        <title>
            Acme Plumbing | Springfield
        </title>
        <meta name="Description" content="  Fast, friendly plumbing. ">
        <meta name="keywords" content="Plumbing, Drains, , Water Heaters">
        <meta property="og:image" content="/og.jpg">
        <link rel="canonical" href="https://acme.com/">
    </head><body></body></html>"#;
    let document = Html::parse_document(html);
    assert_eq!(
        extract_title(&document).as_deref(),
        Some("Acme Plumbing | Springfield")
    );
    assert_eq!(
        extract_meta_description(&document).as_deref(),
        Some("Fast, friendly plumbing.")
    );
    assert_eq!(
        extract_meta_keywords(&document),
        vec!["plumbing", "drains", "water heaters"]
    );
    assert_eq!(meta_content(&document, "og:image").as_deref(), Some("/og.jpg"));
    assert_eq!(
        extract_canonical_href(&document).as_deref(),
        Some("https://acme.com/")
    );
}

#[test]
fn test_document_metadata_missing() {
    let document = Html::parse_document("<html><head></head><body></body></html>");
    assert_eq!(extract_title(&document), None);
    assert_eq!(extract_meta_description(&document), None);
    assert!(extract_meta_keywords(&document).is_empty());
    assert_eq!(extract_canonical_href(&document), None);
}

// JSON-LD

#[test]
fn test_extract_json_ld_flattens_arrays_and_skips_malformed() {
    let html = r#"<html><head>
        <script type="application/ld+json">[{"@type": "WebPage"}, {"@type": "Organization"}]</script>
        <script type='application/ld+json'>{"@type": "WebSite"}</script>
        <script type="application/ld+json">{ not json </script>
    </head></html>"#;
    let values = extract_json_ld(html);
    assert_eq!(values.len(), 3);
    assert_eq!(values[2]["@type"], "WebSite");
}

#[test]
fn test_extract_business_data_local_business() {
    let html = r#"<script type="application/ld+json">{
        "@context": "https://schema.org",
        "@type": "Plumber",
        "name": "Acme Plumbing",
        "telephone": "+1-555-123-4567",
        "email": "mailto:hello@acme.com",
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "123 Main St",
            "addressLocality": "Springfield",
            "addressRegion": "IL",
            "postalCode": "62704"
        },
        "openingHoursSpecification": [
            {"dayOfWeek": ["Monday", "Tuesday"], "opens": "08:00", "closes": "17:00"},
            {"dayOfWeek": "https://schema.org/Saturday", "opens": "09:00", "closes": "12:00"}
        ]
    }</script>"#;
    let business = extract_business_data(html).unwrap();
    assert_eq!(business.name.as_deref(), Some("Acme Plumbing"));
    assert_eq!(business.phone.as_deref(), Some("+1-555-123-4567"));
    assert_eq!(business.email.as_deref(), Some("hello@acme.com"));
    assert_eq!(
        business.address.as_deref(),
        Some("123 Main St, Springfield, IL 62704")
    );
    assert_eq!(
        business.hours.as_deref(),
        Some("Monday, Tuesday 08:00-17:00; Saturday 09:00-12:00")
    );
}

#[test]
fn test_extract_business_data_from_graph() {
    let html = r#"<script type="application/ld+json">{
        "@graph": [
            {"@type": "WebSite", "name": "Site"},
            {"@type": ["Organization"], "name": "Acme Co", "openingHours": ["Mo-Fr 09:00-17:00"]}
        ]
    }</script>"#;
    let business = extract_business_data(html).unwrap();
    assert_eq!(business.name.as_deref(), Some("Acme Co"));
    assert_eq!(business.hours.as_deref(), Some("Mo-Fr 09:00-17:00"));
}

#[test]
fn test_extract_business_data_none_without_business_node() {
    let html = r#"<script type="application/ld+json">{"@type": "WebPage", "name": "Home"}</script>"#;
    assert_eq!(extract_business_data(html), None);
}
