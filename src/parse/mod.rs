//! Text and field normalizers.
//!
//! Pure functions used by every extractor and by the crawler:
//! - Whitespace cleanup and visible-text extraction
//! - Email, phone and street address recognizers
//! - URL resolution against a page base
//! - Social profile links and page type heuristics
//! - Document metadata (title, meta tags) and JSON-LD business data
//!
//! All parsing is done using CSS selectors via the `scraper` crate, or
//! regexes over raw text.

mod contact;
mod html;
mod page_type;
mod social;
mod structured;
mod text;
mod resolve;

// Re-export public API
pub use contact::{
    email_from_mailto, extract_address, extract_email, extract_phone, phone_from_tel,
};
pub use html::{
    extract_canonical_href, extract_meta_description, extract_meta_keywords, extract_title,
    meta_content,
};
pub use page_type::determine_page_type;
pub use social::extract_social_links;
pub use structured::{extract_business_data, extract_json_ld};
pub use text::{
    body_text, clean_text, element_text, title_segments, truncate_chars, visible_text,
};
pub use resolve::{normalize_link, normalize_url};
