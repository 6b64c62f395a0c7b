//! Shared helpers.
//!
//! - CSS selector parsing with logged fallbacks
//! - Elapsed-time conversion for reported durations

mod selector;

use std::time::Duration;

pub use selector::{parse_selector_unsafe, parse_selector_with_fallback};

/// Converts a duration to whole milliseconds, saturating at `u64::MAX`.
pub fn duration_to_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
