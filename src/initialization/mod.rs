//! Process-wide resource setup.
//!
//! - HTTP client (redirect policy, compression, connect timeout)
//! - Logger (plain or JSON lines on stderr)

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
