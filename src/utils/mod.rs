//! Utility modules for the wallet shell.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_elapsed, format_timestamp};
