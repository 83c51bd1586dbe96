//! Text formatting utilities for the wallet UI.
//!
//! This module provides helper functions for formatting dates in a human-readable way.

use chrono::{DateTime, Local, Utc};

/// Formats a point in time for display in the local timezone.
///
/// The Unix epoch marks "never happened" and is rendered as `"Never"`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    if at == DateTime::<Utc>::UNIX_EPOCH {
        return "Never".to_string();
    }
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Formats how long ago `at` was, relative to `now`.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_elapsed(now - Duration::minutes(5), now), "5 minutes ago");
/// ```
pub fn format_elapsed(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if at == DateTime::<Utc>::UNIX_EPOCH {
        return "never".to_string();
    }

    let elapsed = now - at;
    let (amount, unit) = if elapsed.num_seconds() < 60 {
        return "just now".to_string();
    } else if elapsed.num_minutes() < 60 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_hours() < 24 {
        (elapsed.num_hours(), "hour")
    } else {
        (elapsed.num_days(), "day")
    };

    if amount == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", amount, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_epoch_is_never() {
        assert_eq!(format_timestamp(DateTime::<Utc>::UNIX_EPOCH), "Never");
        assert_eq!(format_elapsed(DateTime::<Utc>::UNIX_EPOCH, Utc::now()), "never");
    }

    #[test]
    fn test_format_timestamp_shape() {
        let formatted = format_timestamp(Utc::now());
        // YYYY-MM-DD HH:MM
        assert_eq!(formatted.len(), 16);
    }

    #[test]
    fn test_format_elapsed() {
        let now = Utc::now();
        assert_eq!(format_elapsed(now - Duration::seconds(10), now), "just now");
        assert_eq!(format_elapsed(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(format_elapsed(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(format_elapsed(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(format_elapsed(now - Duration::days(2), now), "2 days ago");
    }
}
