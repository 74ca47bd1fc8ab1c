//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the admin screens.

use chrono::{DateTime, Utc};

/// Format a timestamp as `YYYY-MM-DD HH:MM`.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Format a timestamp as `YYYY-MM-DD`.
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Format an optional timestamp, "-" when absent.
pub fn format_datetime_opt(dt: &Option<DateTime<Utc>>) -> String {
    match dt {
        Some(dt) => format_datetime(dt),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "2024-03-15 14:02");
    }

    #[test]
    fn test_format_date() {
        let dt = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_date(&dt), "2024-12-31");
    }

    #[test]
    fn test_format_datetime_opt() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime_opt(&Some(dt)), "2024-03-15 14:02");
        assert_eq!(format_datetime_opt(&None), "-");
    }
}
