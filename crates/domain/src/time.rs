//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for service creation dates.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp as a calendar date (`YYYY-MM-DD`).
#[must_use]
pub fn format_date(ts: Timestamp) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_format_as_iso_calendar_date() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 7, 23, 59, 1).unwrap();
        assert_eq!(format_date(ts), "2024-03-07");
    }
}
