//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for activity log entries and the clock label.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Format a timestamp for the status-bar clock (`HH:MM`).
#[must_use]
pub fn clock_label(ts: Timestamp) -> String {
    ts.format("%H:%M").to_string()
}

/// Format a timestamp for an activity log line (`HH:MM:SS`).
#[must_use]
pub fn log_label(ts: Timestamp) -> String {
    ts.format("%H:%M:%S").to_string()
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
    fn should_format_clock_with_hours_and_minutes() {
        let ts = Utc.with_ymd_and_hms(2024, 11, 21, 9, 5, 42).unwrap();
        assert_eq!(clock_label(ts), "09:05");
        assert_eq!(log_label(ts), "09:05:42");
    }
}
