//! The ledger timestamp format.
//!
//! Actions carry their timestamp as a plain `"YYYY-MM-DD HH:MM:SS"` string.
//! Lexicographic order on this format matches chronological order, which
//! the repositories rely on for `ORDER BY` and window comparisons.

use chrono::{DateTime, Utc};

/// strftime pattern for ledger timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format an instant as a ledger timestamp.
pub fn format(instant: DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// The current UTC time as a ledger timestamp.
pub fn now() -> String {
    format(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn formats_with_second_resolution() {
        let instant = Utc.with_ymd_and_hms(2020, 5, 30, 17, 35, 55).unwrap();
        assert_eq!(format(instant), "2020-05-30 17:35:55");
    }

    #[test]
    fn now_matches_the_wire_format() {
        let ts = now();
        assert_eq!(ts.len(), 19);
        assert!(NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }
}
