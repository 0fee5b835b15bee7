//! Time windows for ledger aggregation.

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Aggregation window over the action ledger.
///
/// Fixed-size approximations: an hour is 1 hour, a day is 24 hours, a
/// month is 31 days. Not calendar-aware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Window {
    Hour,
    Day,
    Month,
}

impl Window {
    /// Length of this window.
    pub fn duration(&self) -> Duration {
        match self {
            Self::Hour => Duration::hours(1),
            Self::Day => Duration::hours(24),
            Self::Month => Duration::days(31),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hour => write!(f, "hour"),
            Self::Day => write!(f, "day"),
            Self::Month => write!(f, "month"),
        }
    }
}

impl FromStr for Window {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(Self::Hour),
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            other => Err(AppError::validation(format!(
                "Invalid value '{other}' for query argument 'period_time'. \
                 Expected one of: hour, day, month"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parses_known_windows() {
        assert_eq!("hour".parse::<Window>().unwrap(), Window::Hour);
        assert_eq!("day".parse::<Window>().unwrap(), Window::Day);
        assert_eq!("month".parse::<Window>().unwrap(), Window::Month);
    }

    #[test]
    fn rejects_unknown_windows() {
        for bad in ["week", "Day", "24h", ""] {
            let err = bad.parse::<Window>().unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
            assert!(err.message.contains("'period_time'"));
        }
    }

    #[test]
    fn window_lengths_are_fixed() {
        assert_eq!(Window::Hour.duration(), Duration::hours(1));
        assert_eq!(Window::Day.duration(), Duration::hours(24));
        assert_eq!(Window::Month.duration(), Duration::days(31));
    }
}
