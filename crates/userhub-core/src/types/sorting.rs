//! Sort order for action listings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Sort order for ledger queries.
///
/// The ordering key is always `(timestamp, id)`, so ties between actions
/// recorded within the same second follow insertion order in the chosen
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Most recent first.
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Desc
    }
}

impl SortOrder {
    /// Return the SQL keyword for this order.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// Human-readable form used in recorded action titles.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(AppError::validation(format!(
                "Invalid value '{other}' for query argument 'sort'. Expected one of: asc, desc"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parses_known_orders() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
    }

    #[test]
    fn rejects_unknown_orders() {
        for bad in ["ASC", "ascending", "up", ""] {
            let err = bad.parse::<SortOrder>().unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
            assert!(err.message.contains("'sort'"));
        }
    }

    #[test]
    fn defaults_to_descending() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }

    #[test]
    fn sql_keywords() {
        assert_eq!(SortOrder::Asc.as_sql(), "ASC");
        assert_eq!(SortOrder::Desc.as_sql(), "DESC");
    }
}
