//! Expiry date parsing.
//!
//! Dates arrive either as plain `YYYY-MM-DD` or as full timestamps such as
//! `2025-12-31T00:00:00.000Z`; timestamps keep their UTC calendar date.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses a calendar date or an RFC 3339 timestamp.
///
/// Timestamps without an offset are read as UTC.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.naive_utc().date())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// Deserializes an optional date with [`parse_date`]. Blank strings read as
/// absent.
#[cfg(feature = "serde")]
pub(crate) fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;
    use serde::Deserialize;

    match Option::<String>::deserialize(deserializer)? {
        Some(text) if !text.trim().is_empty() => parse_date(&text)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date '{text}'"))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2025, 12, 31);
        assert_eq!(parse_date("2025-12-31"), expected);
        assert_eq!(parse_date("2025-12-31T00:00:00.000Z"), expected);
        assert_eq!(parse_date("2025-12-31T00:00:00Z"), expected);
        assert_eq!(parse_date("2026-01-01T01:00:00+02:00"), expected);
        assert_eq!(parse_date("2025-12-31T08:30:00"), expected);
        assert_eq!(parse_date("31/12/2025"), None);
        assert_eq!(parse_date(""), None);
    }
}
