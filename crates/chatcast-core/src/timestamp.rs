//! Timestamp formatting shared by every message variant.

use chrono::{Local, NaiveDateTime};

use crate::error::{ChatcastError, Result};

/// Display format for `Sent at:` fields, `DD/MM/YYYY HH:MM` in 24-hour time.
pub const SENT_AT_FORMAT: &str = "%d/%m/%Y %H:%M";

const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Render a send timestamp the way message descriptions show it.
pub fn format_sent_at(at: &NaiveDateTime) -> String {
    at.format(SENT_AT_FORMAT).to_string()
}

/// Parse a user-supplied timestamp (CLI flag or config value).
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| ChatcastError::InvalidTimestamp {
            input: input.to_string(),
        })
}

/// Current wall-clock time, without zone, as messages record it.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_zero_padding() {
        for v in 0..10u32 {
            let day = v.max(1);
            let month = v.max(1);
            let formatted = format_sent_at(&at(2024, month, day, v, v));
            assert_eq!(
                formatted,
                format!("0{day}/0{month}/2024 0{v}:0{v}"),
                "component value {v}"
            );
        }
    }

    #[test]
    fn test_24_hour_clock() {
        assert_eq!(format_sent_at(&at(2023, 12, 31, 23, 59)), "31/12/2023 23:59");
        assert_eq!(format_sent_at(&at(2024, 7, 14, 0, 0)), "14/07/2024 00:00");
    }

    #[test]
    fn test_seconds_are_dropped() {
        let t = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(9, 3, 59)
            .unwrap();
        assert_eq!(format_sent_at(&t), "05/01/2024 09:03");
    }

    #[test]
    fn test_parse_accepted_forms() {
        let expected = at(2024, 1, 5, 9, 3);
        for input in [
            "2024-01-05T09:03:00",
            "2024-01-05T09:03",
            "2024-01-05 09:03:00",
            " 2024-01-05 09:03 ",
        ] {
            assert_eq!(parse_timestamp(input).unwrap(), expected, "{input}");
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_timestamp("05/01/2024 09:03").unwrap_err();
        assert!(matches!(err, ChatcastError::InvalidTimestamp { .. }));
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("2024-13-01 00:00").is_err());
    }
}
