use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};

use crate::model::BrevetError;

/// weekday and 24-hour clock time as printed on a control card, i.e. "Thu 04h30"
pub const CONTROL_TIME_FORMAT: &str = "%a %Hh%M";
/// calendar date printed in control card headers, i.e. "Jan 08 2026"
pub const CARD_DATE_FORMAT: &str = "%b %d %Y";
pub const APP_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const APP_DATETIME_MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const ISO_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// adds elapsed minutes to a start time using wall-clock arithmetic. no timezone
/// conversion is performed; rollover across days, months and years is handled by chrono.
pub fn add_elapsed_minutes(
    start: &NaiveDateTime,
    minutes: u32,
) -> Result<NaiveDateTime, BrevetError> {
    start
        .checked_add_signed(TimeDelta::minutes(minutes as i64))
        .ok_or(BrevetError::TimeOverflow {
            start: *start,
            minutes,
        })
}

pub fn format_control_time(datetime: &NaiveDateTime) -> String {
    datetime.format(CONTROL_TIME_FORMAT).to_string()
}

pub fn format_card_date(date: &NaiveDate) -> String {
    date.format(CARD_DATE_FORMAT).to_string()
}

/// parses a local start time. seconds are optional and the date and time may be
/// separated by either a space or a 'T'.
pub fn parse_datetime(datetime_str: &str) -> Result<NaiveDateTime, BrevetError> {
    let trimmed = datetime_str.trim();
    [
        APP_DATETIME_FORMAT,
        APP_DATETIME_MINUTE_FORMAT,
        ISO_DATETIME_FORMAT,
        "%Y-%m-%dT%H:%M",
    ]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
    .ok_or_else(|| {
        BrevetError::InvalidDateTime(
            datetime_str.to_string(),
            format!("expected format '{APP_DATETIME_MINUTE_FORMAT}'"),
        )
    })
}

pub fn deserialize_naive_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let datetime_str: String = String::deserialize(deserializer)?;
    parse_datetime(&datetime_str)
        .map_err(|e| D::Error::custom(format!("Invalid datetime format: {e}")))
}

pub fn serialize_naive_datetime<S>(
    datetime: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let datetime_str = datetime.format(APP_DATETIME_MINUTE_FORMAT).to_string();
    serializer.serialize_str(&datetime_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datetime(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, 0)
            .unwrap()
    }

    #[test]
    fn test_format_control_time() {
        let t = datetime(2026, 1, 8, 4, 30);
        assert_eq!(format_control_time(&t), "Thu 04h30");
    }

    #[test]
    fn test_format_card_date() {
        let d = NaiveDate::from_ymd_opt(2026, 1, 8).unwrap();
        assert_eq!(format_card_date(&d), "Jan 08 2026");
    }

    #[test]
    fn test_zero_minutes_reproduces_start() {
        let start = datetime(2026, 6, 6, 6, 0);
        let same = add_elapsed_minutes(&start, 0).unwrap();
        assert_eq!(format_control_time(&same), format_control_time(&start));
        assert_eq!(format_control_time(&same), "Sat 06h00");
    }

    #[test]
    fn test_rollover_across_month() {
        let start = datetime(2026, 1, 31, 22, 0);
        let result = add_elapsed_minutes(&start, 2400).unwrap();
        assert_eq!(result, datetime(2026, 2, 2, 14, 0));
        assert_eq!(format_control_time(&result), "Mon 14h00");
    }

    #[test]
    fn test_rollover_across_year() {
        let start = datetime(2026, 12, 31, 20, 0);
        let result = add_elapsed_minutes(&start, 810).unwrap();
        assert_eq!(result, datetime(2027, 1, 1, 9, 30));
        assert_eq!(format_control_time(&result), "Fri 09h30");
    }

    #[test]
    fn test_overflow_is_an_error() {
        let result = add_elapsed_minutes(&NaiveDateTime::MAX, 1);
        match result {
            Err(BrevetError::TimeOverflow { minutes, .. }) => assert_eq!(minutes, 1),
            other => panic!("expected TimeOverflow, found {other:?}"),
        }
    }

    #[test]
    fn test_parse_datetime_formats() {
        let expected = datetime(2026, 6, 6, 6, 0);
        assert_eq!(parse_datetime("2026-06-06 06:00").unwrap(), expected);
        assert_eq!(parse_datetime("2026-06-06 06:00:00").unwrap(), expected);
        assert_eq!(parse_datetime("2026-06-06T06:00").unwrap(), expected);
        assert_eq!(parse_datetime(" 2026-06-06T06:00:00 ").unwrap(), expected);
        assert!(parse_datetime("06/06/2026 6am").is_err());
    }
}
