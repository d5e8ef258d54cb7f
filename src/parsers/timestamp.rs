//! Header timestamp parsing.
//!
//! WhatsApp exports carry locale-dependent, ambiguous date formats. Rather
//! than guessing the locale, the parser tries a fixed, ordered list of
//! layouts and takes the first that parses. The order is the documented
//! tie-break for the D/M-vs-M/D ambiguity: a date like `2/16/24` only
//! parses as month-first, `16/2/24` only as day-first, and a date where
//! both would parse (`3/4/24`) resolves month-first because that layout
//! is tried first.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Date layouts, tried in order. chrono's numeric specifiers accept one or
/// two digits, so `M/D/YY` and `MM/DD/YY` collapse into a single entry.
/// Two-digit-year layouts come first: `%Y` would otherwise happily parse
/// `24` as the year 24 AD.
const DATE_LAYOUTS: &[&str] = &[
    "%m/%d/%y", // 2/16/24, 02/16/24
    "%d/%m/%y", // 16/2/24, 16/02/24
    "%d.%m.%y", // 16.02.24, 16.2.24
    "%m/%d/%Y", // 2/16/2024
    "%d/%m/%Y", // 16/02/2024
    "%d.%m.%Y", // 16.02.2024
];

/// Time layouts, 24-hour. Seconds are accepted but unused downstream.
const TIME_LAYOUTS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Parses the date and time substrings of a message header.
///
/// Returns `None` when every layout fails; the caller maps that to
/// "drop this block". Never panics on malformed input.
pub(crate) fn parse_timestamp(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    let date = parse_date(date_str)?;
    let time = parse_time(time_str)?;
    Some(date.and_time(time))
}

fn parse_date(date_str: &str) -> Option<NaiveDate> {
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(date_str, layout).ok())
}

fn parse_time(time_str: &str) -> Option<NaiveTime> {
    TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveTime::parse_from_str(time_str, layout).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_us_slash_two_digit_year() {
        let ts = parse_timestamp("2/16/24", "07:44").unwrap();
        assert_eq!(ts.date(), date(2024, 2, 16));
    }

    #[test]
    fn test_day_first_slash_falls_through() {
        // 16 is not a valid month, so the M/D layout fails and D/M wins
        let ts = parse_timestamp("16/2/24", "07:44").unwrap();
        assert_eq!(ts.date(), date(2024, 2, 16));
    }

    #[test]
    fn test_dotted_two_digit_year() {
        let ts = parse_timestamp("04.05.24", "15:22").unwrap();
        assert_eq!(ts.date(), date(2024, 5, 4));
    }

    #[test]
    fn test_dotted_single_digit_day() {
        let ts = parse_timestamp("4.5.24", "15:22").unwrap();
        assert_eq!(ts.date(), date(2024, 5, 4));
    }

    #[test]
    fn test_four_digit_year_variants() {
        assert_eq!(
            parse_timestamp("2/16/2024", "07:44").unwrap().date(),
            date(2024, 2, 16)
        );
        assert_eq!(
            parse_timestamp("16/02/2024", "07:44").unwrap().date(),
            date(2024, 2, 16)
        );
        assert_eq!(
            parse_timestamp("16.02.2024", "07:44").unwrap().date(),
            date(2024, 2, 16)
        );
    }

    #[test]
    fn test_month_first_wins_when_ambiguous() {
        // Both layouts would parse 3/4/24; the documented order picks M/D
        let ts = parse_timestamp("3/4/24", "10:00").unwrap();
        assert_eq!(ts.date(), date(2024, 3, 4));
    }

    #[test]
    fn test_time_with_and_without_seconds() {
        let with = parse_timestamp("04.05.24", "15:22:31").unwrap();
        let without = parse_timestamp("04.05.24", "15:22").unwrap();
        assert_eq!(with.time().format("%H:%M:%S").to_string(), "15:22:31");
        assert_eq!(without.time().format("%H:%M:%S").to_string(), "15:22:00");
    }

    #[test]
    fn test_invalid_date_is_none() {
        assert!(parse_timestamp("99/99/99", "10:00").is_none());
        assert!(parse_timestamp("not-a-date", "10:00").is_none());
        assert!(parse_timestamp("", "10:00").is_none());
    }

    #[test]
    fn test_invalid_time_is_none() {
        assert!(parse_timestamp("04.05.24", "25:00").is_none());
        assert!(parse_timestamp("04.05.24", "noon").is_none());
    }
}
