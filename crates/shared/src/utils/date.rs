//! Calendar date helpers shared by the exercise endpoints.
//!
//! Exercise dates are stored at day precision. Anything finer that a caller
//! sends is truncated to the UTC calendar date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Format used when rendering a date back to clients, e.g. `Mon Jan 01 1990`
pub const DISPLAY_DATE_FORMAT: &str = "%a %b %d %Y";

/// Lower bound used when a log query has no usable `from`
pub fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

/// Today's calendar date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parses a caller supplied date
///
/// Accepts `YYYY-MM-DD`, the shorter `YYYY-MM` and `YYYY` (first day of the
/// month or year), RFC 3339 timestamps and `YYYY-MM-DDTHH:MM:SS` without an
/// offset. Surrounding whitespace is ignored. Returns `None` for anything
/// else.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    if let Some(date) = parse_reduced_date(value) {
        return Some(date);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.with_timezone(&Utc).date_naive());
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// `YYYY-MM` or `YYYY`, each with exactly four year digits
fn parse_reduced_date(value: &str) -> Option<NaiveDate> {
    let (year, month) = match value.split_once('-') {
        Some((year, month)) if month.len() == 2 => (year, month),
        Some(_) => return None,
        None => (value, "01"),
    };
    if year.len() != 4 || !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Parses an optional query bound, treating blank and invalid values as absent
pub fn parse_optional_date<S: AsRef<str>>(value: Option<S>) -> Option<NaiveDate> {
    value.and_then(|v| parse_date(v.as_ref()))
}

pub fn display_date(date: &NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_plain() {
        assert_eq!(parse_date("1990-01-01"), Some(ymd(1990, 1, 1)));
        assert_eq!(parse_date(" 2024-02-29 "), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_date("2021-01"), Some(ymd(2021, 1, 1)));
        assert_eq!(parse_date("2021-12"), Some(ymd(2021, 12, 1)));
        assert_eq!(parse_date("2021"), Some(ymd(2021, 1, 1)));
    }

    #[test]
    fn test_parse_date_rejects_malformed_short_forms() {
        assert_eq!(parse_date("2021-13"), None);
        assert_eq!(parse_date("2021-1"), None);
        assert_eq!(parse_date("21"), None);
        assert_eq!(parse_date("20210"), None);
        assert_eq!(parse_date("2021-ab"), None);
    }

    #[test]
    fn test_parse_date_discards_time_of_day() {
        assert_eq!(parse_date("2021-06-15T23:59:59Z"), Some(ymd(2021, 6, 15)));
        assert_eq!(parse_date("2021-06-15T08:30:00"), Some(ymd(2021, 6, 15)));
        // Offsets are normalized to UTC before truncating
        assert_eq!(parse_date("2021-06-15T23:30:00-02:00"), Some(ymd(2021, 6, 16)));
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2023-02-30"), None);
        assert_eq!(parse_optional_date(None::<&str>), None);
        assert_eq!(parse_optional_date(Some("nope")), None);
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date(&ymd(1990, 1, 1)), "Mon Jan 01 1990");
        assert_eq!(display_date(&ymd(2023, 12, 25)), "Mon Dec 25 2023");
    }

    #[test]
    fn test_epoch_date() {
        assert_eq!(epoch_date(), ymd(1970, 1, 1));
    }
}
