//! Date helper functions

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::content::parse_date;

/// Format a date in long form (like "January 1, 2022")
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format an ISO-8601 post date in long form, `None` if it does not parse
pub fn format_post_date(iso: &str) -> Option<String> {
    parse_date(iso).map(long_date)
}

/// Calendar year of an instant, used for the footer copyright line
pub fn copyright_year<Tz: TimeZone>(now: &DateTime<Tz>) -> i32 {
    now.year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        assert_eq!(long_date(date), "January 1, 2022");
    }

    #[test]
    fn test_format_post_date() {
        assert_eq!(
            format_post_date("2022-09-05").as_deref(),
            Some("September 5, 2022")
        );
        assert_eq!(
            format_post_date("2022-11-30T23:00:00Z").as_deref(),
            Some("November 30, 2022")
        );
        assert_eq!(format_post_date("soon"), None);
    }

    #[test]
    fn test_copyright_year() {
        let now = Utc.with_ymd_and_hms(2031, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(copyright_year(&now), 2031);
    }
}
