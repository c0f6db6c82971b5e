use regex::Regex;
use std::sync::LazyLock;

use crate::error::SearchStreamError;

// ASCII digits only; `\d` would also match other Unicode digit classes.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("date pattern is valid")
});

/// Reporting window pulled out of a query. Dates are kept as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

/// Takes the first two `YYYY-MM-DD` substrings of `query`, in order, as
/// start and end. Anything after the second match is ignored.
pub fn parse_date_range(query: &str) -> Result<DateRange<'_>, SearchStreamError> {
    let mut matches = DATE_RE.find_iter(query).map(|m| m.as_str());
    match (matches.next(), matches.next()) {
        (Some(start), Some(end)) => Ok(DateRange { start, end }),
        (first, _) => Err(SearchStreamError::InsufficientDates {
            found: usize::from(first.is_some()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_first_two_dates_in_order() {
        let q = "SELECT campaign.id FROM campaign WHERE segments.date BETWEEN '2023-01-01' AND '2023-01-31'";
        let r = parse_date_range(q).unwrap();
        assert_eq!(r.start, "2023-01-01");
        assert_eq!(r.end, "2023-01-31");
    }

    #[test]
    fn extra_dates_are_ignored() {
        let r = parse_date_range("2023-03-01 2023-02-01 2023-01-01").unwrap();
        assert_eq!(
            r,
            DateRange {
                start: "2023-03-01",
                end: "2023-02-01"
            }
        );
    }

    #[test]
    fn dates_are_not_calendar_checked() {
        let r = parse_date_range("from 2023-13-45 to 0000-00-00").unwrap();
        assert_eq!(r.start, "2023-13-45");
        assert_eq!(r.end, "0000-00-00");
    }

    #[test]
    fn fewer_than_two_dates_is_an_error() {
        match parse_date_range("since 2023-01-01") {
            Err(SearchStreamError::InsufficientDates { found }) => assert_eq!(found, 1),
            other => panic!("unexpected: {:?}", other),
        }
        match parse_date_range("") {
            Err(SearchStreamError::InsufficientDates { found }) => assert_eq!(found, 0),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn only_ascii_digits_count() {
        // Arabic-Indic and full-width digits
        assert!(parse_date_range("from ٢٠٢٣-٠١-٠١ to 2023-01-31").is_err());
        assert!(parse_date_range("２０２３-０１-０１ ２０２３-０１-３１").is_err());
        let r = parse_date_range("٢٠٢٣-٠١-٠١ 2023-01-01 and 2023-01-31").unwrap();
        assert_eq!(r.start, "2023-01-01");
        assert_eq!(r.end, "2023-01-31");
    }

    #[test]
    fn short_years_do_not_match() {
        assert!(parse_date_range("23-01-01 and 23-01-31").is_err());
    }
}
