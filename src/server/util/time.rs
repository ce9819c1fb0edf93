//! Date calculation utilities for lease billing.

use chrono::{DateTime, Datelike, Months, NaiveDate};

/// Longest lease, in monthly invoices, accepted by the rental flow.
pub const MAX_BILLING_MONTHS: usize = 120;

/// Parses an ISO `YYYY-MM-DD` date, also accepting the date part of an RFC 3339
/// timestamp.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.date_naive())
    })
}

/// First day of the month `date` falls in.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Dates of every billing month of a lease.
///
/// Offsets are always taken from `start` so a lease starting on the 31st bills on the
/// last day of shorter months without drifting. Each date `start + i months` is included
/// while it does not pass `end`; without an end date only the start month is billed.
///
/// Generation stops one date past [`MAX_BILLING_MONTHS`], enough for callers to detect
/// an overlong lease without walking the whole span.
///
/// # Example
/// ```ignore
/// // 2024-01-31 .. 2024-03-31 => [2024-01-31, 2024-02-29, 2024-03-31]
/// let dates = billing_dates(start, Some(end));
/// ```
pub fn billing_dates(start: NaiveDate, end: Option<NaiveDate>) -> Vec<NaiveDate> {
    let Some(end) = end else {
        return vec![start];
    };

    let mut dates = Vec::new();
    let mut offset = 0;

    while dates.len() <= MAX_BILLING_MONTHS {
        let Some(date) = start.checked_add_months(Months::new(offset)) else {
            break;
        };
        if date > end {
            break;
        }

        dates.push(date);
        offset += 1;
    }

    dates
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{billing_dates, first_day_of_month, parse_iso_date, MAX_BILLING_MONTHS};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod billing_dates {
        use super::*;

        #[test]
        fn single_invoice_without_end_date() {
            assert_eq!(billing_dates(date(2024, 5, 10), None), vec![date(2024, 5, 10)]);
        }

        #[test]
        fn single_invoice_when_end_is_within_first_month() {
            let dates = billing_dates(date(2024, 5, 10), Some(date(2024, 6, 9)));

            assert_eq!(dates, vec![date(2024, 5, 10)]);
        }

        #[test]
        fn includes_month_landing_exactly_on_end() {
            let dates = billing_dates(date(2024, 1, 15), Some(date(2024, 4, 15)));

            assert_eq!(dates.len(), 4);
            assert_eq!(dates.last(), Some(&date(2024, 4, 15)));
        }

        #[test]
        fn clamps_to_last_day_of_shorter_months() {
            let dates = billing_dates(date(2024, 1, 31), Some(date(2024, 3, 31)));

            assert_eq!(
                dates,
                vec![date(2024, 1, 31), date(2024, 2, 29), date(2024, 3, 31)]
            );
        }

        #[test]
        fn spans_year_boundary() {
            let dates = billing_dates(date(2024, 11, 1), Some(date(2025, 2, 1)));

            let months: Vec<(i32, u32)> = dates
                .iter()
                .map(|d| (chrono::Datelike::year(d), chrono::Datelike::month(d)))
                .collect();
            assert_eq!(months, vec![(2024, 11), (2024, 12), (2025, 1), (2025, 2)]);
        }

        #[test]
        fn full_year_lease_bills_thirteen_months() {
            let dates = billing_dates(date(2024, 1, 1), Some(date(2025, 1, 1)));

            assert_eq!(dates.len(), 13);
        }

        #[test]
        fn stops_one_past_the_lease_limit() {
            let dates = billing_dates(date(2024, 1, 1), Some(NaiveDate::MAX));

            assert_eq!(dates.len(), MAX_BILLING_MONTHS + 1);
        }

        #[test]
        fn empty_when_end_precedes_start() {
            assert!(billing_dates(date(2024, 5, 10), Some(date(2024, 5, 1))).is_empty());
        }
    }

    #[test]
    fn first_day_of_month_resets_day() {
        assert_eq!(first_day_of_month(date(2024, 2, 29)), date(2024, 2, 1));
    }

    #[test]
    fn parses_plain_and_timestamp_dates() {
        assert_eq!(parse_iso_date("2024-03-01"), Some(date(2024, 3, 1)));
        assert_eq!(
            parse_iso_date("2024-03-01T10:00:00+07:00"),
            Some(date(2024, 3, 1))
        );
        assert_eq!(parse_iso_date(" 2024-03-01 "), Some(date(2024, 3, 1)));
        assert_eq!(parse_iso_date("01/03/2024"), None);
        assert_eq!(parse_iso_date("2024-02-30"), None);
    }
}
