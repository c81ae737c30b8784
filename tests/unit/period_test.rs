// Property-based tests for report period generation
//
// For every valid start <= end range the period must contain exactly
// (end - start).days + 1 entries, strictly ascending, with both endpoints
// included. Reversed ranges yield an empty period, never an error.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use warungpos::reports::services::period::{date_range, generate_period};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

proptest! {
    #[test]
    fn test_period_length_matches_day_count(
        start_offset in 0i64..20_000,
        len in 1i64..400
    ) {
        let start = base_date() + Duration::days(start_offset);
        let end = start + Duration::days(len - 1);

        let period = date_range(start, end);

        prop_assert_eq!(period.len() as i64, len);
        prop_assert_eq!(period.first().unwrap(), &start.format("%Y-%m-%d").to_string());
        prop_assert_eq!(period.last().unwrap(), &end.format("%Y-%m-%d").to_string());
    }

    #[test]
    fn test_period_is_strictly_ascending(
        start_offset in 0i64..20_000,
        len in 1i64..400
    ) {
        let start = base_date() + Duration::days(start_offset);
        let end = start + Duration::days(len - 1);

        let period = date_range(start, end);

        prop_assert!(period.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_period_entries_are_contiguous_days(
        start_offset in 0i64..20_000,
        len in 1i64..400
    ) {
        let start = base_date() + Duration::days(start_offset);
        let end = start + Duration::days(len - 1);

        let period = date_range(start, end);

        for (i, date) in period.iter().enumerate() {
            let expected = start + Duration::days(i as i64);
            prop_assert_eq!(date, &expected.format("%Y-%m-%d").to_string());
        }
    }

    #[test]
    fn test_reversed_range_is_empty(
        start_offset in 1i64..20_000,
        gap in 1i64..400
    ) {
        let end = base_date() + Duration::days(start_offset);
        let start = end + Duration::days(gap);

        prop_assert!(date_range(start, end).is_empty());
    }
}

#[test]
fn test_generate_period_parses_endpoints() {
    let period = generate_period("2024-01-01", "2024-01-03").unwrap();
    assert_eq!(period, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
}

#[test]
fn test_generate_period_rejects_malformed_dates() {
    assert!(generate_period("2024/01/01", "2024-01-03").is_err());
    assert!(generate_period("2024-01-01", "2024-02-30").is_err());
    assert!(generate_period("", "2024-01-03").is_err());
}

#[test]
fn test_generate_period_zero_width_range() {
    let period = generate_period("2024-06-15", "2024-06-15").unwrap();
    assert_eq!(period, vec!["2024-06-15"]);
}
