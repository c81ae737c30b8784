use chrono::NaiveDate;

use crate::core::{AppError, Result};

/// Calendar-day format used throughout the report engine
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a report boundary date, rejecting anything but strict YYYY-MM-DD
pub fn parse_report_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        AppError::validation(format!(
            "Invalid date format: '{}'. Expected YYYY-MM-DD",
            value
        ))
    })
}

/// Inclusive ascending sequence of calendar-day strings from start through end.
/// A reversed range yields an empty sequence rather than an error, so callers
/// downstream never have to special-case zero-width reports.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<String> {
    let mut dates = Vec::new();
    let mut day = start;

    while day <= end {
        dates.push(day.format(DATE_FORMAT).to_string());
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    dates
}

/// Expand a requested date range into its period: one entry per calendar day,
/// both endpoints included
pub fn generate_period(start_date: &str, end_date: &str) -> Result<Vec<String>> {
    let start = parse_report_date(start_date)?;
    let end = parse_report_date(end_date)?;

    Ok(date_range(start, end))
}
