//! Helpers for the backend's `dd-MM-yyyy` wire date format.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::NaiveDate;

const WIRE_FORMAT: &str = "%d-%m-%Y";

/// Parse a wire date. Returns `None` for anything that is not a valid
/// `dd-MM-yyyy` calendar date.
pub fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), WIRE_FORMAT).ok()
}

/// Sort records newest first by their wire date. Records whose date fails to
/// parse sink to the end.
pub fn newest_first<T>(records: &mut [T], date_of: impl Fn(&T) -> Option<NaiveDate>) {
    records.sort_by(|a, b| date_of(b).cmp(&date_of(a)));
}
