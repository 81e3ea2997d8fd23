//! Calendar date helpers.
//!
//! Dates are plain [`NaiveDate`] values: no time of day, no timezone. The API
//! exchanges them as ISO `YYYY-MM-DD` strings.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::{AbsenceError, Result};

/// Wire format for dates in absence records and submissions.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Display format used in messages, e.g. `"Sep 01"`.
pub const LABEL_FORMAT: &str = "%b %d";

/// Parse an ISO `YYYY-MM-DD` date.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// Returns `AbsenceError::InvalidDate` carrying the offending input.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ISO_FORMAT)
        .map_err(|_| AbsenceError::InvalidDate(input.to_string()))
}

/// Parse a list of ISO dates into a set.
///
/// Fails on the first unparseable entry rather than skipping it.
pub fn parse_dates<S: AsRef<str>>(inputs: &[S]) -> Result<BTreeSet<NaiveDate>> {
    inputs.iter().map(|s| parse_date(s.as_ref())).collect()
}

/// Short label for a single day: three-letter month and two-digit day.
pub fn label(date: NaiveDate) -> String {
    date.format(LABEL_FORMAT).to_string()
}

/// `true` when `next` is the calendar day right after `prev`.
pub fn is_next_day(prev: NaiveDate, next: NaiveDate) -> bool {
    prev.succ_opt() == Some(next)
}
