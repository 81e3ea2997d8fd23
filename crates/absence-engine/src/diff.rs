//! Work out which selected absence dates are not yet on record.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Dates in `selected` that are absent from `existing`.
///
/// A pure set difference: neither input is modified, and repeating the call
/// with the same `existing` yields the same result.
pub fn compute_new_dates(
    selected: &BTreeSet<NaiveDate>,
    existing: &BTreeSet<NaiveDate>,
) -> BTreeSet<NaiveDate> {
    let new_dates: BTreeSet<NaiveDate> = selected.difference(existing).copied().collect();
    tracing::trace!(
        selected = selected.len(),
        existing = existing.len(),
        new = new_dates.len(),
        "computed new absence dates"
    );
    new_dates
}
