//! Human-readable absence messages.
//!
//! Two styles share the same range rendering (see [`DateRange`]'s `Display`):
//!
//! - prose: `"Emma is on holiday Sep 01, from Sep 03 to Sep 05"`
//! - bulleted: a `"Emma is on holiday:"` header and one `"• "` line per range
//!
//! The bulleted style writes the `"is on "` itself and takes a bare phrase
//! such as `"holiday"`. The prose style takes a full verb-phrase such as
//! `"on holiday"`.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::ranges::{compress_to_ranges, DateRange};
use crate::reason::Reason;

const BULLET: &str = "• ";

/// Sentence used by both styles when there is nothing to list.
pub fn no_absences_message(name: &str) -> String {
    format!("{} has no recorded absences.", name)
}

/// `"<name> is <verb_phrase> <ranges>"`, ranges joined with `", "`.
pub fn format_prose_message(name: &str, verb_phrase: &str, dates: &BTreeSet<NaiveDate>) -> String {
    let ranges = compress_to_ranges(dates);
    if ranges.is_empty() {
        return no_absences_message(name);
    }

    let joined = ranges
        .iter()
        .map(DateRange::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} is {} {}", name, verb_phrase, joined)
}

/// Header `"<name> is on <phrase>:"` followed by one bullet line per range.
///
/// Every line, including the last, ends with `'\n'`.
pub fn format_bulleted_message(name: &str, phrase: &str, dates: &BTreeSet<NaiveDate>) -> String {
    let ranges = compress_to_ranges(dates);
    if ranges.is_empty() {
        return no_absences_message(name);
    }

    let lines: String = ranges
        .iter()
        .map(|range| format!("{}{}\n", BULLET, range))
        .collect();
    format!("{} is on {}:\n{}", name, phrase, lines)
}

/// Bulleted summary of the absences from `today` onwards.
///
/// Days strictly before `today` are dropped. When none remain the result is an
/// empty string, meaning there is nothing to announce.
pub fn format_absence_summary(
    name: &str,
    dates: &BTreeSet<NaiveDate>,
    reason_code: &str,
    today: NaiveDate,
) -> String {
    let upcoming: BTreeSet<NaiveDate> = dates.range(today..).copied().collect();
    tracing::debug!(
        name,
        reason_code,
        %today,
        total = dates.len(),
        upcoming = upcoming.len(),
        "formatting absence summary"
    );
    if upcoming.is_empty() {
        return String::new();
    }

    let reason = Reason::from_code(reason_code);
    format_bulleted_message(name, reason.phrase(), &upcoming)
}
