//! Collapse a set of dates into maximal runs of consecutive days.
//!
//! Dates are sorted, then scanned once: a run keeps growing while each date is
//! the day after the previous one, and a gap closes the run.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date;
use crate::error::AbsenceError;

/// A run of consecutive calendar days, inclusive on both ends.
///
/// Deserialization rejects ranges whose `start` is after `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// A one-day range.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Number of days covered, counting both ends. Zero when `end < start`.
    pub fn len_days(&self) -> u64 {
        u64::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
    }

    /// Every day in the range, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

#[derive(Deserialize)]
struct RangeBounds {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RangeBounds> for DateRange {
    type Error = AbsenceError;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        if bounds.end < bounds.start {
            return Err(AbsenceError::InvalidRange(format!(
                "{} is after {}",
                bounds.start, bounds.end
            )));
        }
        Ok(Self {
            start: bounds.start,
            end: bounds.end,
        })
    }
}

/// Renders as `"Sep 01"` for one day, `"from Sep 01 to Sep 03"` otherwise.
impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_day() {
            write!(f, "{}", date::label(self.start))
        } else {
            write!(
                f,
                "from {} to {}",
                date::label(self.start),
                date::label(self.end)
            )
        }
    }
}

/// Compress dates into maximal ranges of consecutive days.
///
/// Input order and duplicates do not matter. The returned ranges are ascending,
/// non-overlapping, separated by at least one missing day, and together contain
/// exactly the input dates. Empty input yields an empty list.
pub fn compress_to_ranges<'a, I>(dates: I) -> Vec<DateRange>
where
    I: IntoIterator<Item = &'a NaiveDate>,
{
    let mut sorted: Vec<NaiveDate> = dates.into_iter().copied().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut ranges: Vec<DateRange> = Vec::new();
    for day in sorted {
        if let Some(last) = ranges.last_mut() {
            if date::is_next_day(last.end, day) {
                last.end = day;
                continue;
            }
        }
        ranges.push(DateRange::single(day));
    }

    tracing::trace!(ranges = ranges.len(), "compressed absence dates");
    ranges
}
