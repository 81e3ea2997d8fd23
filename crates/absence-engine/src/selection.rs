//! Absence selection state.
//!
//! The absence dialog keeps a set of picked days, a reason and optional free
//! text. State changes are pure transitions: `state.apply(event)` returns the
//! next state, so the flow can be driven and tested without any UI.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::AbsenceRecord;
use crate::reason::Reason;

/// Something the user did in the absence dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Select the day, or unselect it if already selected.
    Toggle(NaiveDate),
    SetReason(Reason),
    SetDetails(String),
    /// Back to the initial state.
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsenceSelection {
    pub dates: BTreeSet<NaiveDate>,
    pub reason: Reason,
    pub details: String,
}

impl Default for AbsenceSelection {
    fn default() -> Self {
        Self {
            dates: BTreeSet::new(),
            reason: Reason::Sick,
            details: String::new(),
        }
    }
}

/// Payload for submitting new absences of one kid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceSubmission {
    pub child_id: String,
    #[serde(with = "iso_dates")]
    pub dates: BTreeSet<NaiveDate>,
    pub reason: Reason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AbsenceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(mut self, event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::Toggle(day) => {
                if !self.dates.remove(&day) {
                    self.dates.insert(day);
                }
            }
            SelectionEvent::SetReason(reason) => self.reason = reason,
            SelectionEvent::SetDetails(details) => self.details = details,
            SelectionEvent::Clear => return Self::default(),
        }
        self
    }

    /// Build the submission for the selected days not yet in `existing`.
    ///
    /// Returns `None` when every selected day is already recorded. Blank
    /// details are omitted.
    pub fn submission(&self, child_id: &str, existing: &AbsenceRecord) -> Option<AbsenceSubmission> {
        let dates = existing.new_dates(&self.dates);
        if dates.is_empty() {
            tracing::debug!(child_id, "nothing new to submit");
            return None;
        }

        let details = self.details.trim();
        Some(AbsenceSubmission {
            child_id: child_id.to_string(),
            dates,
            reason: self.reason.clone(),
            details: (!details.is_empty()).then(|| details.to_string()),
        })
    }
}

/// Serialize a date set as a JSON array of `YYYY-MM-DD` strings.
mod iso_dates {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::date;

    pub fn serialize<S: Serializer>(dates: &BTreeSet<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(dates.iter().map(|d| d.format(date::ISO_FORMAT).to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeSet<NaiveDate>, D::Error> {
        let raw: Vec<String> = Vec::deserialize(d)?;
        date::parse_dates(&raw).map_err(D::Error::custom)
    }
}
