//! Recorded absences for one kid.
//!
//! The API returns absences as a JSON object keyed by ISO date, with one reason
//! code per day:
//!
//! ```json
//! {"2025-09-01": "holiday", "2025-09-02": "holiday", "2025-10-21": "sick"}
//! ```

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::date;
use crate::diff::compute_new_dates;
use crate::error::{AbsenceError, Result};
use crate::message::format_bulleted_message;
use crate::reason::Reason;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AbsenceRecord {
    entries: BTreeMap<NaiveDate, Reason>,
}

impl AbsenceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the API's date → reason object.
    ///
    /// # Errors
    /// Returns `AbsenceError::InvalidDate` for a key that is not a `YYYY-MM-DD`
    /// date, and `AbsenceError::InvalidRecord` when the payload is not an object
    /// of strings or two keys name the same day.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|e| AbsenceError::InvalidRecord(e.to_string()))?;
        Self::try_from(raw)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| AbsenceError::InvalidRecord(e.to_string()))
    }

    /// Record `reason` for `day`, returning the reason it replaces.
    pub fn insert(&mut self, day: NaiveDate, reason: Reason) -> Option<Reason> {
        self.entries.insert(day, reason)
    }

    pub fn reason_for(&self, day: NaiveDate) -> Option<&Reason> {
        self.entries.get(&day)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &Reason)> {
        self.entries.iter()
    }

    /// Every recorded day.
    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        self.entries.keys().copied().collect()
    }

    /// Days recorded with `reason`.
    pub fn dates_with_reason(&self, reason: &Reason) -> BTreeSet<NaiveDate> {
        self.entries
            .iter()
            .filter(|(_, r)| *r == reason)
            .map(|(d, _)| *d)
            .collect()
    }

    /// Days from `today` onwards.
    pub fn upcoming(&self, today: NaiveDate) -> BTreeSet<NaiveDate> {
        self.entries.range(today..).map(|(d, _)| *d).collect()
    }

    /// Days in `selected` that are not recorded yet.
    pub fn new_dates(&self, selected: &BTreeSet<NaiveDate>) -> BTreeSet<NaiveDate> {
        compute_new_dates(selected, &self.dates())
    }

    /// One bulleted summary per phrase for the days from `today` onwards.
    ///
    /// Holidays come first, then sick leave. Unrecognised codes are shown as
    /// sick leave and share its block. The result is empty when nothing lies
    /// ahead.
    pub fn summary(&self, name: &str, today: NaiveDate) -> String {
        let mut by_phrase: BTreeMap<&'static str, BTreeSet<NaiveDate>> = BTreeMap::new();
        for (day, reason) in self.entries.range(today..) {
            by_phrase.entry(reason.phrase()).or_default().insert(*day);
        }

        by_phrase
            .into_iter()
            .map(|(phrase, dates)| format_bulleted_message(name, phrase, &dates))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TryFrom<BTreeMap<String, String>> for AbsenceRecord {
    type Error = AbsenceError;

    fn try_from(raw: BTreeMap<String, String>) -> Result<Self> {
        let mut record = Self::new();
        for (key, code) in &raw {
            let day = date::parse_date(key)?;
            // "2025-9-1" and "2025-09-01" are distinct keys for the same day.
            if record.insert(day, Reason::from_code(code)).is_some() {
                return Err(AbsenceError::InvalidRecord(format!("duplicate date {}", day)));
            }
        }
        tracing::debug!(entries = record.len(), "parsed absence record");
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for AbsenceRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        Self::try_from(raw).map_err(D::Error::custom)
    }
}

impl FromIterator<(NaiveDate, Reason)> for AbsenceRecord {
    fn from_iter<T: IntoIterator<Item = (NaiveDate, Reason)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
