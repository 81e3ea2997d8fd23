//! # absence-engine
//!
//! Absence date diffing and range compression for daycare attendance.
//!
//! Educators pick the days a kid will be away, the engine works out which of
//! those days are not already on record, and renders compact messages that
//! collapse consecutive days into ranges ("from Sep 01 to Sep 03").
//!
//! ## Modules
//!
//! - [`date`] — Parsing and labelling of calendar dates
//! - [`diff`] — Selected dates minus already recorded dates
//! - [`ranges`] — Collapse a date set into maximal consecutive-day ranges
//! - [`message`] — Prose, bulleted and upcoming-absence summaries
//! - [`reason`] — Reason codes and the phrases they render as
//! - [`record`] — Recorded absences for one kid (date → reason code)
//! - [`selection`] — Absence selection state and submission payloads
//! - [`error`] — Error types

pub mod date;
pub mod diff;
pub mod error;
pub mod message;
pub mod ranges;
pub mod reason;
pub mod record;
pub mod selection;

pub use diff::compute_new_dates;
pub use error::AbsenceError;
pub use message::{format_absence_summary, format_bulleted_message, format_prose_message};
pub use ranges::{compress_to_ranges, DateRange};
pub use reason::Reason;
pub use record::AbsenceRecord;
pub use selection::{AbsenceSelection, AbsenceSubmission, SelectionEvent};
