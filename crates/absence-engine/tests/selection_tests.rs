//! Tests for absence selection transitions and submission payloads.

use absence_engine::{AbsenceRecord, AbsenceSelection, AbsenceSubmission, Reason, SelectionEvent};
use chrono::NaiveDate;

/// Helper to create a NaiveDate.
fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn select(events: Vec<SelectionEvent>) -> AbsenceSelection {
    events
        .into_iter()
        .fold(AbsenceSelection::new(), AbsenceSelection::apply)
}

#[test]
fn initial_state_is_empty_sick_leave() {
    let state = AbsenceSelection::new();
    assert!(state.dates.is_empty());
    assert_eq!(state.reason, Reason::Sick);
    assert!(state.details.is_empty());
}

#[test]
fn toggle_adds_then_removes() {
    let state = select(vec![SelectionEvent::Toggle(d(2025, 9, 1))]);
    assert!(state.dates.contains(&d(2025, 9, 1)));

    let state = state.apply(SelectionEvent::Toggle(d(2025, 9, 1)));
    assert!(state.dates.is_empty(), "second toggle should unselect");
}

#[test]
fn clear_resets_everything() {
    let state = select(vec![
        SelectionEvent::Toggle(d(2025, 9, 1)),
        SelectionEvent::SetReason(Reason::Holiday),
        SelectionEvent::SetDetails("grandparents".to_string()),
        SelectionEvent::Clear,
    ]);
    assert_eq!(state, AbsenceSelection::default());
}

#[test]
fn submission_contains_only_new_dates() {
    let existing = AbsenceRecord::from_json(r#"{"2025-10-21":"sick","2025-10-27":"sick"}"#).unwrap();
    let state = select(vec![
        SelectionEvent::Toggle(d(2025, 10, 21)),
        SelectionEvent::Toggle(d(2025, 10, 28)),
        SelectionEvent::SetReason(Reason::Holiday),
        SelectionEvent::SetDetails("  trip  ".to_string()),
    ]);

    let submission = state.submission("kid-42", &existing).unwrap();

    assert_eq!(
        submission,
        AbsenceSubmission {
            child_id: "kid-42".to_string(),
            dates: [d(2025, 10, 28)].into_iter().collect(),
            reason: Reason::Holiday,
            details: Some("trip".to_string()),
        }
    );
}

#[test]
fn nothing_new_means_no_submission() {
    let existing = AbsenceRecord::from_json(r#"{"2025-10-21":"sick"}"#).unwrap();
    let state = select(vec![SelectionEvent::Toggle(d(2025, 10, 21))]);

    assert_eq!(state.submission("kid-42", &existing), None);
}

#[test]
fn submission_json_shape() {
    let state = select(vec![
        SelectionEvent::Toggle(d(2025, 9, 2)),
        SelectionEvent::Toggle(d(2025, 9, 1)),
    ]);

    let submission = state.submission("kid-7", &AbsenceRecord::new()).unwrap();
    let json = serde_json::to_string(&submission).unwrap();

    // Blank details are omitted.
    assert_eq!(
        json,
        r#"{"child_id":"kid-7","dates":["2025-09-01","2025-09-02"],"reason":"sick"}"#
    );

    let back: AbsenceSubmission = serde_json::from_str(&json).unwrap();
    assert_eq!(back, submission);
}

#[test]
fn submission_rejects_bad_dates() {
    let json = r#"{"child_id":"kid-7","dates":["2025-09-31"],"reason":"sick"}"#;
    let err = serde_json::from_str::<AbsenceSubmission>(json).unwrap_err();
    assert!(err.to_string().contains("Invalid date"), "got: {err}");
}
