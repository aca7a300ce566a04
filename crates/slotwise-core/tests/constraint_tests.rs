//! Tests for constraint validation.

use chrono::{TimeZone, Utc};
use slotwise_core::{Constraint, ScheduleError};

#[test]
fn accepts_a_plain_duration() {
    let constraint = Constraint::with_duration(30).unwrap();
    assert_eq!(constraint.duration_minutes(), 30);
    assert_eq!(constraint.working_hours_start(), 9);
    assert_eq!(constraint.working_hours_end(), 17);
    assert_eq!(constraint.date_range_start(), None);
    assert_eq!(constraint.date_range_end(), None);
}

#[test]
fn rejects_zero_and_negative_duration() {
    assert!(matches!(
        Constraint::with_duration(0),
        Err(ScheduleError::InvalidConstraint(_))
    ));
    assert!(matches!(
        Constraint::with_duration(-15),
        Err(ScheduleError::InvalidConstraint(_))
    ));
}

#[test]
fn rejects_working_hours_out_of_range() {
    assert!(Constraint::new(30, None, None, 9, 24).is_err());
    assert!(Constraint::new(30, None, None, 25, 26).is_err());
}

#[test]
fn rejects_working_hours_end_not_after_start() {
    assert!(Constraint::new(30, None, None, 17, 9).is_err());
    assert!(Constraint::new(30, None, None, 9, 9).is_err());
}

#[test]
fn rejects_inverted_date_range() {
    let early = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
    assert!(Constraint::new(30, Some(late), Some(early), 9, 17).is_err());
    assert!(Constraint::new(30, Some(early), Some(late), 9, 17).is_ok());
}

#[test]
fn single_sided_date_range_is_allowed() {
    let bound = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    assert!(Constraint::new(30, Some(bound), None, 9, 17).is_ok());
    assert!(Constraint::new(30, None, Some(bound), 9, 17).is_ok());
}
