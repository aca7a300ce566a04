//! Tests for participant construction and availability normalization.

use chrono::{NaiveDate, NaiveDateTime, TimeZone, Utc};
use slotwise_core::{Participant, RawTimestamp, ScheduleError};

/// Helper: a zone-less local timestamp.
fn local(year: i32, month: u32, day: u32, hour: u32, min: u32) -> RawTimestamp {
    RawTimestamp::Local(naive(year, month, day, hour, min))
}

fn naive(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

#[test]
fn unknown_timezone_is_a_hard_error() {
    let err = Participant::new("Alice", "Mars/Olympus_Mons");
    assert!(matches!(err, Err(ScheduleError::UnknownTimeZone(_))));
}

#[test]
fn local_time_converts_to_utc() {
    // 2024-01-01 is winter: New York is UTC-5, so 09:00 local → 14:00 UTC.
    let mut p = Participant::new("Alice", "America/New_York").unwrap();
    p.add_availability(local(2024, 1, 1, 9, 0), local(2024, 1, 1, 12, 0))
        .unwrap();

    assert_eq!(p.availability().len(), 1);
    let slot = p.availability()[0];
    assert_eq!(slot.start(), Utc.with_ymd_and_hms(2024, 1, 1, 14, 0, 0).unwrap());
    assert_eq!(slot.end(), Utc.with_ymd_and_hms(2024, 1, 1, 17, 0, 0).unwrap());
}

#[test]
fn dst_affects_conversion() {
    // 2024-07-01 is summer: New York is UTC-4, so 09:00 local → 13:00 UTC.
    let mut p = Participant::new("Alice", "America/New_York").unwrap();
    p.add_availability(local(2024, 7, 1, 9, 0), local(2024, 7, 1, 10, 0))
        .unwrap();

    let slot = p.availability()[0];
    assert_eq!(slot.start(), Utc.with_ymd_and_hms(2024, 7, 1, 13, 0, 0).unwrap());
}

#[test]
fn offset_bearing_timestamp_converts_from_its_own_offset() {
    // +02:00 input for a New York participant: the explicit offset wins.
    let start = RawTimestamp::Fixed("2024-01-01T12:00:00+02:00".parse().unwrap());
    let end = RawTimestamp::Fixed("2024-01-01T13:00:00+02:00".parse().unwrap());

    let mut p = Participant::new("Alice", "America/New_York").unwrap();
    p.add_availability(start, end).unwrap();

    let slot = p.availability()[0];
    assert_eq!(slot.start(), Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
    assert_eq!(slot.end(), Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap());
}

#[test]
fn invalid_window_rejected_without_touching_prior_windows() {
    let mut p = Participant::new("Alice", "UTC").unwrap();
    p.add_availability(local(2024, 1, 1, 9, 0), local(2024, 1, 1, 10, 0))
        .unwrap();

    let err = p.add_availability(local(2024, 1, 1, 12, 0), local(2024, 1, 1, 11, 0));
    assert!(matches!(err, Err(ScheduleError::InvalidInterval { .. })));

    // The earlier window is still there, unchanged.
    assert_eq!(p.availability().len(), 1);
    assert_eq!(p.availability()[0].duration_minutes(), 60);
}

#[test]
fn overlapping_windows_merge_on_insert() {
    // 9-11 and 10-12 merge into 9-12.
    let mut p = Participant::new("Alice", "UTC").unwrap();
    p.add_availability(local(2024, 1, 1, 9, 0), local(2024, 1, 1, 11, 0))
        .unwrap();
    p.add_availability(local(2024, 1, 1, 10, 0), local(2024, 1, 1, 12, 0))
        .unwrap();

    assert_eq!(p.availability().len(), 1);
    let slot = p.availability()[0];
    assert_eq!(slot.start(), Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap());
    assert_eq!(slot.end(), Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
}

#[test]
fn adjacent_windows_merge_on_insert() {
    let mut p = Participant::new("Alice", "UTC").unwrap();
    p.add_availability(local(2024, 1, 1, 9, 0), local(2024, 1, 1, 10, 0))
        .unwrap();
    p.add_availability(local(2024, 1, 1, 10, 0), local(2024, 1, 1, 11, 0))
        .unwrap();

    assert_eq!(p.availability().len(), 1);
    assert_eq!(p.availability()[0].duration_minutes(), 120);
}

#[test]
fn disjoint_windows_stay_separate_and_sorted() {
    // Inserted out of order; stored sorted ascending.
    let mut p = Participant::new("Alice", "UTC").unwrap();
    p.add_availability(local(2024, 1, 1, 14, 0), local(2024, 1, 1, 15, 0))
        .unwrap();
    p.add_availability(local(2024, 1, 1, 9, 0), local(2024, 1, 1, 10, 0))
        .unwrap();

    assert_eq!(p.availability().len(), 2);
    assert!(p.availability()[0].start() < p.availability()[1].start());
}

#[test]
fn nonexistent_local_time_is_an_error() {
    // US spring-forward 2024-03-10: 02:30 does not exist in New York.
    let mut p = Participant::new("Alice", "America/New_York").unwrap();
    let err = p.add_availability(local(2024, 3, 10, 2, 30), local(2024, 3, 10, 4, 0));
    assert!(matches!(err, Err(ScheduleError::NonexistentLocalTime(_, _))));
    assert!(p.availability().is_empty());
}

#[test]
fn ambiguous_local_time_resolves_to_earlier_instant() {
    // US fall-back 2024-11-03: 01:30 occurs twice in New York; the earlier
    // occurrence is still EDT (UTC-4), i.e. 05:30 UTC.
    let mut p = Participant::new("Alice", "America/New_York").unwrap();
    p.add_availability(local(2024, 11, 3, 1, 30), local(2024, 11, 3, 3, 0))
        .unwrap();

    let slot = p.availability()[0];
    assert_eq!(
        slot.start(),
        Utc.with_ymd_and_hms(2024, 11, 3, 5, 30, 0).unwrap()
    );
}
