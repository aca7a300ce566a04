//! The caller's meeting request: duration, date range, working hours.

use chrono::{DateTime, Utc};

use crate::error::{Result, ScheduleError};

/// Default working-hours window: 9 AM.
pub const DEFAULT_WORKING_HOURS_START: u32 = 9;
/// Default working-hours window: 5 PM.
pub const DEFAULT_WORKING_HOURS_END: u32 = 17;

/// An immutable, validated meeting request.
///
/// Working hours are local hour-of-day bounds (0-23) applied per participant
/// during ranking; the optional date range bounds the search in UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    duration_minutes: i64,
    date_range_start: Option<DateTime<Utc>>,
    date_range_end: Option<DateTime<Utc>>,
    working_hours_start: u32,
    working_hours_end: u32,
}

impl Constraint {
    /// Build a constraint, validating every field.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidConstraint` for a non-positive
    /// duration, working hours outside 0-23 or with `end <= start`, or a
    /// date range with `end <= start`.
    pub fn new(
        duration_minutes: i64,
        date_range_start: Option<DateTime<Utc>>,
        date_range_end: Option<DateTime<Utc>>,
        working_hours_start: u32,
        working_hours_end: u32,
    ) -> Result<Constraint> {
        if duration_minutes <= 0 {
            return Err(ScheduleError::InvalidConstraint(format!(
                "duration must be positive, got {duration_minutes}"
            )));
        }
        if working_hours_start > 23 || working_hours_end > 23 {
            return Err(ScheduleError::InvalidConstraint(format!(
                "working hours must be within 0-23, got {working_hours_start}-{working_hours_end}"
            )));
        }
        if working_hours_end <= working_hours_start {
            return Err(ScheduleError::InvalidConstraint(format!(
                "working hours end ({working_hours_end}) must be after start ({working_hours_start})"
            )));
        }
        if let (Some(range_start), Some(range_end)) = (date_range_start, date_range_end) {
            if range_end <= range_start {
                return Err(ScheduleError::InvalidConstraint(format!(
                    "date range end ({range_end}) must be after start ({range_start})"
                )));
            }
        }
        Ok(Constraint {
            duration_minutes,
            date_range_start,
            date_range_end,
            working_hours_start,
            working_hours_end,
        })
    }

    /// Shorthand: an unbounded request with the default 9-17 working hours.
    pub fn with_duration(duration_minutes: i64) -> Result<Constraint> {
        Constraint::new(
            duration_minutes,
            None,
            None,
            DEFAULT_WORKING_HOURS_START,
            DEFAULT_WORKING_HOURS_END,
        )
    }

    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    pub fn date_range_start(&self) -> Option<DateTime<Utc>> {
        self.date_range_start
    }

    pub fn date_range_end(&self) -> Option<DateTime<Utc>> {
        self.date_range_end
    }

    pub fn working_hours_start(&self) -> u32 {
        self.working_hours_start
    }

    pub fn working_hours_end(&self) -> u32 {
        self.working_hours_end
    }
}
