//! The half-open UTC time interval all scheduling math is built from.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Result, ScheduleError};

/// An immutable half-open time interval `[start, end)` in UTC.
///
/// Two slots are equal iff their bounds match; ordering is by `(start, end)`.
/// Serializes as an RFC 3339 pair; deliberately not deserializable, so the
/// `start < end` invariant can only be established through [`TimeSlot::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeSlot {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeSlot {
    /// Create a slot, rejecting empty or inverted intervals.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidInterval` if `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<TimeSlot> {
        if start >= end {
            return Err(ScheduleError::InvalidInterval { start, end });
        }
        Ok(TimeSlot { start, end })
    }

    /// Internal constructor for bounds already known to be non-empty.
    pub(crate) fn from_parts(start: DateTime<Utc>, end: DateTime<Utc>) -> TimeSlot {
        debug_assert!(start < end, "from_parts requires a non-empty interval");
        TimeSlot { start, end }
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Length of the interval in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Intersect two slots.
    ///
    /// Returns `[max(starts), min(ends))` when that interval is non-empty,
    /// `None` otherwise. Adjacent slots (one ending exactly where the other
    /// starts) do not intersect. The result is never longer than the shorter
    /// operand.
    pub fn intersect(&self, other: &TimeSlot) -> Option<TimeSlot> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(TimeSlot { start, end })
    }
}
