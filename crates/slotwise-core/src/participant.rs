//! Participants and local-time availability normalization.
//!
//! A participant owns an IANA timezone and a list of free windows stored in
//! UTC. Raw windows arrive in the participant's local time (or with an
//! explicit offset) and are normalized on insertion; overlapping or adjacent
//! windows are merged so the availability list is always sorted and disjoint.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, ScheduleError};
use crate::slot::TimeSlot;

/// A caller-supplied timestamp, before timezone normalization.
///
/// Zone-less timestamps are interpreted in the owning participant's timezone;
/// offset-bearing timestamps are converted from their own offset.
#[derive(Debug, Clone, Copy)]
pub enum RawTimestamp {
    Local(NaiveDateTime),
    Fixed(DateTime<FixedOffset>),
}

/// A scheduling actor: a name, a timezone, and free windows in UTC.
#[derive(Debug, Clone)]
pub struct Participant {
    name: String,
    timezone: Tz,
    availability: Vec<TimeSlot>,
}

impl Participant {
    /// Create a participant with an empty availability list.
    ///
    /// # Errors
    /// Returns `ScheduleError::UnknownTimeZone` if `timezone` is not a valid
    /// IANA identifier.
    pub fn new(name: impl Into<String>, timezone: &str) -> Result<Participant> {
        let tz: Tz = timezone
            .parse()
            .map_err(|_| ScheduleError::UnknownTimeZone(timezone.to_string()))?;
        Ok(Participant {
            name: name.into(),
            timezone: tz,
            availability: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The participant's free windows: sorted ascending, non-overlapping, UTC.
    pub fn availability(&self) -> &[TimeSlot] {
        &self.availability
    }

    /// Add a free window, normalizing both bounds to UTC.
    ///
    /// Overlapping or adjacent windows are merged on insertion, so repeated
    /// calls keep the availability list canonical. A window with
    /// `start >= end` (after normalization) is rejected without touching the
    /// windows already stored.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidInterval` for an empty or inverted
    /// window, or `ScheduleError::NonexistentLocalTime` when a zone-less
    /// bound falls in a DST gap.
    pub fn add_availability(&mut self, start: RawTimestamp, end: RawTimestamp) -> Result<()> {
        let start_utc = self.to_utc(start)?;
        let end_utc = self.to_utc(end)?;
        let window = TimeSlot::new(start_utc, end_utc)?;

        self.availability.push(window);
        self.availability.sort_by_key(|s| (s.start(), s.end()));

        // Merge overlapping or adjacent windows.
        let mut merged: Vec<TimeSlot> = Vec::with_capacity(self.availability.len());
        for slot in self.availability.drain(..) {
            if let Some(last) = merged.last_mut() {
                if slot.start() <= last.end() {
                    let end = last.end().max(slot.end());
                    *last = TimeSlot::from_parts(last.start(), end);
                    continue;
                }
            }
            merged.push(slot);
        }
        self.availability = merged;

        Ok(())
    }

    /// Resolve a raw timestamp to UTC using this participant's timezone.
    ///
    /// An ambiguous local time (fall-back DST fold) resolves to the earlier
    /// of the two instants; a nonexistent local time (spring-forward gap) is
    /// a caller error.
    fn to_utc(&self, raw: RawTimestamp) -> Result<DateTime<Utc>> {
        match raw {
            RawTimestamp::Fixed(dt) => Ok(dt.with_timezone(&Utc)),
            RawTimestamp::Local(naive) => match self.timezone.from_local_datetime(&naive) {
                LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
                LocalResult::Ambiguous(earlier, _) => Ok(earlier.with_timezone(&Utc)),
                LocalResult::None => Err(ScheduleError::NonexistentLocalTime(
                    naive.to_string(),
                    self.timezone.to_string(),
                )),
            },
        }
    }
}
