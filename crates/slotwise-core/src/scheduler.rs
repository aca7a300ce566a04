//! Per-session scheduling container.
//!
//! Holds the participants registered so far and exposes the intersection and
//! ranking engines as a cohesive API. One instance per scheduling session,
//! passed explicitly through the call chain; there is no global scheduler and
//! no derived state cached between calls.

use crate::constraint::Constraint;
use crate::intersect;
use crate::participant::Participant;
use crate::rank::{self, RankedSlot};
use crate::slot::TimeSlot;

/// A scheduling session: the participants gathered so far.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    participants: Vec<Participant>,
}

impl Scheduler {
    pub fn new() -> Scheduler {
        Scheduler::default()
    }

    pub fn add_participant(&mut self, participant: Participant) {
        self.participants.push(participant);
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Candidate slots common to every registered participant.
    ///
    /// Computed fresh from the current participant list on every call; see
    /// [`intersect::find_common_slots`].
    pub fn find_common_slots(&self, constraint: &Constraint) -> Vec<TimeSlot> {
        intersect::find_common_slots(&self.participants, constraint)
    }

    /// Score and order candidate slots; see [`rank::rank_slots`].
    pub fn rank_slots(&self, slots: &[TimeSlot], constraint: &Constraint) -> Vec<RankedSlot> {
        rank::rank_slots(&self.participants, slots, constraint)
    }
}
