//! Working-hours fit scoring for candidate slots.
//!
//! Each candidate is scored by summing a per-participant fit: the slot's UTC
//! bounds are converted into the participant's local timezone and compared
//! against the constraint's working-hour window.

use chrono::Timelike;
use serde::Serialize;

use crate::constraint::Constraint;
use crate::participant::Participant;
use crate::slot::TimeSlot;

/// A candidate slot paired with its working-hours fit score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedSlot {
    pub slot: TimeSlot,
    pub score: f64,
}

/// Score and order candidate slots by working-hours fit.
///
/// Per participant, a slot contributes:
/// - `1.0` when its local interval stays on one calendar date and lies fully
///   inside `[working_hours_start, working_hours_end]`;
/// - `0.5` when the local hour range merely overlaps the working-hour window;
/// - `0.0` otherwise, including any slot that crosses local midnight.
///
/// A slot fully inside every participant's working hours therefore scores
/// exactly `participants.len()`. Results are sorted by score descending, with
/// ascending start time breaking ties so the ordering is deterministic.
pub fn rank_slots(
    participants: &[Participant],
    slots: &[TimeSlot],
    constraint: &Constraint,
) -> Vec<RankedSlot> {
    let mut ranked: Vec<RankedSlot> = slots
        .iter()
        .map(|slot| RankedSlot {
            slot: *slot,
            score: participants
                .iter()
                .map(|p| participant_fit(p, slot, constraint))
                .sum(),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.slot.start().cmp(&b.slot.start()))
    });
    ranked
}

/// One participant's fit for one slot.
///
/// Hours are compared fractionally (hour + minute/60), so a slot ending at
/// 17:30 local is not "fully inside" a 9-17 window.
fn participant_fit(participant: &Participant, slot: &TimeSlot, constraint: &Constraint) -> f64 {
    let tz = participant.timezone();
    let local_start = slot.start().with_timezone(&tz);
    let local_end = slot.end().with_timezone(&tz);

    // A slot crossing local midnight never fits working hours.
    if local_start.date_naive() != local_end.date_naive() {
        return 0.0;
    }

    let start_hour = f64::from(local_start.hour()) + f64::from(local_start.minute()) / 60.0;
    let end_hour = f64::from(local_end.hour()) + f64::from(local_end.minute()) / 60.0;
    let hours_start = f64::from(constraint.working_hours_start());
    let hours_end = f64::from(constraint.working_hours_end());

    if start_hour >= hours_start && end_hour <= hours_end {
        1.0
    } else if start_hour < hours_end && end_hour > hours_start {
        0.5
    } else {
        0.0
    }
}
