//! Multi-way availability intersection and candidate-slot generation.
//!
//! Folds each participant's availability into the set of windows where all
//! participants overlap, then carves those windows into fixed-duration
//! candidate meeting slots at a 30-minute step.

use chrono::Duration;

use crate::constraint::Constraint;
use crate::participant::Participant;
use crate::slot::TimeSlot;

/// Step between consecutive candidate start times, in minutes.
pub const CANDIDATE_STEP_MINUTES: i64 = 30;

/// Hard cap on candidates generated per query.
///
/// Wide common windows combined with a short requested duration can produce
/// an unbounded number of 30-minute-stepped candidates; generation stops once
/// this many have been emitted. Because candidates are emitted in ascending
/// start order, the cap drops the latest ones.
pub const MAX_CANDIDATES: usize = 500;

/// Compute the raw common-availability windows for a set of participants.
///
/// Seeds with the first participant's availability and folds in each
/// subsequent participant via pairwise intersection, discarding empty
/// intersections and any window already too short to host the requested
/// duration (subsequent intersections can only shrink it further). Surviving
/// windows are clipped to the constraint's optional date range, re-filtered
/// by duration, and returned sorted ascending by start.
///
/// The returned *set* of windows is independent of participant order. Zero
/// participants yield an empty result, not an error.
pub fn common_windows(participants: &[Participant], constraint: &Constraint) -> Vec<TimeSlot> {
    let Some((first, rest)) = participants.split_first() else {
        return Vec::new();
    };
    let min_duration = constraint.duration_minutes();

    let mut common: Vec<TimeSlot> = first.availability().to_vec();
    for participant in rest {
        let mut narrowed = Vec::new();
        for held in &common {
            for theirs in participant.availability() {
                if let Some(overlap) = held.intersect(theirs) {
                    if overlap.duration_minutes() >= min_duration {
                        narrowed.push(overlap);
                    }
                }
            }
        }
        common = narrowed;
        if common.is_empty() {
            break;
        }
    }

    let mut windows: Vec<TimeSlot> = common
        .into_iter()
        .filter_map(|slot| clip_to_range(slot, constraint))
        .filter(|slot| slot.duration_minutes() >= min_duration)
        .collect();
    windows.sort_by_key(|s| (s.start(), s.end()));
    windows
}

/// Find all candidate meeting slots common to every participant.
///
/// Each common window is carved into candidates of exactly
/// `constraint.duration_minutes()`, the start advancing by
/// [`CANDIDATE_STEP_MINUTES`] while the remainder of the window still fits
/// the full duration. Candidates are returned in ascending start order,
/// capped at [`MAX_CANDIDATES`].
pub fn find_common_slots(participants: &[Participant], constraint: &Constraint) -> Vec<TimeSlot> {
    let windows = common_windows(participants, constraint);
    let duration = Duration::minutes(constraint.duration_minutes());
    let step = Duration::minutes(CANDIDATE_STEP_MINUTES);

    let mut candidates = Vec::new();
    'windows: for window in windows {
        let mut cursor = window.start();
        while window.end() - cursor >= duration {
            candidates.push(TimeSlot::from_parts(cursor, cursor + duration));
            if candidates.len() >= MAX_CANDIDATES {
                break 'windows;
            }
            cursor += step;
        }
    }
    candidates
}

/// Clip a window to the constraint's date range (when either bound is set).
fn clip_to_range(slot: TimeSlot, constraint: &Constraint) -> Option<TimeSlot> {
    let start = match constraint.date_range_start() {
        Some(bound) => slot.start().max(bound),
        None => slot.start(),
    };
    let end = match constraint.date_range_end() {
        Some(bound) => slot.end().min(bound),
        None => slot.end(),
    };
    (start < end).then(|| TimeSlot::from_parts(start, end))
}
