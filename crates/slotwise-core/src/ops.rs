//! Typed request/response operations over a scheduling session.
//!
//! This is the driver-facing surface: every operation takes the `Scheduler`
//! explicitly and exchanges plain serde structs, so any front end (CLI, HTTP
//! handler, chat agent) can call it without the engine knowing about the
//! driver. Timestamps cross this boundary as ISO-8601 strings.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::constraint::{Constraint, DEFAULT_WORKING_HOURS_END, DEFAULT_WORKING_HOURS_START};
use crate::error::{Result, ScheduleError};
use crate::invite;
use crate::participant::{Participant, RawTimestamp};
use crate::scheduler::Scheduler;
use crate::slot::TimeSlot;

/// One availability window as supplied by the caller, ISO-8601 bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddParticipantRequest {
    pub name: String,
    /// IANA timezone identifier, e.g. "America/New_York".
    pub timezone: String,
    /// Zone-less bounds are interpreted in the participant's timezone.
    #[serde(default)]
    pub availability: Vec<AvailabilityWindow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddParticipantResponse {
    pub name: String,
    /// Windows actually stored (after merging, invalid windows skipped).
    pub windows_added: usize,
    /// One entry per skipped invalid window.
    pub warnings: Vec<String>,
}

/// Register a participant with the session.
///
/// An individual window whose start is not before its end is skipped and
/// reported in `warnings`; the participant and their remaining windows are
/// still registered. An unknown timezone or unparseable timestamp aborts the
/// whole operation.
///
/// # Errors
/// `ScheduleError::UnknownTimeZone`, `ScheduleError::InvalidTimestamp`, or
/// `ScheduleError::NonexistentLocalTime`.
pub fn add_participant(
    scheduler: &mut Scheduler,
    request: AddParticipantRequest,
) -> Result<AddParticipantResponse> {
    let mut participant = Participant::new(request.name.clone(), &request.timezone)?;

    let mut warnings = Vec::new();
    for window in &request.availability {
        let start = parse_timestamp(&window.start)?;
        let end = parse_timestamp(&window.end)?;
        match participant.add_availability(start, end) {
            Ok(()) => {}
            Err(err @ ScheduleError::InvalidInterval { .. }) => {
                warnings.push(format!(
                    "skipped window {} to {}: {}",
                    window.start, window.end, err
                ));
            }
            Err(err) => return Err(err),
        }
    }

    let windows_added = participant.availability().len();
    scheduler.add_participant(participant);

    Ok(AddParticipantResponse {
        name: request.name,
        windows_added,
        warnings,
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMeetingTimesRequest {
    pub duration_minutes: i64,
    /// Optional ISO-8601 lower bound; zone-less input is treated as UTC.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Optional ISO-8601 upper bound; zone-less input is treated as UTC.
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "default_working_hours_start")]
    pub working_hours_start: u32,
    #[serde(default = "default_working_hours_end")]
    pub working_hours_end: u32,
}

fn default_working_hours_start() -> u32 {
    DEFAULT_WORKING_HOURS_START
}

fn default_working_hours_end() -> u32 {
    DEFAULT_WORKING_HOURS_END
}

/// A ranked candidate, RFC 3339 bounds plus its fit score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub start: String,
    pub end: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMeetingTimesResponse {
    /// Best-first; empty when no common slot exists (a normal outcome).
    pub candidates: Vec<CandidateSlot>,
}

/// Find and rank meeting times common to every registered participant.
///
/// # Errors
/// `ScheduleError::InvalidConstraint` for a bad duration/working-hours/date
/// range, `ScheduleError::InvalidTimestamp` for unparseable bounds.
pub fn find_meeting_times(
    scheduler: &Scheduler,
    request: FindMeetingTimesRequest,
) -> Result<FindMeetingTimesResponse> {
    let start_bound = request
        .start_date
        .as_deref()
        .map(parse_utc_timestamp)
        .transpose()?;
    let end_bound = request
        .end_date
        .as_deref()
        .map(parse_utc_timestamp)
        .transpose()?;

    let constraint = Constraint::new(
        request.duration_minutes,
        start_bound,
        end_bound,
        request.working_hours_start,
        request.working_hours_end,
    )?;

    let slots = scheduler.find_common_slots(&constraint);
    let ranked = scheduler.rank_slots(&slots, &constraint);

    let candidates = ranked
        .into_iter()
        .map(|r| CandidateSlot {
            start: r.slot.start().to_rfc3339_opts(SecondsFormat::Secs, true),
            end: r.slot.end().to_rfc3339_opts(SecondsFormat::Secs, true),
            score: r.score,
        })
        .collect();

    Ok(FindMeetingTimesResponse { candidates })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateInviteRequest {
    pub start: String,
    pub end: String,
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateInviteResponse {
    /// iCalendar file content for the chosen slot.
    pub ics: String,
}

/// Render an invite for a chosen slot.
///
/// # Errors
/// `ScheduleError::InvalidTimestamp` for unparseable bounds,
/// `ScheduleError::InvalidInterval` when start is not before end.
pub fn generate_invite(request: GenerateInviteRequest) -> Result<GenerateInviteResponse> {
    let start = parse_utc_timestamp(&request.start)?;
    let end = parse_utc_timestamp(&request.end)?;
    let slot = TimeSlot::new(start, end)?;

    Ok(GenerateInviteResponse {
        ics: invite::generate_invite(&slot, &request.subject, &request.description),
    })
}

/// Parse an ISO-8601 timestamp into a [`RawTimestamp`].
///
/// Accepts RFC 3339 (offset-bearing) or a bare local datetime with or
/// without seconds.
pub fn parse_timestamp(value: &str) -> Result<RawTimestamp> {
    if let Ok(fixed) = DateTime::parse_from_rfc3339(value) {
        return Ok(RawTimestamp::Fixed(fixed));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(RawTimestamp::Local(naive));
        }
    }
    Err(ScheduleError::InvalidTimestamp(value.to_string()))
}

/// Parse an ISO-8601 timestamp, treating zone-less input as UTC.
fn parse_utc_timestamp(value: &str) -> Result<DateTime<Utc>> {
    match parse_timestamp(value)? {
        RawTimestamp::Fixed(dt) => Ok(dt.with_timezone(&Utc)),
        RawTimestamp::Local(naive) => Ok(Utc.from_utc_datetime(&naive)),
    }
}
