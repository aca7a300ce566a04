//! # slotwise-core
//!
//! Multi-participant availability intersection and candidate-slot ranking.
//!
//! Given N participants, each with free-time windows expressed in their own
//! timezone, slotwise computes the windows during which all participants are
//! simultaneously free, carves them into fixed-duration candidate meeting
//! slots, and ranks the candidates by how well they fall inside each
//! participant's working hours. All interval math happens in UTC; timezones
//! only matter at the input boundary (normalization) and during ranking
//! (working-hours fit).
//!
//! ## Modules
//!
//! - [`slot`] — the half-open UTC interval and its intersection primitive
//! - [`participant`] — identity + timezone + normalized availability
//! - [`constraint`] — validated meeting request (duration, range, hours)
//! - [`intersect`] — multi-way intersection and candidate generation
//! - [`rank`] — working-hours fit scoring
//! - [`scheduler`] — per-session container tying the engines together
//! - [`ops`] — typed request/response operations for drivers
//! - [`invite`] — iCalendar rendering for a chosen slot
//! - [`error`] — error types

pub mod constraint;
pub mod error;
pub mod intersect;
pub mod invite;
pub mod ops;
pub mod participant;
pub mod rank;
pub mod scheduler;
pub mod slot;

pub use constraint::Constraint;
pub use error::{Result, ScheduleError};
pub use intersect::{common_windows, find_common_slots};
pub use invite::generate_invite;
pub use participant::{Participant, RawTimestamp};
pub use rank::{rank_slots, RankedSlot};
pub use scheduler::Scheduler;
pub use slot::TimeSlot;
