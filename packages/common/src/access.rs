use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::schedule::Schedule;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("only the organizer may perform this action")]
    NotOrganizer,
}

/// Capability descriptor for a viewer looking at an event.
///
/// Consumed by the presentation layer to decide which actions to expose; the
/// mutating operations re-check on their own and never trust this view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AccessView {
    /// The viewer organizes the event.
    pub organizer: bool,
    /// The viewer is in the event's attendee set.
    pub registered: bool,
    /// Registration is no longer possible (the event has started).
    pub closed: bool,
}

impl AccessView {
    /// Resolve the viewer's relationship to an event at `now`.
    ///
    /// No combination is forbidden: an organizer may also appear in their own
    /// attendee set (self-registration is permitted).
    pub fn resolve(
        schedule: &Schedule,
        organizer_id: i32,
        viewer_id: i32,
        is_registered: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            organizer: viewer_id == organizer_id,
            registered: is_registered,
            closed: !schedule.registration_open(now),
        }
    }
}

/// Gate for event edit/delete: only the organizer is authorized. Must be
/// checked server-side before any mutation.
pub fn require_organizer(organizer_id: i32, viewer_id: i32) -> Result<(), AccessError> {
    if viewer_id != organizer_id {
        return Err(AccessError::NotOrganizer);
    }
    Ok(())
}
