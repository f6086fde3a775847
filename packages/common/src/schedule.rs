use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Computed lifecycle phase of an event at a given instant.
///
/// The phase is always derived from (start time, duration, now) and is never
/// stored, so it cannot drift from the wall clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// The event has not started; registration is still possible.
    Upcoming,
    /// The event is running. Registration is closed.
    InProgress,
    /// The event's end time has passed.
    Concluded,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("duration must be a non-negative number of minutes, got {0}")]
    NegativeDuration(i32),
}

/// The time window of an event: a start instant plus a duration in minutes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    start: DateTime<Utc>,
    duration_minutes: i32,
}

impl Schedule {
    /// Build a schedule, rejecting negative durations. A negative duration is
    /// a data-integrity error, never a phase.
    pub fn new(start: DateTime<Utc>, duration_minutes: i32) -> Result<Self, ScheduleError> {
        if duration_minutes < 0 {
            return Err(ScheduleError::NegativeDuration(duration_minutes));
        }
        Ok(Self {
            start,
            duration_minutes,
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn duration_minutes(&self) -> i32 {
        self.duration_minutes
    }

    /// Derived end time: start + duration.
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Classify the event at `now`. Total and mutually exclusive: exactly one
    /// phase holds for any instant. A zero-minute duration collapses
    /// `InProgress` to an empty interval, so `Upcoming` transitions straight
    /// to `Concluded` at the start time.
    pub fn phase(&self, now: DateTime<Utc>) -> Phase {
        if now < self.start {
            Phase::Upcoming
        } else if now < self.end() {
            Phase::InProgress
        } else {
            Phase::Concluded
        }
    }

    /// Registration is permitted strictly before the start time only.
    pub fn registration_open(&self, now: DateTime<Utc>) -> bool {
        now < self.start
    }

    /// Attendee-facing "my completed events" predicate: the event ended
    /// strictly before `now`.
    ///
    /// Deliberately distinct from [`Schedule::archived_by`]; the two boundary
    /// operators are preserved as separate named predicates pending product
    /// clarification of the intent.
    pub fn ended_before(&self, now: DateTime<Utc>) -> bool {
        self.end() < now
    }

    /// Organizer/global archive predicate: the event is archived the instant
    /// it ends (non-strict boundary).
    pub fn archived_by(&self, now: DateTime<Utc>) -> bool {
        self.end() <= now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, hour, min, 0).unwrap()
    }

    #[test]
    fn rejects_negative_duration() {
        assert_eq!(
            Schedule::new(at(10, 0), -5),
            Err(ScheduleError::NegativeDuration(-5))
        );
    }

    #[test]
    fn end_is_start_plus_duration() {
        let s = Schedule::new(at(10, 0), 90).unwrap();
        assert_eq!(s.end(), at(11, 30));
    }

    #[test]
    fn phase_before_start_is_upcoming() {
        let s = Schedule::new(at(10, 0), 60).unwrap();
        assert_eq!(s.phase(at(9, 50)), Phase::Upcoming);
        assert!(s.registration_open(at(9, 50)));
    }

    #[test]
    fn phase_at_start_is_in_progress() {
        let s = Schedule::new(at(10, 0), 60).unwrap();
        assert_eq!(s.phase(at(10, 0)), Phase::InProgress);
        assert!(!s.registration_open(at(10, 0)));
    }

    #[test]
    fn phase_at_end_is_concluded() {
        let s = Schedule::new(at(10, 0), 60).unwrap();
        assert_eq!(s.phase(at(10, 59)), Phase::InProgress);
        assert_eq!(s.phase(at(11, 0)), Phase::Concluded);
    }

    #[test]
    fn zero_duration_collapses_in_progress() {
        let s = Schedule::new(at(10, 0), 0).unwrap();
        assert_eq!(s.phase(at(9, 59)), Phase::Upcoming);
        assert_eq!(s.phase(at(10, 0)), Phase::Concluded);
    }

    #[test]
    fn exactly_one_phase_holds_at_every_instant() {
        let s = Schedule::new(at(10, 0), 60).unwrap();
        for now in [at(9, 0), at(10, 0), at(10, 30), at(11, 0), at(12, 0)] {
            let phases = [Phase::Upcoming, Phase::InProgress, Phase::Concluded];
            let matching = phases.iter().filter(|&&p| s.phase(now) == p).count();
            assert_eq!(matching, 1, "phase at {now} must be unique");
        }
    }

    #[test]
    fn participated_and_archived_boundaries_differ_at_end() {
        let s = Schedule::new(at(10, 0), 60).unwrap();
        // At the exact end instant the event is archived but has not
        // "ended strictly before" yet.
        assert!(s.archived_by(at(11, 0)));
        assert!(!s.ended_before(at(11, 0)));
        assert!(s.ended_before(at(11, 1)));
    }
}
