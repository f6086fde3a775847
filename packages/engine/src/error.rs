use common::access::AccessError;
use common::rating::RatingError;
use common::schedule::ScheduleError;
use sea_orm::DbErr;
use thiserror::Error;

/// Engine-level error type.
///
/// Expected, recoverable participation/feedback outcomes (already registered,
/// duplicate feedback, registration closed, not attended) are NOT errors;
/// they are returned as typed results by the engines. This type covers
/// validation failures, authorization failures, missing entities, and store
/// errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Validation(String),
    #[error("An event with this name already exists")]
    NameTaken,
    #[error("Username is already taken")]
    UsernameTaken,
    #[error("Email is already registered")]
    EmailTaken,
    /// Only the organizer may edit or delete an event. Short-circuits before
    /// any mutation.
    #[error("Only the organizer may perform this action")]
    Unauthorized,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Database error: {0}")]
    Db(#[from] DbErr),
}

impl From<ScheduleError> for EngineError {
    fn from(err: ScheduleError) -> Self {
        EngineError::Validation(err.to_string())
    }
}

impl From<RatingError> for EngineError {
    fn from(err: RatingError) -> Self {
        EngineError::Validation(err.to_string())
    }
}

impl From<AccessError> for EngineError {
    fn from(_: AccessError) -> Self {
        EngineError::Unauthorized
    }
}
