use chrono::{DateTime, Utc};
use common::rating::{average_rating as mean_rating, validate_rating};
use common::schedule::Phase;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{event, feedback};
use crate::error::EngineError;
use crate::events::schedule_of;
use crate::participation::is_registered;

/// Outcome of a feedback submission.
#[derive(Debug, PartialEq, Eq)]
pub enum FeedbackResult {
    Accepted(feedback::Model),
    DuplicateFeedback,
    InvalidRating,
    NotAttended,
}

/// Submit feedback for an event.
///
/// The rating domain is checked first, regardless of attendance or time.
/// Feedback is accepted only after the event has concluded and only from
/// registered attendees. At most one row per (event, user): the unique index
/// is the authority and a violation on insert becomes `DuplicateFeedback`.
#[instrument(skip(db, event, comment), fields(event_id = event.id, user_id, rating))]
pub async fn submit<C: ConnectionTrait>(
    db: &C,
    event: &event::Model,
    user_id: i32,
    rating: i16,
    comment: Option<String>,
    now: DateTime<Utc>,
) -> Result<FeedbackResult, EngineError> {
    if validate_rating(rating).is_err() {
        return Ok(FeedbackResult::InvalidRating);
    }

    let schedule = schedule_of(event)?;
    if schedule.phase(now) != Phase::Concluded || !is_registered(db, event.id, user_id).await? {
        return Ok(FeedbackResult::NotAttended);
    }

    let new_row = feedback::ActiveModel {
        event_id: Set(event.id),
        user_id: Set(user_id),
        rating: Set(rating),
        comment: Set(comment),
        created_at: Set(now),
        ..Default::default()
    };

    match new_row.insert(db).await {
        Ok(model) => Ok(FeedbackResult::Accepted(model)),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            tracing::debug!("Feedback race: duplicate caught on insert");
            Ok(FeedbackResult::DuplicateFeedback)
        }
        Err(e) => Err(e.into()),
    }
}

/// All feedback rows for an event. Order is not significant.
pub async fn feedback_for<C: ConnectionTrait>(
    db: &C,
    event_id: i32,
) -> Result<Vec<feedback::Model>, EngineError> {
    Ok(feedback::Entity::find()
        .filter(feedback::Column::EventId.eq(event_id))
        .all(db)
        .await?)
}

/// Arithmetic mean of an event's ratings, 0.0 when it has none.
pub async fn average_rating<C: ConnectionTrait>(
    db: &C,
    event_id: i32,
) -> Result<f64, EngineError> {
    let ratings: Vec<i16> = feedback::Entity::find()
        .filter(feedback::Column::EventId.eq(event_id))
        .select_only()
        .column(feedback::Column::Rating)
        .into_tuple()
        .all(db)
        .await?;

    Ok(mean_rating(&ratings))
}
