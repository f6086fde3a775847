use chrono::{DateTime, Utc};
use sea_orm::sea_query::Query as SeaQuery;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{event, event_participant, user};
use crate::error::EngineError;
use crate::events::schedule_of;

/// Outcome of a registration attempt. Conflicts are expected, recoverable
/// results, not errors.
#[derive(Debug, PartialEq, Eq)]
pub enum RegistrationResult {
    Accepted,
    AlreadyRegistered,
    RegistrationClosed,
}

/// Register a user for an event.
///
/// Registration is permitted strictly before the event starts. Membership is
/// a set: the pre-check answers the common retry case without an insert
/// attempt, and the composite primary key on (event_id, user_id) remains the
/// authority, so concurrent duplicate registrations cannot both succeed.
#[instrument(skip(db, event), fields(event_id = event.id, user_id))]
pub async fn register<C: ConnectionTrait>(
    db: &C,
    event: &event::Model,
    user_id: i32,
    now: DateTime<Utc>,
) -> Result<RegistrationResult, EngineError> {
    let schedule = schedule_of(event)?;
    if !schedule.registration_open(now) {
        return Ok(RegistrationResult::RegistrationClosed);
    }

    if is_registered(db, event.id, user_id).await? {
        return Ok(RegistrationResult::AlreadyRegistered);
    }

    crate::users::find_user(db, user_id).await?;

    let new_row = event_participant::ActiveModel {
        event_id: Set(event.id),
        user_id: Set(user_id),
        registered_at: Set(now),
    };

    match new_row.insert(db).await {
        Ok(_) => Ok(RegistrationResult::Accepted),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            tracing::debug!("Registration race: duplicate caught on insert");
            Ok(RegistrationResult::AlreadyRegistered)
        }
        Err(e) => Err(e.into()),
    }
}

/// Whether the user is in the event's attendee set.
pub async fn is_registered<C: ConnectionTrait>(
    db: &C,
    event_id: i32,
    user_id: i32,
) -> Result<bool, EngineError> {
    Ok(event_participant::Entity::find_by_id((event_id, user_id))
        .one(db)
        .await?
        .is_some())
}

/// Attendees of an event, ordered by registration time.
pub async fn attendees_of<C: ConnectionTrait>(
    db: &C,
    event_id: i32,
) -> Result<Vec<user::Model>, EngineError> {
    let rows = event_participant::Entity::find()
        .filter(event_participant::Column::EventId.eq(event_id))
        .find_also_related(user::Entity)
        .order_by_asc(event_participant::Column::RegisteredAt)
        .all(db)
        .await?;

    Ok(rows.into_iter().filter_map(|(_, u)| u).collect())
}

fn member_events_query(user_id: i32) -> Select<event::Entity> {
    event::Entity::find().filter(
        event::Column::Id.in_subquery(
            SeaQuery::select()
                .column(event_participant::Column::EventId)
                .from(event_participant::Entity)
                .and_where(event_participant::Column::UserId.eq(user_id))
                .to_owned(),
        ),
    )
}

/// Events the user is registered for that have not started yet.
pub async fn registered_events<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    now: DateTime<Utc>,
) -> Result<Vec<event::Model>, EngineError> {
    Ok(member_events_query(user_id)
        .filter(event::Column::StartTime.gt(now))
        .order_by_asc(event::Column::StartTime)
        .all(db)
        .await?)
}

/// Events the user attended that ended strictly before `now`.
///
/// The strict boundary is attendee-facing and intentionally differs from the
/// archive view's inclusive one (see `Schedule::ended_before`).
pub async fn participated_events<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    now: DateTime<Utc>,
) -> Result<Vec<event::Model>, EngineError> {
    let events = member_events_query(user_id)
        .order_by_asc(event::Column::StartTime)
        .all(db)
        .await?;

    let mut concluded = Vec::new();
    for event in events {
        if schedule_of(&event)?.ended_before(now) {
            concluded.push(event);
        }
    }
    Ok(concluded)
}
