use chrono::{DateTime, Utc};
use common::access::require_organizer;
use common::schedule::Schedule;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{event, event_participant, feedback};
use crate::error::EngineError;
use crate::models::event::{NewEvent, UpdateEvent, validate_new_event, validate_update_event};

/// Derive the time window of a stored event. A negative duration in the row
/// is a data-integrity error and surfaces as a validation failure rather
/// than being classified.
pub fn schedule_of(event: &event::Model) -> Result<Schedule, EngineError> {
    Ok(Schedule::new(event.start_time, event.duration_minutes)?)
}

/// Look up an event by ID, returning NotFound if absent.
pub async fn find_event<C: ConnectionTrait>(db: &C, id: i32) -> Result<event::Model, EngineError> {
    event::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(EngineError::NotFound("Event"))
}

/// Create an event with the caller as organizer. Event names are unique;
/// the pre-check gives the friendly message and the unique constraint stays
/// the authority under concurrency.
#[instrument(skip(db, req), fields(organizer_id, name = %req.name))]
pub async fn create_event<C: ConnectionTrait>(
    db: &C,
    organizer_id: i32,
    req: NewEvent,
    now: DateTime<Utc>,
) -> Result<event::Model, EngineError> {
    validate_new_event(&req)?;
    // Rejects negative durations before anything is stored.
    Schedule::new(req.start_time, req.duration_minutes)?;

    crate::users::find_user(db, organizer_id).await?;

    let name = req.name.trim().to_string();
    let existing = event::Entity::find()
        .filter(event::Column::Name.eq(&name))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(EngineError::NameTaken);
    }

    let new_event = event::ActiveModel {
        name: Set(name),
        description: Set(req.description),
        start_time: Set(req.start_time),
        duration_minutes: Set(req.duration_minutes),
        location: Set(req.location),
        organizer_id: Set(organizer_id),
        created_at: Set(now),
        ..Default::default()
    };

    new_event.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => EngineError::NameTaken,
        _ => EngineError::from(e),
    })
}

/// Partially update an event. Only the organizer is authorized; the check
/// short-circuits before any mutation.
#[instrument(skip(db, event, req), fields(event_id = event.id, viewer_id))]
pub async fn update_event<C: ConnectionTrait>(
    db: &C,
    event: &event::Model,
    viewer_id: i32,
    req: UpdateEvent,
) -> Result<event::Model, EngineError> {
    require_organizer(event.organizer_id, viewer_id)?;
    validate_update_event(&req)?;

    if req == UpdateEvent::default() {
        return Ok(event.clone());
    }

    // Cross-field check against existing values: the patched window must
    // still be a valid schedule.
    let effective_duration = req.duration_minutes.unwrap_or(event.duration_minutes);
    let effective_start = req.start_time.unwrap_or(event.start_time);
    Schedule::new(effective_start, effective_duration)?;

    if let Some(ref name) = req.name {
        let name = name.trim();
        if name != event.name {
            let dup = event::Entity::find()
                .filter(event::Column::Name.eq(name))
                .one(db)
                .await?;
            if dup.is_some() {
                return Err(EngineError::NameTaken);
            }
        }
    }

    let mut active: event::ActiveModel = event.clone().into();
    if let Some(ref name) = req.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(description) = req.description {
        active.description = Set(description);
    }
    if let Some(start_time) = req.start_time {
        active.start_time = Set(start_time);
    }
    if let Some(duration_minutes) = req.duration_minutes {
        active.duration_minutes = Set(duration_minutes);
    }
    if let Some(location) = req.location {
        active.location = Set(location);
    }

    let model = active.update(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => EngineError::NameTaken,
        _ => EngineError::from(e),
    })?;

    Ok(model)
}

/// Delete an event along with its participation and feedback rows. Only the
/// organizer is authorized.
#[instrument(skip(db, event), fields(event_id = event.id, viewer_id))]
pub async fn delete_event<C: ConnectionTrait + TransactionTrait>(
    db: &C,
    event: &event::Model,
    viewer_id: i32,
) -> Result<(), EngineError> {
    require_organizer(event.organizer_id, viewer_id)?;

    let txn = db.begin().await?;
    event_participant::Entity::delete_many()
        .filter(event_participant::Column::EventId.eq(event.id))
        .exec(&txn)
        .await?;
    feedback::Entity::delete_many()
        .filter(feedback::Column::EventId.eq(event.id))
        .exec(&txn)
        .await?;
    event::Entity::delete_by_id(event.id).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(event_id = event.id, "Deleted event");
    Ok(())
}

/// All events, soonest first.
pub async fn all_events<C: ConnectionTrait>(db: &C) -> Result<Vec<event::Model>, EngineError> {
    Ok(event::Entity::find()
        .order_by_asc(event::Column::StartTime)
        .all(db)
        .await?)
}

/// Events organized by the given user (indexed lookup by organizer).
pub async fn organized_events<C: ConnectionTrait>(
    db: &C,
    organizer_id: i32,
) -> Result<Vec<event::Model>, EngineError> {
    Ok(event::Entity::find()
        .filter(event::Column::OrganizerId.eq(organizer_id))
        .order_by_asc(event::Column::StartTime)
        .all(db)
        .await?)
}

/// Global archive view: every event whose end time has passed, boundary
/// inclusive. End time is derived from start + duration, so the cut is
/// applied via the schedule predicate rather than a stored column.
pub async fn archived_events<C: ConnectionTrait>(
    db: &C,
    now: DateTime<Utc>,
) -> Result<Vec<event::Model>, EngineError> {
    let events = all_events(db).await?;
    let mut archived = Vec::new();
    for event in events {
        if schedule_of(&event)?.archived_by(now) {
            archived.push(event);
        }
    }
    Ok(archived)
}
