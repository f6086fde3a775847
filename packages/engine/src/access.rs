use chrono::{DateTime, Utc};
use common::access::AccessView;
use sea_orm::ConnectionTrait;

use crate::entity::event;
use crate::error::EngineError;
use crate::events::schedule_of;
use crate::participation::is_registered;

/// Resolve the viewer's capabilities for an event at `now`: whether they
/// organize it, whether they are registered, and whether registration has
/// closed. Consumed by the presentation layer to decide which actions to
/// expose.
pub async fn resolve<C: ConnectionTrait>(
    db: &C,
    event: &event::Model,
    viewer_id: i32,
    now: DateTime<Utc>,
) -> Result<AccessView, EngineError> {
    let schedule = schedule_of(event)?;
    let registered = is_registered(db, event.id, viewer_id).await?;
    Ok(AccessView::resolve(
        &schedule,
        event.organizer_id,
        viewer_id,
        registered,
        now,
    ))
}
