use common::rating::average_rating;
use sea_orm::*;
use serde::Serialize;

use crate::entity::{event, event_participant, feedback};
use crate::error::EngineError;

/// Per-event engagement figures for the organizer dashboard.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct EventEngagement {
    pub event_id: i32,
    pub name: String,
    pub average_rating: f64,
    pub participant_count: u64,
}

/// Aggregate name, mean rating and attendee count for every event. Events
/// without feedback report an average of 0.0.
pub async fn event_engagement<C: ConnectionTrait>(
    db: &C,
) -> Result<Vec<EventEngagement>, EngineError> {
    let events = event::Entity::find()
        .order_by_asc(event::Column::StartTime)
        .all(db)
        .await?;

    let mut engagement = Vec::with_capacity(events.len());
    for ev in events {
        let ratings: Vec<i16> = feedback::Entity::find()
            .filter(feedback::Column::EventId.eq(ev.id))
            .select_only()
            .column(feedback::Column::Rating)
            .into_tuple()
            .all(db)
            .await?;

        let participant_count = event_participant::Entity::find()
            .filter(event_participant::Column::EventId.eq(ev.id))
            .count(db)
            .await?;

        engagement.push(EventEngagement {
            event_id: ev.id,
            name: ev.name,
            average_rating: average_rating(&ratings),
            participant_count,
        });
    }

    Ok(engagement)
}

/// Best-rated events first, truncated to `n`.
pub fn top_by_rating(engagement: &[EventEngagement], n: usize) -> Vec<EventEngagement> {
    let mut ranked = engagement.to_vec();
    ranked.sort_by(|a, b| b.average_rating.total_cmp(&a.average_rating));
    ranked.truncate(n);
    ranked
}

/// Best-attended events first, truncated to `n`.
pub fn top_by_participation(engagement: &[EventEngagement], n: usize) -> Vec<EventEngagement> {
    let mut ranked = engagement.to_vec();
    ranked.sort_by(|a, b| b.participant_count.cmp(&a.participant_count));
    ranked.truncate(n);
    ranked
}
