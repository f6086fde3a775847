use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One feedback row per attendee per event. The surrogate key cannot express
/// that invariant, so a unique (event_id, user_id) index is created at
/// bootstrap (see `seed::ensure_indexes`) and the engine maps the violation
/// to a duplicate-feedback outcome.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub event_id: i32,
    pub user_id: i32,
    #[sea_orm(belongs_to, from = "event_id", to = "id")]
    pub event: BelongsTo<super::event::Entity>,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: BelongsTo<super::user::Entity>,

    pub rating: i16,
    pub comment: Option<String>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
