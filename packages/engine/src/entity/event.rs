use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub start_time: DateTimeUtc,
    /// Non-negative; validated at creation and re-checked whenever a
    /// schedule is derived. Lifecycle phase is never stored.
    pub duration_minutes: i32,
    pub location: String,

    /// Immutable after creation.
    pub organizer_id: i32,
    #[sea_orm(belongs_to, from = "organizer_id", to = "id")]
    pub organizer: BelongsTo<super::user::Entity>,

    #[sea_orm(has_many)]
    pub feedback: HasMany<super::feedback::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
