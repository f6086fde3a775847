use chrono::{DateTime, Utc};
use sea_orm::*;
use tracing::instrument;

use crate::entity::user;
use crate::error::EngineError;
use crate::models::user::{NewUser, validate_new_user};

/// Create a user record. The unique constraints on username and email are
/// the authority; a violation on insert is mapped to the matching conflict
/// so concurrent signups cannot both succeed.
#[instrument(skip(db, req), fields(username = %req.username))]
pub async fn create_user<C: ConnectionTrait>(
    db: &C,
    req: NewUser,
    now: DateTime<Utc>,
) -> Result<user::Model, EngineError> {
    validate_new_user(&req)?;

    let new_user = user::ActiveModel {
        username: Set(req.username.trim().to_string()),
        email: Set(req.email.trim().to_string()),
        phone_number: Set(req.phone_number.trim().to_string()),
        password_hash: Set(req.password_hash),
        created_at: Set(now),
        ..Default::default()
    };

    new_user.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Signup race: unique constraint caught on insert");
            if detail.contains("email") {
                EngineError::EmailTaken
            } else {
                EngineError::UsernameTaken
            }
        }
        _ => EngineError::from(e),
    })
}

/// Look up a user by ID. The engine never fabricates a default entity.
pub async fn find_user<C: ConnectionTrait>(db: &C, id: i32) -> Result<user::Model, EngineError> {
    user::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(EngineError::NotFound("User"))
}
