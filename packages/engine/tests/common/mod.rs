#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

use engine::entity::{event, event_participant, feedback, user};
use engine::models::event::NewEvent;
use engine::models::user::NewUser;

/// Fresh in-memory SQLite store with the full schema and the same index
/// bootstrap the production path runs.
pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory SQLite");

    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    for stmt in [
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(event::Entity),
        schema.create_table_from_entity(event_participant::Entity),
        schema.create_table_from_entity(feedback::Entity),
    ] {
        db.execute(&stmt)
            .await
            .expect("Failed to create table");
    }

    engine::seed::ensure_indexes(&db)
        .await
        .expect("Failed to create indexes");

    db
}

/// An arbitrary fixed reference instant; tests offset from it with
/// [`minutes`].
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 18, 0, 0).unwrap()
}

pub fn minutes(m: i64) -> Duration {
    Duration::minutes(m)
}

pub async fn seed_user(db: &DatabaseConnection, username: &str) -> user::Model {
    engine::users::create_user(
        db,
        NewUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            phone_number: "0123456789".to_string(),
            password_hash: format!("$argon2id$stub-{username}"),
        },
        t0() - minutes(24 * 60),
    )
    .await
    .expect("Failed to seed user")
}

pub async fn seed_event(
    db: &DatabaseConnection,
    organizer_id: i32,
    name: &str,
    start_time: DateTime<Utc>,
    duration_minutes: i32,
) -> event::Model {
    engine::events::create_event(
        db,
        organizer_id,
        NewEvent {
            name: name.to_string(),
            description: "Seeded event".to_string(),
            start_time,
            duration_minutes,
            location: "Main hall".to_string(),
        },
        t0() - minutes(24 * 60),
    )
    .await
    .expect("Failed to seed event")
}

/// Count the feedback rows stored for a (event, user) pair.
pub async fn feedback_rows(db: &DatabaseConnection, event_id: i32, user_id: i32) -> usize {
    engine::feedback::feedback_for(db, event_id)
        .await
        .expect("Failed to list feedback")
        .into_iter()
        .filter(|f| f.user_id == user_id)
        .count()
}
