use sea_orm::sea_query::{
    Index, IndexCreateStatement, MysqlQueryBuilder, PostgresQueryBuilder, SqliteQueryBuilder,
};
use sea_orm::{ConnectionTrait, DbBackend, DbErr};
use tracing::info;

use crate::entity::{event, event_participant, feedback};

fn index_sql(backend: DbBackend, stmt: &IndexCreateStatement) -> String {
    match backend {
        DbBackend::MySql => stmt.to_string(MysqlQueryBuilder),
        DbBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
        _ => stmt.to_string(PostgresQueryBuilder),
    }
}

/// Ensure required database indexes exist.
///
/// Schema sync covers single-column unique constraints, but the two
/// relationship invariants here need composite or secondary indexes created
/// manually on startup.
pub async fn ensure_indexes<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    // One feedback row per (event, user): the feedback table has a surrogate
    // primary key, so the at-most-once invariant lives in this unique index.
    // The engine maps violations to the duplicate-feedback outcome.
    let unique_feedback = Index::create()
        .if_not_exists()
        .name("idx_feedback_event_user")
        .table(feedback::Entity)
        .col(feedback::Column::EventId)
        .col(feedback::Column::UserId)
        .unique()
        .to_owned();

    // Indexed relationship lookups instead of full scans:
    // "events this user attends" and "events this user organizes".
    let participant_by_user = Index::create()
        .if_not_exists()
        .name("idx_event_participant_user")
        .table(event_participant::Entity)
        .col(event_participant::Column::UserId)
        .to_owned();

    let event_by_organizer = Index::create()
        .if_not_exists()
        .name("idx_event_organizer")
        .table(event::Entity)
        .col(event::Column::OrganizerId)
        .to_owned();

    for stmt in [&unique_feedback, &participant_by_user, &event_by_organizer] {
        db.execute_unprepared(&index_sql(backend, stmt)).await?;
    }

    info!("Ensured feedback and relationship indexes exist");
    Ok(())
}
