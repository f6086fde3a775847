mod common;

use crate::common::*;
use engine::error::EngineError;
use engine::events::{
    self, all_events, archived_events, find_event, organized_events, update_event,
};
use engine::models::event::{NewEvent, UpdateEvent};
use engine::participation;

#[tokio::test]
async fn event_names_are_unique() {
    let db = setup_db().await;
    let organizer = seed_user(&db, "organizer").await;
    seed_event(&db, organizer.id, "Rust meetup", t0(), 60).await;

    let dup = events::create_event(
        &db,
        organizer.id,
        NewEvent {
            name: "Rust meetup".into(),
            description: "Second attempt".into(),
            start_time: t0(),
            duration_minutes: 30,
            location: "Elsewhere".into(),
        },
        t0() - minutes(60),
    )
    .await;
    assert!(matches!(dup, Err(EngineError::NameTaken)));
    assert_eq!(all_events(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn negative_duration_is_a_validation_error() {
    let db = setup_db().await;
    let organizer = seed_user(&db, "organizer").await;

    let res = events::create_event(
        &db,
        organizer.id,
        NewEvent {
            name: "Backwards event".into(),
            description: "Runs in reverse".into(),
            start_time: t0(),
            duration_minutes: -30,
            location: "Nowhere".into(),
        },
        t0() - minutes(60),
    )
    .await;
    assert!(matches!(res, Err(EngineError::Validation(_))));
    assert!(all_events(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_requires_an_existing_organizer() {
    let db = setup_db().await;

    let res = events::create_event(
        &db,
        4242,
        NewEvent {
            name: "Ghost event".into(),
            description: "No organizer".into(),
            start_time: t0(),
            duration_minutes: 60,
            location: "Nowhere".into(),
        },
        t0() - minutes(60),
    )
    .await;
    assert!(matches!(res, Err(EngineError::NotFound(_))));
}

#[tokio::test]
async fn only_the_organizer_may_update() {
    let db = setup_db().await;
    let organizer = seed_user(&db, "organizer").await;
    let stranger = seed_user(&db, "stranger").await;
    let event = seed_event(&db, organizer.id, "Rust meetup", t0(), 60).await;

    let patch = UpdateEvent {
        location: Some("Moved".into()),
        ..Default::default()
    };
    let res = update_event(&db, &event, stranger.id, patch).await;
    assert!(matches!(res, Err(EngineError::Unauthorized)));

    // Nothing changed.
    let stored = find_event(&db, event.id).await.unwrap();
    assert_eq!(stored.location, "Main hall");
}

#[tokio::test]
async fn organizer_patch_updates_only_named_fields() {
    let db = setup_db().await;
    let organizer = seed_user(&db, "organizer").await;
    let event = seed_event(&db, organizer.id, "Rust meetup", t0(), 60).await;

    let patch = UpdateEvent {
        location: Some("Room 5".into()),
        duration_minutes: Some(120),
        ..Default::default()
    };
    let updated = update_event(&db, &event, organizer.id, patch).await.unwrap();

    assert_eq!(updated.location, "Room 5");
    assert_eq!(updated.duration_minutes, 120);
    assert_eq!(updated.name, "Rust meetup");
    assert_eq!(updated.start_time, t0());
}

#[tokio::test]
async fn empty_patch_returns_the_event_unchanged() {
    let db = setup_db().await;
    let organizer = seed_user(&db, "organizer").await;
    let event = seed_event(&db, organizer.id, "Rust meetup", t0(), 60).await;

    let unchanged = update_event(&db, &event, organizer.id, UpdateEvent::default())
        .await
        .unwrap();
    assert_eq!(unchanged, event);
}

#[tokio::test]
async fn patching_duration_to_negative_is_rejected() {
    let db = setup_db().await;
    let organizer = seed_user(&db, "organizer").await;
    let event = seed_event(&db, organizer.id, "Rust meetup", t0(), 60).await;

    let patch = UpdateEvent {
        duration_minutes: Some(-1),
        ..Default::default()
    };
    let res = update_event(&db, &event, organizer.id, patch).await;
    assert!(matches!(res, Err(EngineError::Validation(_))));
}

#[tokio::test]
async fn delete_is_organizer_gated_and_cascades() {
    let db = setup_db().await;
    let organizer = seed_user(&db, "organizer").await;
    let alice = seed_user(&db, "alice").await;
    let event = seed_event(&db, organizer.id, "Rust meetup", t0(), 60).await;

    participation::register(&db, &event, alice.id, t0() - minutes(10))
        .await
        .unwrap();

    let res = events::delete_event(&db, &event, alice.id).await;
    assert!(matches!(res, Err(EngineError::Unauthorized)));
    assert!(find_event(&db, event.id).await.is_ok());

    events::delete_event(&db, &event, organizer.id).await.unwrap();
    assert!(matches!(
        find_event(&db, event.id).await,
        Err(EngineError::NotFound(_))
    ));
    assert!(
        participation::attendees_of(&db, event.id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn organized_events_lists_only_the_callers() {
    let db = setup_db().await;
    let organizer = seed_user(&db, "organizer").await;
    let other = seed_user(&db, "other").await;
    seed_event(&db, organizer.id, "Mine", t0(), 60).await;
    seed_event(&db, other.id, "Theirs", t0() + minutes(60), 60).await;

    let mine = organized_events(&db, organizer.id).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].name, "Mine");
}

#[tokio::test]
async fn archive_includes_events_the_moment_they_end() {
    let db = setup_db().await;
    let organizer = seed_user(&db, "organizer").await;
    let event = seed_event(&db, organizer.id, "Rust meetup", t0(), 60).await;

    let end = t0() + minutes(60);
    assert!(archived_events(&db, end - minutes(1)).await.unwrap().is_empty());

    let archived = archived_events(&db, end).await.unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].id, event.id);
}
