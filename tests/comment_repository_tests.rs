//! Integration tests for the comment repository against in-memory SQLite.

use anyhow::Result;
use chrono::{TimeZone, Utc};
use sea_orm::Set;

use roomfinder_data::models::{Comment, Room, comment};
use roomfinder_data::repositories::{CommentRepository, GenericRepository};

#[path = "test_utils/mod.rs"]
mod test_utils;
use test_utils::{comment_fixture, room_fixture, setup_test_db_arc};

#[tokio::test]
async fn find_by_room_id_returns_only_matching_comments() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let rooms = GenericRepository::<Room>::new(db.clone());
    let comments = GenericRepository::<Comment>::new(db.clone());
    let repo = CommentRepository::new(db.clone());

    let aurora = rooms.add(room_fixture("Aurora", "A")).await?;
    let borealis = rooms.add(room_fixture("Borealis", "A")).await?;

    comments
        .add(comment_fixture(aurora.id, "ada", "great light"))
        .await?;
    comments
        .add(comment_fixture(borealis.id, "grace", "too cold"))
        .await?;
    comments
        .add(comment_fixture(aurora.id, "linus", "projector broken"))
        .await?;

    let found = repo.find_by_room_id(aurora.id).await?;
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|c| c.room_id == aurora.id));
    Ok(())
}

#[tokio::test]
async fn find_by_room_id_orders_oldest_first() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let rooms = GenericRepository::<Room>::new(db.clone());
    let comments = GenericRepository::<Comment>::new(db.clone());
    let repo = CommentRepository::new(db.clone());

    let room = rooms.add(room_fixture("Aurora", "A")).await?;

    let mut late = comment_fixture(room.id, "ada", "second");
    late.created_at = Set(Utc.with_ymd_and_hms(2025, 7, 2, 12, 0, 0).unwrap().into());
    let mut early = comment_fixture(room.id, "grace", "first");
    early.created_at = Set(Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap().into());

    comments.add(late).await?;
    comments.add(early).await?;

    let found = repo.find_by_room_id(room.id).await?;
    let bodies: Vec<_> = found.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["first", "second"]);
    Ok(())
}

#[tokio::test]
async fn find_by_room_id_without_matches_is_empty_not_an_error() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let rooms = GenericRepository::<Room>::new(db.clone());
    let repo = CommentRepository::new(db.clone());

    let silent = rooms.add(room_fixture("Silent", "A")).await?;

    assert!(repo.find_by_room_id(silent.id).await?.is_empty());
    // Unknown, zero, and negative ids are empty results as well.
    assert!(repo.find_by_room_id(9_999).await?.is_empty());
    assert!(repo.find_by_room_id(0).await?.is_empty());
    assert!(repo.find_by_room_id(-1).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn deleting_a_room_cascades_to_its_comments() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let rooms = GenericRepository::<Room>::new(db.clone());
    let comments = GenericRepository::<Comment>::new(db.clone());
    let repo = CommentRepository::new(db.clone());

    let room = rooms.add(room_fixture("Ephemeral", "A")).await?;
    comments
        .add(comment_fixture(room.id, "ada", "soon gone"))
        .await?;

    rooms
        .delete(roomfinder_data::models::room::ActiveModel::from(
            room.clone(),
        ))
        .await?;

    assert!(repo.find_by_room_id(room.id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn generic_repository_also_covers_comment_crud() -> Result<()> {
    let db = setup_test_db_arc().await?;
    let rooms = GenericRepository::<Room>::new(db.clone());
    let comments = GenericRepository::<Comment>::new(db.clone());

    let room = rooms.add(room_fixture("Aurora", "A")).await?;
    let created = comments
        .add(comment_fixture(room.id, "ada", "works generically"))
        .await?;

    let found = comments.get_by_id(created.id).await?;
    assert_eq!(found, Some(created.clone()));

    comments
        .delete(comment::ActiveModel::from(created.clone()))
        .await?;
    assert!(comments.get_by_id(created.id).await?.is_none());
    Ok(())
}
