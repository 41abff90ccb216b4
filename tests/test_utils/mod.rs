//! Test utilities for database testing.
//!
//! Sets up in-memory SQLite databases with migrations applied, plus fixture
//! helpers for rooms and comments.

use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Set, Statement};
use std::sync::Arc;

use roomfinder_data::models::{comment, room};

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;

    // SQLite leaves foreign keys off by default; turn them on so cascade
    // deletes and constraint violations behave like Postgres in tests.
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_string(),
    ))
    .await?;

    Ok(db)
}

/// Sets up an in-memory SQLite database and returns it behind an Arc.
#[allow(dead_code)]
pub async fn setup_test_db_arc() -> Result<Arc<DatabaseConnection>> {
    let db = setup_test_db().await?;
    Ok(Arc::new(db))
}

/// Builds a room active model with the given name and record status.
#[allow(dead_code)]
pub fn room_fixture(name: &str, rec_status: &str) -> room::ActiveModel {
    room::ActiveModel {
        name: Set(name.to_string()),
        location: Set("Building 1, Floor 2".to_string()),
        capacity: Set(4),
        rec_status: Set(rec_status.to_string()),
        ..Default::default()
    }
}

/// Builds a comment active model attached to the given room.
#[allow(dead_code)]
pub fn comment_fixture(room_id: i32, author: &str, body: &str) -> comment::ActiveModel {
    comment::ActiveModel {
        room_id: Set(room_id),
        author: Set(author.to_string()),
        body: Set(body.to_string()),
        ..Default::default()
    }
}
