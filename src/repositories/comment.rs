//! Comment repository for database operations
//!
//! This module provides the CommentRepository struct for the one query the
//! comments table supports beyond plain CRUD: listing comments for a room.
//! Keeping it on a dedicated type keeps the generic repository free of
//! entity-specific operations.

use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::models::comment::{self, Entity as Comment};

/// Repository for comment database operations
#[derive(Debug, Clone)]
pub struct CommentRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl CommentRepository {
    /// Creates a new CommentRepository instance.
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Lists all comments for a room, oldest first.
    ///
    /// A room id with no comments (including ids that do not exist) returns
    /// an empty vector, not an error.
    pub async fn find_by_room_id(&self, room_id: i32) -> Result<Vec<comment::Model>> {
        Ok(Comment::find()
            .filter(comment::Column::RoomId.eq(room_id))
            .order_by_asc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .all(&*self.db)
            .await?)
    }
}
