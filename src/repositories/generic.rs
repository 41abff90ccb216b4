//! Generic repository for database operations
//!
//! This module provides the GenericRepository struct which encapsulates
//! SeaORM CRUD operations for any entity, plus active-record filtering for
//! entities that declare the record-status capability.

use anyhow::Result;
use sea_orm::sea_query::IntoCondition;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter,
};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::models::{REC_STATUS_ACTIVE, RecStatusEntity};

/// Repository providing CRUD operations for a single entity type.
///
/// Holds an injected connection pool and no other state; every operation
/// resolves independently against the store and commits as its own unit of
/// work. Query translation, change tracking, and transaction handling all
/// live in SeaORM.
pub struct GenericRepository<E: EntityTrait> {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
    entity: PhantomData<E>,
}

impl<E: EntityTrait> GenericRepository<E> {
    /// Creates a new repository over the given connection pool.
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Finds the entity whose primary key equals `id`.
    pub async fn get_by_id<K>(&self, id: K) -> Result<Option<E::Model>>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType> + Send,
    {
        Ok(E::find_by_id(id).one(&*self.db).await?)
    }

    /// Retrieves every entity in the table.
    ///
    /// Unbounded; intended only for small tables.
    pub async fn get_all(&self) -> Result<Vec<E::Model>> {
        Ok(E::find().all(&*self.db).await?)
    }

    /// Retrieves all entities matching a caller-supplied filter condition.
    ///
    /// The condition is handed to the store untouched and translated into a
    /// server-side query there.
    pub async fn find<F>(&self, filter: F) -> Result<Vec<E::Model>>
    where
        F: IntoCondition,
    {
        Ok(E::find().filter(filter).all(&*self.db).await?)
    }

    /// Inserts a single entity and returns the persisted model.
    pub async fn add<A>(&self, entity: A) -> Result<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        Ok(entity.insert(&*self.db).await?)
    }

    /// Inserts a batch of entities in one statement, returning the row count.
    ///
    /// The whole batch commits atomically: if the store rejects any element,
    /// none of them become visible. An empty batch is a no-op.
    pub async fn add_range<A, I>(&self, entities: I) -> Result<u64>
    where
        A: ActiveModelTrait<Entity = E>,
        I: IntoIterator<Item = A>,
        E::Model: IntoActiveModel<A>,
    {
        let mut models = entities.into_iter().peekable();
        if models.peek().is_none() {
            return Ok(0);
        }

        Ok(E::insert_many(models)
            .exec_without_returning(&*self.db)
            .await?)
    }

    /// Applies the set fields of `entity` to the row carrying its primary key.
    ///
    /// The primary key must be set; a key unknown to the store surfaces as
    /// the store's own error (`DbErr::RecordNotUpdated`).
    pub async fn update<A>(&self, entity: A) -> Result<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        Ok(entity.update(&*self.db).await?)
    }

    /// Deletes the row identified by `entity`, returning rows affected.
    pub async fn delete<A>(&self, entity: A) -> Result<u64>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    {
        let result = entity.delete(&*self.db).await?;
        Ok(result.rows_affected)
    }
}

impl<E: RecStatusEntity> GenericRepository<E> {
    /// Retrieves all entities whose record-status equals the active sentinel.
    ///
    /// Only entities implementing [`RecStatusEntity`] have this operation;
    /// for any other entity type the call does not compile.
    pub async fn get_active(&self) -> Result<Vec<E::Model>> {
        self.find(E::rec_status_column().eq(REC_STATUS_ACTIVE))
            .await
    }
}

impl<E: EntityTrait> Clone for GenericRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            entity: PhantomData,
        }
    }
}

impl<E: EntityTrait> fmt::Debug for GenericRepository<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericRepository")
            .field("entity", &std::any::type_name::<E>())
            .finish_non_exhaustive()
    }
}
