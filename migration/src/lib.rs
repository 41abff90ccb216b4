//! Database migrations for the RoomFinder data layer.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_07_01_000100_create_rooms;
mod m2025_07_01_000200_create_comments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_07_01_000100_create_rooms::Migration),
            Box::new(m2025_07_01_000200_create_comments::Migration),
        ]
    }
}
