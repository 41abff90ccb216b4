//! Room entity model
//!
//! SeaORM entity for the rooms table, the primary catalog of bookable rooms.
//! Rooms declare the record-status capability; retired rooms stay in the
//! table with a non-active flag.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use sea_orm::prelude::DateTimeWithTimeZone;

use super::RecStatusEntity;

/// Room entity representing a bookable room
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    /// Surrogate primary key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Human-readable room name, unique across the table
    pub name: String,

    /// Building/floor location description
    pub location: String,

    /// Seating capacity
    pub capacity: i32,

    /// Optional free-form description
    pub description: Option<String>,

    /// Record-status flag; `"A"` means active
    pub rec_status: String,

    /// Timestamp when the room was created
    pub created_at: DateTimeWithTimeZone,

    /// Timestamp when the room was last updated
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl RecStatusEntity for Entity {
    fn rec_status_column() -> Self::Column {
        Column::RecStatus
    }
}
