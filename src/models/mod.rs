//! # Data Models
//!
//! SeaORM entity models for the RoomFinder schema, plus the record-status
//! capability shared by entities that distinguish active from retired rows.

use sea_orm::EntityTrait;

pub mod comment;
pub mod room;

pub use comment::Entity as Comment;
pub use room::Entity as Room;

/// Sentinel value marking a record as active. Any other value is inactive.
///
/// The single-character literal is a stored contract and must not change.
pub const REC_STATUS_ACTIVE: &str = "A";

/// Capability for entities that carry a record-status column.
///
/// Implementing this trait is what makes
/// [`GenericRepository::get_active`](crate::repositories::GenericRepository::get_active)
/// available for an entity; there is no runtime check.
pub trait RecStatusEntity: EntityTrait {
    /// The column holding the record-status flag.
    fn rec_status_column() -> Self::Column;
}
