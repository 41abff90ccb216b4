//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM
//! operations for database entities: a generic CRUD repository usable with
//! any entity, and the dedicated comment repository for room-scoped queries.

pub mod comment;
pub mod generic;

pub use comment::CommentRepository;
pub use generic::GenericRepository;
