//! # RoomFinder Data Layer
//!
//! This library provides the data-access layer for the RoomFinder service:
//! SeaORM entity models, a generic CRUD repository, and the dedicated
//! comment repository, together with configuration, logging, and database
//! pool management.

pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod repositories;
pub use migration;
