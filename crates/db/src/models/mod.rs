//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - Serializable response shapes that are safe to send to clients
//! - DTOs for inserts and updates

pub mod follow;
pub mod like;
pub mod user;
