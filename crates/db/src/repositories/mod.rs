//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod follow_repo;
pub mod like_repo;
pub mod user_repo;

pub use follow_repo::FollowRepo;
pub use like_repo::LikeRepo;
pub use user_repo::UserRepo;
