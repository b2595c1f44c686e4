/// Record store abstraction
///
/// The auth service talks to persistence only through [`RecordStore`]. The
/// store is handed to the service at construction, so tests can swap in
/// [`MemoryRecordStore`] while the server uses [`PgRecordStore`].
///
/// # Contract
///
/// Implementations must:
/// 1. Enforce username uniqueness, including under concurrent registrations
/// 2. Create a user and its first todo as one atomic unit: either both rows
///    exist afterwards or neither does
/// 3. Report a taken username as [`StoreError::DuplicateUsername`]

use crate::models::{
    todo::{CreateTodo, Todo},
    user::{CreateUser, User},
};
use async_trait::async_trait;

pub mod memory;
pub mod postgres;

pub use memory::MemoryRecordStore;
pub use postgres::PgRecordStore;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Another user already has this username
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    /// Database-level failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Store cannot serve requests
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence capability used by the auth service
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Creates `user` and then `todo` for the new user's ID, atomically
    ///
    /// `todo.user_id` is overwritten with the ID the store assigns.
    async fn create_user_with_todo(&self, user: CreateUser, todo: CreateTodo)
        -> StoreResult<(User, Todo)>;

    /// Looks a user up by exact username
    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Checks that the store is reachable
    async fn ping(&self) -> StoreResult<()>;
}
