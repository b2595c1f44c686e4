/// PostgreSQL-backed record store
///
/// Registration runs in one transaction. If the todo insert fails the
/// transaction is dropped without commit and sqlx rolls it back, so no
/// orphaned user row survives. Username uniqueness comes from the
/// `users_username_key` constraint.

use super::{RecordStore, StoreError, StoreResult};
use crate::db::pool;
use crate::models::{
    todo::{CreateTodo, Todo},
    user::{CreateUser, User},
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

/// Record store over a sqlx Postgres pool
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    /// Wraps an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Maps a unique violation on insert to `DuplicateUsername`
fn map_user_insert_error(err: sqlx::Error, username: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return StoreError::DuplicateUsername(username.to_string());
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn create_user_with_todo(
        &self,
        user: CreateUser,
        mut todo: CreateTodo,
    ) -> StoreResult<(User, Todo)> {
        let username = user.username.clone();
        let mut tx = self.pool.begin().await?;

        let user = User::create(&mut *tx, user)
            .await
            .map_err(|e| map_user_insert_error(e, &username))?;

        todo.user_id = user.id;
        let todo = Todo::create(&mut *tx, todo).await?;

        tx.commit().await?;

        debug!(user_id = %user.id, todo_id = %todo.id, "Committed user and welcome todo");
        Ok((user, todo))
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(User::find_by_username(&self.pool, username).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(pool::health_check(&self.pool).await?)
    }
}
