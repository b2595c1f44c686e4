/// Todo model and database operations
///
/// Only the pieces registration needs live here: every new account gets one
/// welcome todo, written in the same transaction as the user row.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE todos (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     task TEXT NOT NULL,
///     completed BOOLEAN NOT NULL DEFAULT FALSE,
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use uuid::Uuid;

/// Text of the todo created for every new account
pub const WELCOME_TODO: &str = "Hello :) Add your first todo!";

/// A todo item owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    /// Unique todo ID
    pub id: Uuid,

    /// Todo text
    pub task: String,

    /// Whether the todo is done
    pub completed: bool,

    /// Owning user
    pub user_id: Uuid,

    /// When the todo was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a todo
#[derive(Debug, Clone)]
pub struct CreateTodo {
    /// Owning user
    pub user_id: Uuid,

    /// Todo text
    pub task: String,
}

impl CreateTodo {
    /// The welcome todo for a freshly registered user
    pub fn welcome(user_id: Uuid) -> Self {
        Self {
            user_id,
            task: WELCOME_TODO.to_string(),
        }
    }
}

impl Todo {
    /// Inserts a todo
    ///
    /// # Errors
    ///
    /// Fails with a foreign key violation if `user_id` does not exist.
    pub async fn create<'e, E>(executor: E, data: CreateTodo) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (task, user_id)
            VALUES ($1, $2)
            RETURNING id, task, completed, user_id, created_at
            "#,
        )
        .bind(data.task)
        .bind(data.user_id)
        .fetch_one(executor)
        .await
    }

    /// Lists a user's todos, oldest first
    pub async fn list_by_user<'e, E>(executor: E, user_id: Uuid) -> Result<Vec<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, task, completed, user_id, created_at
            FROM todos
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await
    }
}
