/// In-memory record store
///
/// Keeps users and todos behind a single mutex, so the uniqueness check and
/// both inserts happen in one critical section. Used by tests and local demos.
///
/// Two switches simulate failures:
/// - [`MemoryRecordStore::set_fail_todo_inserts`]: the todo insert fails
///   after the user insert, exercising rollback
/// - [`MemoryRecordStore::set_unavailable`]: every operation fails
///
/// # Example
///
/// ```
/// use todo_shared::store::{MemoryRecordStore, RecordStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryRecordStore::new();
/// assert!(store.find_user_by_username("alice").await?.is_none());
/// # Ok(())
/// # }
/// ```

use super::{RecordStore, StoreError, StoreResult};
use crate::models::{
    todo::{CreateTodo, Todo},
    user::{CreateUser, User},
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

#[derive(Debug, Default)]
struct Tables {
    /// Keyed by username
    users: HashMap<String, User>,
    todos: Vec<Todo>,
}

/// Record store held entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    tables: Mutex<Tables>,
    fail_todo_inserts: AtomicBool,
    unavailable: AtomicBool,
}

impl MemoryRecordStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the todo insert of the next registrations fail
    pub fn set_fail_todo_inserts(&self, fail: bool) {
        self.fail_todo_inserts.store(fail, Ordering::SeqCst);
    }

    /// Makes every operation fail with `StoreError::Unavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored users
    pub fn user_count(&self) -> usize {
        self.lock().map(|t| t.users.len()).unwrap_or(0)
    }

    /// Number of stored todos across all users
    pub fn todo_count(&self) -> usize {
        self.lock().map(|t| t.todos.len()).unwrap_or(0)
    }

    /// Todos owned by `user_id`, in insertion order
    pub fn todos_for(&self, user_id: Uuid) -> Vec<Todo> {
        self.lock()
            .map(|t| {
                t.todos
                    .iter()
                    .filter(|todo| todo.user_id == user_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store marked unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create_user_with_todo(
        &self,
        user: CreateUser,
        todo: CreateTodo,
    ) -> StoreResult<(User, Todo)> {
        self.check_available()?;
        let mut tables = self.lock()?;

        if tables.users.contains_key(&user.username) {
            return Err(StoreError::DuplicateUsername(user.username));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            password_hash: user.password_hash,
            created_at: now,
        };
        tables.users.insert(user.username.clone(), user.clone());

        if self.fail_todo_inserts.load(Ordering::SeqCst) {
            tables.users.remove(&user.username);
            return Err(StoreError::Unavailable("todo insert failed".to_string()));
        }

        let todo = Todo {
            id: Uuid::new_v4(),
            task: todo.task,
            completed: false,
            user_id: user.id,
            created_at: now,
        };
        tables.todos.push(todo.clone());

        Ok((user, todo))
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        self.check_available()?;
        Ok(self.lock()?.users.get(username).cloned())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check_available()
    }
}
