/// Registration and login
///
/// [`AuthService`] composes the three collaborators of the auth flow:
///
/// ```text
/// register: hash password → create user + welcome todo (atomic) → sign token
/// login:    find user → verify password → sign token
/// ```
///
/// The service holds no mutable state; concurrent requests share it behind an
/// `Arc`. Errors come back as [`AuthError`] and the HTTP layer decides what
/// the caller sees.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use todo_shared::service::AuthService;
/// use todo_shared::store::MemoryRecordStore;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let service = AuthService::new(
///     Arc::new(MemoryRecordStore::new()),
///     "test-secret-key-at-least-32-bytes-long",
/// );
///
/// let token = service.register("alice", "pw1").await?;
/// let again = service.login("alice", "pw1").await?;
/// # Ok(())
/// # }
/// ```

use crate::auth::{
    jwt::{self, Claims, JwtError},
    password::{self, PasswordError},
};
use crate::models::{todo::CreateTodo, user::CreateUser};
use crate::store::{RecordStore, StoreError};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Error type for auth operations
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No user with the supplied username
    #[error("User not found")]
    UserNotFound,

    /// Password did not match the stored hash
    #[error("Invalid password")]
    InvalidPassword,

    /// Persistence failed (including duplicate usernames)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Hashing or verification failed
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Token signing failed
    #[error(transparent)]
    Token(#[from] JwtError),
}

impl AuthError {
    /// Whether the failure is infrastructure-side rather than the caller's
    pub fn is_internal(&self) -> bool {
        !matches!(self, AuthError::UserNotFound | AuthError::InvalidPassword)
    }
}

/// Orchestrates credential storage, verification and token issuance
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn RecordStore>,
    jwt_secret: Arc<str>,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("jwt_secret", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl AuthService {
    /// Creates a service over `store`, signing tokens with `jwt_secret`
    pub fn new(store: Arc<dyn RecordStore>, jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            jwt_secret: jwt_secret.into(),
        }
    }

    /// The injected store
    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Registers a new account and returns a session token
    ///
    /// The user row and its welcome todo are written atomically. A taken
    /// username fails with `AuthError::Store(StoreError::DuplicateUsername)`
    /// and leaves the existing account untouched.
    pub async fn register(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let password_hash = password::hash_password_async(password.to_string()).await?;

        let (user, todo) = self
            .store
            .create_user_with_todo(
                CreateUser {
                    username: username.to_string(),
                    password_hash,
                },
                CreateTodo::welcome(Uuid::nil()),
            )
            .await?;

        info!(user_id = %user.id, username = %user.username, todo_id = %todo.id, "Registered user");

        self.issue_token(user.id)
    }

    /// Checks credentials and returns a session token
    ///
    /// Unknown usernames and wrong passwords are reported separately.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .store
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| {
                debug!(username = %username, "Login for unknown user");
                AuthError::UserNotFound
            })?;

        let valid =
            password::verify_password_async(password.to_string(), user.password_hash.clone())
                .await?;
        if !valid {
            warn!(user_id = %user.id, "Login with invalid password");
            return Err(AuthError::InvalidPassword);
        }

        info!(user_id = %user.id, "User logged in");

        self.issue_token(user.id)
    }

    fn issue_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        Ok(jwt::create_token(&Claims::new(user_id), &self.jwt_secret)?)
    }
}
