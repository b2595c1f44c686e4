/// Database models
///
/// # Models
///
/// - `user`: Accounts with unique usernames and Argon2id password hashes
/// - `todo`: Per-user todo items (registration creates the first one)

pub mod todo;
pub mod user;
