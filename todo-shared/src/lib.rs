//! # Todo Shared Library
//!
//! Authentication core and persistence for the todo API.
//!
//! ## Module Organization
//!
//! - `auth`: Password hashing and session tokens
//! - `db`: Connection pool and migrations
//! - `models`: Database models (users, todos)
//! - `store`: Record store trait with Postgres and in-memory implementations
//! - `service`: Registration and login

pub mod auth;
pub mod db;
pub mod models;
pub mod service;
pub mod store;

/// Current version of the shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
