/// API route handlers
///
/// - `health`: Health check endpoint
/// - `auth`: Authentication endpoints (register, login)

pub mod auth;
pub mod health;
