/// Database layer
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool with a connectivity check
/// - `migrations`: Embedded schema migrations (`migrations/` in this crate)
///
/// Models are in the `models` module at crate root level.

pub mod migrations;
pub mod pool;
