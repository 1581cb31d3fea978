//! File-backed SQLite user-account store.
//!
//! [`UserStore`] owns the database pool and mediates every read and write;
//! [`User`] is the account record it persists. Lookups and updates go
//! through the enumerated [`UserFilter`]/[`UserUpdate`] field sets.

pub mod config;
pub mod db;
pub mod error;
pub mod users;

pub use config::AppConfig;
pub use db::UserStore;
pub use error::StoreError;
pub use users::password::hash_password;
pub use users::{User, UserFilter, UserUpdate};
