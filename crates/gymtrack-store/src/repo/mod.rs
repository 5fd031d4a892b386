//! Repository layer for persisting the planner to SQLite
//!
//! `sqlite_repo` and `hydration` are synchronous row mappers; `durable`
//! wraps them in the async bulk adapter the sync bridge talks to.

pub mod durable;
pub mod hydration;
pub mod sqlite_repo;

pub use durable::{DbLocation, DurableStore, SqliteDurableStore};
pub use sqlite_repo::SqliteRepo;
