//! Gym Tracker Store - Persistence layer
//!
//! Provides:
//! - SQLite schema with a checksummed migrations framework
//! - Repository functions mapping exercises and day lists to tables
//! - `DurableStore`, the async bulk load/save adapter used by the sync bridge
//! - `FileKeyValueStore`, the file-backed fallback blob store

pub mod db;
pub mod errors;
pub mod kv;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use kv::FileKeyValueStore;
pub use repo::{DurableStore, SqliteDurableStore};
