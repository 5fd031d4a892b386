//! Startup synchronization and write-through persistence

pub mod bridge;

pub use bridge::{SyncBridge, SyncStatus};
