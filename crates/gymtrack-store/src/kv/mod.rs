//! File-backed fallback key-value store

pub mod atomic;
pub mod file_store;

pub use file_store::FileKeyValueStore;
