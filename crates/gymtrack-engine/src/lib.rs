//! Gym Tracker Engine - Orchestration layer
//!
//! Wires the in-memory `ExerciseStore` to durable SQLite storage:
//! - `config`: layered `PlannerConfig` (defaults, TOML file, environment)
//! - `sync`: the startup loader and write-through `SyncBridge`
//! - `session`: `PlannerSession`, one store plus its bridge

pub mod config;
pub mod session;
pub mod sync;

pub use config::PlannerConfig;
pub use session::PlannerSession;
pub use sync::{SyncBridge, SyncStatus};
