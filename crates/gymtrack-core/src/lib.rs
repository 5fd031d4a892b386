//! Gym Tracker Core - Canonical in-memory state for the weekly planner
//!
//! This crate provides the foundational data structures and operations for
//! the planner, including:
//! - Exercise, Weekday, and Schedule models
//! - Free-function mutation ops over a plain `Store` that keep the schedule
//!   referentially consistent with the exercise set
//! - Day queries (assigned / available exercises)
//! - `ExerciseStore`, the session state container with observers and
//!   self-persistence through a fallback key-value store
//! - The error and structured logging facilities shared by every crate

pub mod errors;
pub mod exercise_store;
pub mod logging_facility;
pub mod model;
pub mod observer;
pub mod ops;
pub mod persist;
pub mod queries;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, PlannerError, Result};
pub use exercise_store::ExerciseStore;
pub use model::{Exercise, ExerciseDraft, ExercisePatch, Schedule, Snapshot, Weekday};
pub use observer::{Observers, Subscription};
pub use ops::Store;
pub use persist::{KeyValueStore, MemoryKeyValueStore, FALLBACK_STORAGE_KEY};
