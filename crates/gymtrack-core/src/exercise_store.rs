//! Session state container
//!
//! `ExerciseStore` owns the canonical [`Store`] for one session and wraps the
//! free-function ops with the container policy:
//! - `ExerciseNotFound` from update / delete / assign is absorbed as a no-op
//! - after every change the full state is written to the fallback key-value
//!   store (if one is attached) and then pushed to every observer
//! - calls that change nothing (idempotent assign, absent remove) neither
//!   persist nor notify

use std::sync::Arc;

use crate::errors::{PlannerError, Result};
use crate::model::{Exercise, ExerciseDraft, ExercisePatch, Snapshot, Weekday};
use crate::observer::{Observers, Subscription};
use crate::ops::{exercise_ops, schedule_ops, Store};
use crate::persist::{decode_blob, encode_blob, KeyValueStore, FALLBACK_STORAGE_KEY};
use crate::queries;

/// In-memory planner state with observers and fallback self-persistence
pub struct ExerciseStore {
    state: Store,
    observers: Observers,
    fallback: Option<Arc<dyn KeyValueStore>>,
}

impl ExerciseStore {
    /// Create an empty store with no fallback persistence
    pub fn new() -> Self {
        Self {
            state: Store::new(),
            observers: Observers::new(),
            fallback: None,
        }
    }

    /// Create a store that self-persists through `fallback`
    ///
    /// Any blob already stored under the fallback key is loaded. A blob that
    /// cannot be read or decoded is logged and the store starts empty.
    pub fn with_fallback(fallback: Arc<dyn KeyValueStore>) -> Self {
        let state = match fallback.get(FALLBACK_STORAGE_KEY) {
            Ok(Some(raw)) => match decode_blob(&raw) {
                Ok(snapshot) => {
                    tracing::debug!(
                        exercise_count = snapshot.exercises.len(),
                        "loaded fallback state"
                    );
                    Store::from_snapshot(snapshot)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring unreadable fallback blob");
                    Store::new()
                }
            },
            Ok(None) => Store::new(),
            Err(err) => {
                tracing::warn!(error = %err, "fallback store unavailable at startup");
                Store::new()
            }
        };

        Self {
            state,
            observers: Observers::new(),
            fallback: Some(fallback),
        }
    }

    // ===== Mutations =====

    /// Add an exercise and return its new ID
    ///
    /// # Errors
    /// * `InvalidName` / `InvalidWeight` - The draft is rejected and nothing changes
    pub fn add_exercise(&mut self, draft: ExerciseDraft) -> Result<String> {
        let id = exercise_ops::add_exercise(&mut self.state, draft)?;
        self.commit();
        Ok(id)
    }

    /// Replace any subset of an exercise's fields
    ///
    /// An unknown ID is a silent no-op.
    ///
    /// # Errors
    /// * `InvalidName` / `InvalidWeight` - The patch is rejected and nothing changes
    pub fn update_exercise(&mut self, id: &str, patch: ExercisePatch) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }
        match exercise_ops::update_exercise(&mut self.state, id, patch) {
            Ok(()) => {
                self.commit();
                Ok(())
            }
            Err(err) => absorb_not_found("update_exercise", id, err),
        }
    }

    /// Delete an exercise and remove it from every day
    ///
    /// An unknown ID is a silent no-op.
    pub fn delete_exercise(&mut self, id: &str) {
        match exercise_ops::delete_exercise(&mut self.state, id) {
            Ok(_) => self.commit(),
            Err(err) => {
                absorb_not_found("delete_exercise", id, err).ok();
            }
        }
    }

    /// Append an exercise to a day (idempotent)
    ///
    /// An unknown ID is a silent no-op, so the schedule never references a
    /// missing exercise.
    pub fn assign_exercise_to_day(&mut self, id: &str, day: Weekday) {
        match schedule_ops::assign_exercise_to_day(&mut self.state, id, day) {
            Ok(true) => self.commit(),
            Ok(false) => {}
            Err(err) => {
                absorb_not_found("assign_exercise_to_day", id, err).ok();
            }
        }
    }

    /// Remove an exercise from a day; absent IDs are ignored
    pub fn remove_exercise_from_day(&mut self, id: &str, day: Weekday) {
        if schedule_ops::remove_exercise_from_day(&mut self.state, id, day) {
            self.commit();
        }
    }

    /// Overwrite the whole state with `snapshot`
    pub fn replace(&mut self, snapshot: Snapshot) {
        self.state = Store::from_snapshot(snapshot);
        self.commit();
    }

    /// Re-initialize to no exercises and five empty days
    pub fn reset(&mut self) {
        self.state = Store::new();
        self.commit();
    }

    // ===== Queries =====

    pub fn exercise(&self, id: &str) -> Option<Exercise> {
        self.state.get_exercise(id).ok().cloned()
    }

    pub fn exercises_by_day(&self, day: Weekday) -> Vec<Exercise> {
        queries::exercises_by_day(&self.state, day)
    }

    pub fn available_exercises_for_day(&self, day: Weekday) -> Vec<Exercise> {
        queries::available_exercises_for_day(&self.state, day)
    }

    pub fn all_exercises(&self) -> Vec<Exercise> {
        queries::all_exercises(&self.state)
    }

    pub fn exercise_count(&self, day: Weekday) -> usize {
        queries::exercise_count(&self.state, day)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    // ===== Observers =====

    /// Receive the settled snapshot after every change
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn commit(&self) {
        let snapshot = self.state.snapshot();
        if let Some(fallback) = &self.fallback {
            persist_fallback(fallback.as_ref(), &snapshot);
        }
        self.observers.notify(&snapshot);
    }
}

impl Default for ExerciseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExerciseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExerciseStore")
            .field("state", &self.state)
            .field("observers", &self.observers)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

fn absorb_not_found(op: &str, id: &str, err: PlannerError) -> Result<()> {
    if err.is_not_found() {
        tracing::debug!(op, exercise_id = id, "ignoring mutation of unknown exercise");
        return Ok(());
    }
    Err(err)
}

fn persist_fallback(fallback: &dyn KeyValueStore, snapshot: &Snapshot) {
    let written = encode_blob(snapshot)
        .map_err(crate::errors::ExError::from)
        .and_then(|raw| fallback.set(FALLBACK_STORAGE_KEY, &raw));
    if let Err(err) = written {
        tracing::warn!(error = %err, "fallback persistence failed");
    }
}
