use std::collections::BTreeMap;

use crate::errors::{PlannerError, Result};
use crate::model::{Exercise, Schedule, Snapshot};

/// In-memory store for exercises and the weekly schedule
///
/// Plain data, no interior mutability. Exercises are keyed by ID in a
/// `BTreeMap`; UUID v7 IDs sort by creation time, so iteration order is
/// creation order. Mutations go through `exercise_ops` / `schedule_ops`,
/// which keep the schedule referentially consistent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pub(crate) exercises: BTreeMap<String, Exercise>,
    pub(crate) schedule: Schedule,
}

impl Store {
    /// Create a new empty Store with all five days empty
    pub fn new() -> Self {
        Self {
            exercises: BTreeMap::new(),
            schedule: Schedule::new(),
        }
    }

    /// Build a store from a snapshot
    ///
    /// Schedule entries whose ID does not resolve to an exercise are pruned so
    /// the referential invariant holds from the first read.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let exercises: BTreeMap<String, Exercise> = snapshot
            .exercises
            .into_iter()
            .map(|e| (e.id.clone(), e))
            .collect();
        let mut schedule = snapshot.schedule;
        let dropped = schedule.retain_ids(|id| exercises.contains_key(id));
        if dropped > 0 {
            tracing::warn!(dropped, "pruned schedule entries without an exercise");
        }
        Self {
            exercises,
            schedule,
        }
    }

    /// Copy out the full state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.exercises.values().cloned().collect(), self.schedule.clone())
    }

    /// Get an exercise by ID
    ///
    /// # Errors
    ///
    /// Returns `ExerciseNotFound` if the exercise doesn't exist.
    pub fn get_exercise(&self, id: &str) -> Result<&Exercise> {
        self.exercises
            .get(id)
            .ok_or_else(|| PlannerError::ExerciseNotFound {
                exercise_id: id.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns `ExerciseNotFound` if the exercise doesn't exist.
    pub fn get_exercise_mut(&mut self, id: &str) -> Result<&mut Exercise> {
        self.exercises
            .get_mut(id)
            .ok_or_else(|| PlannerError::ExerciseNotFound {
                exercise_id: id.to_string(),
            })
    }

    /// List all exercises in ID order
    pub fn list_exercises(&self) -> Vec<&Exercise> {
        self.exercises.values().collect()
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Insert an exercise, replacing any with the same ID
    ///
    /// Used by the ops layer and test helpers; bypasses validation.
    pub fn insert_exercise(&mut self, exercise: Exercise) {
        self.exercises.insert(exercise.id.clone(), exercise);
    }

    pub fn exercise_exists(&self, id: &str) -> bool {
        self.exercises.contains_key(id)
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty() && self.schedule.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExerciseDraft, Weekday};

    #[test]
    fn test_new_store() {
        let store = Store::new();
        assert_eq!(store.list_exercises().len(), 0);
        assert!(store.schedule().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_nonexistent_exercise() {
        let store = Store::new();
        let result = store.get_exercise("nonexistent");
        assert!(matches!(result, Err(PlannerError::ExerciseNotFound { .. })));
    }

    #[test]
    fn test_from_snapshot_prunes_dangling_ids() {
        let bench = Exercise::new("a".to_string(), ExerciseDraft::new("Bench Press", 60.0, 10));
        let mut schedule = Schedule::new();
        schedule.assign(Weekday::Mon, "a");
        schedule.assign(Weekday::Mon, "ghost");

        let store = Store::from_snapshot(Snapshot::new(vec![bench], schedule));
        assert_eq!(store.schedule().day(Weekday::Mon), ["a".to_string()]);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut store = Store::new();
        store.insert_exercise(Exercise::new(
            "a".to_string(),
            ExerciseDraft::new("Squats", 80.0, 12),
        ));
        store.schedule.assign(Weekday::Tue, "a");

        let rebuilt = Store::from_snapshot(store.snapshot());
        assert_eq!(rebuilt, store);
    }
}
