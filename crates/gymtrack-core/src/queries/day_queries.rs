//! Read-side queries over the schedule
//!
//! All queries return owned copies so callers never hold a borrow into the
//! store across a mutation.

use crate::model::{Exercise, Weekday};
use crate::ops::Store;

/// Exercises assigned to `day`, in assignment order
///
/// IDs that no longer resolve are skipped.
pub fn exercises_by_day(store: &Store, day: Weekday) -> Vec<Exercise> {
    store
        .schedule()
        .day(day)
        .iter()
        .filter_map(|id| store.get_exercise(id).ok())
        .cloned()
        .collect()
}

/// Exercises not assigned to `day`, in ID order
pub fn available_exercises_for_day(store: &Store, day: Weekday) -> Vec<Exercise> {
    let assigned = store.schedule().day(day);
    store
        .list_exercises()
        .into_iter()
        .filter(|e| !assigned.contains(&e.id))
        .cloned()
        .collect()
}

/// Every exercise in ID (creation) order
pub fn all_exercises(store: &Store) -> Vec<Exercise> {
    store.list_exercises().into_iter().cloned().collect()
}

/// Number of resolvable exercises on `day`
pub fn exercise_count(store: &Store, day: Weekday) -> usize {
    store
        .schedule()
        .day(day)
        .iter()
        .filter(|id| store.exercise_exists(id))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExerciseDraft;
    use crate::ops::{exercise_ops, schedule_ops};

    #[test]
    fn test_by_day_and_available_partition() {
        let mut store = Store::new();
        let a = exercise_ops::add_exercise(&mut store, ExerciseDraft::new("A", 1.0, 1)).unwrap();
        let b = exercise_ops::add_exercise(&mut store, ExerciseDraft::new("B", 2.0, 2)).unwrap();
        schedule_ops::assign_exercise_to_day(&mut store, &b, Weekday::Tue).unwrap();

        let on_day: Vec<String> = exercises_by_day(&store, Weekday::Tue)
            .into_iter()
            .map(|e| e.id)
            .collect();
        let available: Vec<String> = available_exercises_for_day(&store, Weekday::Tue)
            .into_iter()
            .map(|e| e.id)
            .collect();

        assert_eq!(on_day, vec![b]);
        assert_eq!(available, vec![a]);
        assert_eq!(exercise_count(&store, Weekday::Tue), 1);
        assert_eq!(exercise_count(&store, Weekday::Mon), 0);
    }

    #[test]
    fn test_by_day_preserves_assignment_order() {
        let mut store = Store::new();
        let a = exercise_ops::add_exercise(&mut store, ExerciseDraft::new("A", 1.0, 1)).unwrap();
        let b = exercise_ops::add_exercise(&mut store, ExerciseDraft::new("B", 2.0, 2)).unwrap();
        schedule_ops::assign_exercise_to_day(&mut store, &b, Weekday::Fri).unwrap();
        schedule_ops::assign_exercise_to_day(&mut store, &a, Weekday::Fri).unwrap();

        let names: Vec<String> = exercises_by_day(&store, Weekday::Fri)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
