use super::store::Store;
use crate::errors::Result;
use crate::model::Weekday;

/// Assign an exercise to a day
///
/// Appends the ID to the end of the day's list unless it is already there.
///
/// # Returns
/// `true` if the schedule changed, `false` if the ID was already assigned
///
/// # Errors
/// * `ExerciseNotFound` - If the exercise doesn't exist (the schedule must
///   only reference existing exercises)
pub fn assign_exercise_to_day(store: &mut Store, exercise_id: &str, day: Weekday) -> Result<bool> {
    store.get_exercise(exercise_id)?;
    Ok(store.schedule.assign(day, exercise_id))
}

/// Remove an exercise from a day
///
/// Absent IDs are fine. Returns `true` if the ID was present.
pub fn remove_exercise_from_day(store: &mut Store, exercise_id: &str, day: Weekday) -> bool {
    store.schedule.unassign(day, exercise_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PlannerError;
    use crate::model::ExerciseDraft;
    use crate::ops::exercise_ops::add_exercise;

    #[test]
    fn test_assign_unknown_exercise_fails() {
        let mut store = Store::new();
        let result = assign_exercise_to_day(&mut store, "ghost", Weekday::Mon);
        assert!(matches!(result, Err(PlannerError::ExerciseNotFound { .. })));
        assert!(store.schedule().is_empty());
    }

    #[test]
    fn test_assign_twice_keeps_single_entry() {
        let mut store = Store::new();
        let id = add_exercise(&mut store, ExerciseDraft::new("Row", 40.0, 10)).unwrap();

        assert!(assign_exercise_to_day(&mut store, &id, Weekday::Wed).unwrap());
        assert!(!assign_exercise_to_day(&mut store, &id, Weekday::Wed).unwrap());
        assert_eq!(store.schedule().day(Weekday::Wed).len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = Store::new();
        assert!(!remove_exercise_from_day(&mut store, "ghost", Weekday::Fri));
    }
}
