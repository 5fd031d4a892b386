use uuid::Uuid;

use super::store::Store;
use crate::errors::{PlannerError, Result};
use crate::model::{Exercise, ExerciseDraft, ExercisePatch};

/// Create a new exercise from a draft
///
/// Generates a UUID v7 for the exercise ID. IDs are time-ordered, so the
/// store's ID order is creation order.
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `draft` - Name, last weight, and last reps
///
/// # Returns
/// The ID of the newly created exercise
///
/// # Errors
/// * `InvalidName` - If the name is empty or whitespace-only
/// * `InvalidWeight` - If the weight is negative or non-finite
pub fn add_exercise(store: &mut Store, draft: ExerciseDraft) -> Result<String> {
    draft.validate()?;

    let mut id = Uuid::now_v7().to_string();
    while store.exercise_exists(&id) {
        id = Uuid::now_v7().to_string();
    }

    store.insert_exercise(Exercise::new(id.clone(), draft));
    Ok(id)
}

/// Read an exercise by ID
///
/// # Errors
/// * `ExerciseNotFound` - If the exercise doesn't exist
pub fn read_exercise<'a>(store: &'a Store, id: &str) -> Result<&'a Exercise> {
    store.get_exercise(id)
}

/// Replace any subset of name / last weight / last reps
///
/// The ID is resolved first, so an unknown ID reports `ExerciseNotFound` even
/// when the patch is also invalid. A rejected patch leaves the exercise
/// untouched.
///
/// # Errors
/// * `ExerciseNotFound` - If the exercise doesn't exist
/// * `InvalidName` / `InvalidWeight` - If a present field is invalid
pub fn update_exercise(store: &mut Store, id: &str, patch: ExercisePatch) -> Result<()> {
    let exercise = store.get_exercise_mut(id)?;
    patch.validate()?;
    exercise.apply_patch(patch);
    Ok(())
}

/// Delete an exercise and strip its ID from every day
///
/// Both effects happen under the same `&mut Store` borrow, so no reader can
/// observe the exercise gone while its ID still sits in the schedule.
///
/// # Returns
/// The removed exercise
///
/// # Errors
/// * `ExerciseNotFound` - If the exercise doesn't exist
pub fn delete_exercise(store: &mut Store, id: &str) -> Result<Exercise> {
    let removed = store
        .exercises
        .remove(id)
        .ok_or_else(|| PlannerError::ExerciseNotFound {
            exercise_id: id.to_string(),
        })?;
    store.schedule.strip(id);
    Ok(removed)
}
