use gymtrack_core::{ExerciseDraft, ExerciseStore};

/// Create a new empty ExerciseStore for testing
#[allow(dead_code)]
pub fn new_store() -> ExerciseStore {
    ExerciseStore::new()
}

#[allow(dead_code)]
pub fn bench_press() -> ExerciseDraft {
    ExerciseDraft::new("Bench Press", 60.0, 10)
}

#[allow(dead_code)]
pub fn squats() -> ExerciseDraft {
    ExerciseDraft::new("Squats", 80.0, 12)
}

#[allow(dead_code)]
pub fn deadlifts() -> ExerciseDraft {
    ExerciseDraft::new("Deadlifts", 100.0, 8)
}

/// IDs of a list of exercises, in order
#[allow(dead_code)]
pub fn ids(exercises: &[gymtrack_core::Exercise]) -> Vec<String> {
    exercises.iter().map(|e| e.id.clone()).collect()
}
