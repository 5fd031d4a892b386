// File-backed fallback store

use std::sync::Arc;

use gymtrack_core::persist::{KeyValueStore, FALLBACK_STORAGE_KEY};
use gymtrack_core::{ExerciseDraft, ExerciseStore, Weekday};
use gymtrack_store::FileKeyValueStore;
use tempfile::TempDir;

#[test]
fn test_missing_key_reads_none() {
    let temp_dir = TempDir::new().unwrap();
    let kv = FileKeyValueStore::new(temp_dir.path().join("fallback"));

    assert_eq!(kv.get(FALLBACK_STORAGE_KEY).unwrap(), None);
}

#[test]
fn test_set_get_remove() {
    let temp_dir = TempDir::new().unwrap();
    let kv = FileKeyValueStore::new(temp_dir.path().join("fallback"));

    kv.set("k", "v1").unwrap();
    kv.set("k", "v2").unwrap();
    assert_eq!(kv.get("k").unwrap().as_deref(), Some("v2"));

    kv.remove("k").unwrap();
    assert_eq!(kv.get("k").unwrap(), None);
    kv.remove("k").unwrap();
}

#[test]
fn test_store_state_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("fallback");

    let id = {
        let mut store = ExerciseStore::with_fallback(Arc::new(FileKeyValueStore::new(&dir)));
        let id = store
            .add_exercise(ExerciseDraft::new("Bench Press", 60.0, 10))
            .unwrap();
        store.assign_exercise_to_day(&id, Weekday::Mon);
        id
    };

    let restarted = ExerciseStore::with_fallback(Arc::new(FileKeyValueStore::new(&dir)));
    let monday = restarted.exercises_by_day(Weekday::Mon);
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].id, id);
    assert_eq!(monday[0].name, "Bench Press");
}
