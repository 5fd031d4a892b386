mod common;

use common::{bench_press, deadlifts, ids, new_store, squats};
use gymtrack_core::Weekday;

#[test]
fn test_bench_press_on_monday() {
    let mut store = new_store();
    let other = store.add_exercise(squats()).unwrap();
    let a = store.add_exercise(bench_press()).unwrap();

    store.assign_exercise_to_day(&a, Weekday::Mon);

    let monday = store.exercises_by_day(Weekday::Mon);
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].id, a);
    assert_eq!(monday[0].name, "Bench Press");
    assert_eq!(monday[0].last_weight, 60.0);
    assert_eq!(monday[0].last_reps, 10);

    let available = ids(&store.available_exercises_for_day(Weekday::Mon));
    assert!(!available.contains(&a));
    assert!(available.contains(&other));
}

#[test]
fn test_delete_one_of_two_on_friday() {
    let mut store = new_store();
    let a = store.add_exercise(bench_press()).unwrap();
    let b = store.add_exercise(squats()).unwrap();
    store.assign_exercise_to_day(&a, Weekday::Fri);
    store.assign_exercise_to_day(&b, Weekday::Fri);

    store.delete_exercise(&a);

    assert_eq!(ids(&store.exercises_by_day(Weekday::Fri)), vec![b.clone()]);
    assert_eq!(ids(&store.all_exercises()), vec![b]);
}

#[test]
fn test_assign_is_idempotent() {
    let mut store = new_store();
    let a = store.add_exercise(deadlifts()).unwrap();

    store.assign_exercise_to_day(&a, Weekday::Wed);
    store.assign_exercise_to_day(&a, Weekday::Wed);

    assert_eq!(ids(&store.exercises_by_day(Weekday::Wed)), vec![a]);
    assert_eq!(store.exercise_count(Weekday::Wed), 1);
}

#[test]
fn test_same_exercise_on_multiple_days() {
    let mut store = new_store();
    let a = store.add_exercise(bench_press()).unwrap();
    store.assign_exercise_to_day(&a, Weekday::Mon);
    store.assign_exercise_to_day(&a, Weekday::Thu);

    assert_eq!(store.exercise_count(Weekday::Mon), 1);
    assert_eq!(store.exercise_count(Weekday::Thu), 1);
    assert_eq!(store.exercise_count(Weekday::Tue), 0);
}

#[test]
fn test_assign_unknown_exercise_is_ignored() {
    let mut store = new_store();
    store.assign_exercise_to_day("ghost", Weekday::Tue);
    assert!(store.snapshot().schedule.is_empty());
}

#[test]
fn test_remove_from_day_leaves_other_days() {
    let mut store = new_store();
    let a = store.add_exercise(bench_press()).unwrap();
    store.assign_exercise_to_day(&a, Weekday::Mon);
    store.assign_exercise_to_day(&a, Weekday::Fri);

    store.remove_exercise_from_day(&a, Weekday::Mon);
    store.remove_exercise_from_day(&a, Weekday::Mon);

    assert!(store.exercises_by_day(Weekday::Mon).is_empty());
    assert_eq!(ids(&store.exercises_by_day(Weekday::Fri)), vec![a.clone()]);
    // removal from a day never deletes the exercise itself
    assert!(store.exercise(&a).is_some());
}

#[test]
fn test_reset_clears_everything() {
    let mut store = new_store();
    let a = store.add_exercise(bench_press()).unwrap();
    store.assign_exercise_to_day(&a, Weekday::Mon);

    store.reset();

    assert!(store.is_empty());
    assert_eq!(store.snapshot().schedule.iter().count(), 5);
}
