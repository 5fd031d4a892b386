pub mod day_queries;

pub use day_queries::{all_exercises, available_exercises_for_day, exercise_count, exercises_by_day};
