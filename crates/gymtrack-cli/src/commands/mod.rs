//! Subcommand implementations

pub mod exercise;
pub mod reset;
pub mod schedule;

use anyhow::{anyhow, bail};
use gymtrack_core::{Exercise, ExerciseStore};

/// Resolve a full ID or a unique ID prefix to a stored exercise ID
pub fn resolve_id(store: &ExerciseStore, raw: &str) -> anyhow::Result<String> {
    if store.exercise(raw).is_some() {
        return Ok(raw.to_string());
    }

    let matches: Vec<String> = store
        .all_exercises()
        .into_iter()
        .filter(|e| e.id.starts_with(raw))
        .map(|e| e.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(id.clone()),
        [] => Err(anyhow!("no exercise with ID {}", raw)),
        _ => bail!("ID prefix {} matches {} exercises", raw, matches.len()),
    }
}

pub fn format_exercise(exercise: &Exercise) -> String {
    format!(
        "{}  {}  {} kg x {}",
        exercise.id, exercise.name, exercise.last_weight, exercise.last_reps
    )
}
