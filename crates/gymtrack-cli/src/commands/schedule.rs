//! Weekly schedule commands

use clap::Args;
use gymtrack_core::{Exercise, ExerciseStore, PlannerError, Weekday};

use super::{format_exercise, resolve_id};

#[derive(Debug, Args)]
pub struct DayEntryArgs {
    /// Exercise ID or unique prefix
    pub id: String,

    /// Day code: mon, tue, wed, thu or fri
    #[arg(value_parser = parse_day)]
    pub day: Weekday,
}

#[derive(Debug, Args)]
pub struct DayArgs {
    /// Day code: mon, tue, wed, thu or fri
    #[arg(value_parser = parse_day)]
    pub day: Weekday,
}

fn parse_day(raw: &str) -> Result<Weekday, String> {
    raw.parse().map_err(|e: PlannerError| e.to_string())
}

pub fn assign(store: &mut ExerciseStore, args: DayEntryArgs) -> anyhow::Result<()> {
    let id = resolve_id(store, &args.id)?;
    store.assign_exercise_to_day(&id, args.day);
    println!("Assigned {} to {}", id, args.day.full_name());
    Ok(())
}

pub fn unassign(store: &mut ExerciseStore, args: DayEntryArgs) -> anyhow::Result<()> {
    let id = resolve_id(store, &args.id)?;
    store.remove_exercise_from_day(&id, args.day);
    println!("Removed {} from {}", id, args.day.full_name());
    Ok(())
}

pub fn day(store: &ExerciseStore, args: DayArgs) -> anyhow::Result<()> {
    print_day(args.day, &store.exercises_by_day(args.day));
    Ok(())
}

pub fn available(store: &ExerciseStore, args: DayArgs) -> anyhow::Result<()> {
    let exercises = store.available_exercises_for_day(args.day);
    println!("Available for {} ({})", args.day.full_name(), exercises.len());
    for exercise in &exercises {
        println!("  {}", format_exercise(exercise));
    }
    Ok(())
}

pub fn week(store: &ExerciseStore) -> anyhow::Result<()> {
    for day in Weekday::ALL {
        print_day(day, &store.exercises_by_day(day));
    }
    Ok(())
}

fn print_day(day: Weekday, exercises: &[Exercise]) {
    println!("{} ({})", day.full_name(), exercises.len());
    for exercise in exercises {
        println!("  {}", format_exercise(exercise));
    }
}
