//! Exercise commands: add, edit, delete, list

use anyhow::bail;
use clap::Args;
use gymtrack_core::{ExerciseDraft, ExercisePatch, ExerciseStore};

use super::{format_exercise, resolve_id};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Exercise name
    pub name: String,

    /// Last weight in kilograms
    #[arg(short, long, default_value_t = 0.0)]
    pub weight: f64,

    /// Last repetition count
    #[arg(short, long, default_value_t = 0)]
    pub reps: u32,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Exercise ID or unique prefix
    pub id: String,

    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short, long)]
    pub weight: Option<f64>,

    #[arg(short, long)]
    pub reps: Option<u32>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Exercise ID or unique prefix
    pub id: String,
}

pub fn add(store: &mut ExerciseStore, args: AddArgs) -> anyhow::Result<()> {
    let id = store.add_exercise(ExerciseDraft::new(args.name, args.weight, args.reps))?;
    println!("{}", id);
    Ok(())
}

pub fn edit(store: &mut ExerciseStore, args: EditArgs) -> anyhow::Result<()> {
    let id = resolve_id(store, &args.id)?;

    let mut patch = ExercisePatch::new();
    if let Some(name) = args.name {
        patch = patch.with_name(name);
    }
    if let Some(weight) = args.weight {
        patch = patch.with_last_weight(weight);
    }
    if let Some(reps) = args.reps {
        patch = patch.with_last_reps(reps);
    }
    if patch.is_empty() {
        bail!("nothing to change: pass --name, --weight or --reps");
    }

    store.update_exercise(&id, patch)?;
    if let Some(exercise) = store.exercise(&id) {
        println!("{}", format_exercise(&exercise));
    }
    Ok(())
}

pub fn delete(store: &mut ExerciseStore, args: DeleteArgs) -> anyhow::Result<()> {
    let id = resolve_id(store, &args.id)?;
    store.delete_exercise(&id);
    println!("Deleted {}", id);
    Ok(())
}

pub fn list(store: &ExerciseStore) -> anyhow::Result<()> {
    let exercises = store.all_exercises();
    if exercises.is_empty() {
        println!("No exercises yet");
    }
    for exercise in &exercises {
        println!("{}", format_exercise(exercise));
    }
    Ok(())
}
