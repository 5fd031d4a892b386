//! Reset command

use anyhow::bail;
use clap::Args;
use gymtrack_core::ExerciseStore;

#[derive(Debug, Args)]
pub struct ResetArgs {
    /// Confirm deleting every exercise
    #[arg(long)]
    pub yes: bool,
}

pub fn execute(store: &mut ExerciseStore, args: ResetArgs) -> anyhow::Result<()> {
    if !args.yes {
        bail!("reset deletes every exercise; rerun with --yes to confirm");
    }
    store.reset();
    println!("Planner reset");
    Ok(())
}
