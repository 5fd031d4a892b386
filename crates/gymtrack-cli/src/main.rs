//! Gym Tracker CLI
//!
//! Command-line front end for the weekly exercise planner

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gymtrack_core::logging_facility;
use gymtrack_engine::{PlannerConfig, PlannerSession};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "gymtrack")]
#[command(about = "Gym Tracker - plan exercises across the working week", long_about = None)]
struct Cli {
    /// Configuration file (default: ./gymtrack.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add an exercise and print its ID
    Add(commands::exercise::AddArgs),
    /// Change an exercise's name, weight or reps
    Edit(commands::exercise::EditArgs),
    /// Delete an exercise and remove it from every day
    Delete(commands::exercise::DeleteArgs),
    /// List every exercise
    List,
    /// Assign an exercise to a day
    Assign(commands::schedule::DayEntryArgs),
    /// Remove an exercise from a day
    Unassign(commands::schedule::DayEntryArgs),
    /// Show the exercises assigned to a day
    Day(commands::schedule::DayArgs),
    /// Show the exercises not yet assigned to a day
    Available(commands::schedule::DayArgs),
    /// Show the whole week
    Week,
    /// Delete all exercises and clear every day
    Reset(commands::reset::ResetArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = PlannerConfig::load(cli.config.as_deref())?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    logging_facility::init(config.log_profile);

    let mut session = PlannerSession::open(&config).await;
    if let Some(err) = &session.status().error {
        eprintln!(
            "Warning: durable storage unavailable, changes are kept in the fallback store only ({})",
            err
        );
    }

    let store = session.store_mut();
    let result = match cli.command {
        Commands::Add(args) => commands::exercise::add(store, args),
        Commands::Edit(args) => commands::exercise::edit(store, args),
        Commands::Delete(args) => commands::exercise::delete(store, args),
        Commands::List => commands::exercise::list(store),
        Commands::Assign(args) => commands::schedule::assign(store, args),
        Commands::Unassign(args) => commands::schedule::unassign(store, args),
        Commands::Day(args) => commands::schedule::day(store, args),
        Commands::Available(args) => commands::schedule::available(store, args),
        Commands::Week => commands::schedule::week(store),
        Commands::Reset(args) => commands::reset::execute(store, args),
    };

    session.close().await;
    result
}
