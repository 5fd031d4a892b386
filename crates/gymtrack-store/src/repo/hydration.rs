//! Hydration layer - loads the persisted planner back into a Snapshot
//!
//! Exercises come back in ID order and days in week order, so two loads of
//! the same database produce identical snapshots.

#![allow(clippy::result_large_err)]

use crate::errors::{transaction_error, Result};
use crate::repo::sqlite_repo::{parse_ids, SqliteRepo};
use gymtrack_core::model::{Schedule, Snapshot, Weekday};
use rusqlite::Connection;

/// Load the weekly schedule
///
/// Missing day rows read as empty days. A row whose day code is not a
/// weekday is reported rather than silently dropped.
pub fn load_schedule(conn: &Connection) -> Result<Schedule> {
    let mut schedule = Schedule::new();

    for (code, json) in SqliteRepo::list_day_rows(conn)? {
        let day: Weekday = code
            .parse()
            .map_err(|e: gymtrack_core::PlannerError| transaction_error("load_schedule", e.to_string()))?;
        schedule.set_day(day, parse_ids("load_schedule", &json)?);
    }

    Ok(schedule)
}

/// Load every exercise and the schedule
///
/// A database that was never written yields an empty snapshot.
pub fn load_snapshot(conn: &Connection) -> Result<Snapshot> {
    let exercises = SqliteRepo::list_exercises(conn)?;
    let schedule = load_schedule(conn)?;
    Ok(Snapshot::new(exercises, schedule))
}
