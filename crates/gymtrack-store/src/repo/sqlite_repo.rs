//! SQLite repository implementation
//!
//! Maps exercises to the `exercises` table and day lists to the `schedule`
//! table (one row per weekday, IDs as a JSON array).

#![allow(clippy::result_large_err)]

use crate::errors::{corrupt_value, from_rusqlite, Result};
use gymtrack_core::model::{Exercise, Snapshot, Weekday};
use rusqlite::{Connection, OptionalExtension, Row, Transaction};

const EXERCISE_COLUMNS: &str = "id, name, last_weight, last_reps";

/// SQLite repository for exercises and the weekly schedule
pub struct SqliteRepo;

impl SqliteRepo {
    /// Upsert an exercise within a transaction
    pub fn persist_exercise_tx(tx: &Transaction, exercise: &Exercise) -> Result<()> {
        tx.execute(
            "INSERT INTO exercises (id, name, last_weight, last_reps)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                last_weight = excluded.last_weight,
                last_reps = excluded.last_reps",
            rusqlite::params![
                exercise.id,
                exercise.name,
                exercise.last_weight,
                exercise.last_reps,
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Upsert one day's ID list within a transaction
    pub fn persist_day_tx(tx: &Transaction, day: Weekday, exercise_ids: &[String]) -> Result<()> {
        let ids_json = serde_json::to_string(exercise_ids)
            .map_err(|e| corrupt_value("persist_day", e.to_string()))?;

        tx.execute(
            "INSERT INTO schedule (day, exercise_ids) VALUES (?1, ?2)
             ON CONFLICT(day) DO UPDATE SET exercise_ids = excluded.exercise_ids",
            rusqlite::params![day.code(), ids_json],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Delete every exercise and schedule row within a transaction
    pub fn clear_tx(tx: &Transaction) -> Result<()> {
        tx.execute("DELETE FROM exercises", []).map_err(from_rusqlite)?;
        tx.execute("DELETE FROM schedule", []).map_err(from_rusqlite)?;
        Ok(())
    }

    /// Replace the full contents of both tables with `snapshot`
    ///
    /// Clear and rewrite share one transaction. Any failure drops the
    /// transaction uncommitted, which rolls back to the previous contents.
    pub fn replace_all(conn: &mut Connection, snapshot: &Snapshot) -> Result<()> {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        Self::clear_tx(&tx)?;
        for exercise in &snapshot.exercises {
            Self::persist_exercise_tx(&tx, exercise)?;
        }
        for (day, ids) in snapshot.schedule.iter() {
            Self::persist_day_tx(&tx, day, ids)?;
        }

        tx.commit().map_err(from_rusqlite)?;
        Ok(())
    }

    /// Get an exercise from the database by ID
    pub fn get_exercise(conn: &Connection, exercise_id: &str) -> Result<Option<Exercise>> {
        let sql = format!("SELECT {EXERCISE_COLUMNS} FROM exercises WHERE id = ?");
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;

        stmt.query_row([exercise_id], exercise_from_row)
            .optional()
            .map_err(from_rusqlite)
    }

    /// List all exercises ordered by ID
    pub fn list_exercises(conn: &Connection) -> Result<Vec<Exercise>> {
        let sql = format!("SELECT {EXERCISE_COLUMNS} FROM exercises ORDER BY id");
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;

        let exercises = stmt
            .query_map([], exercise_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(exercises)
    }

    /// Exercises with exactly this name, served by `idx_exercises_name`
    pub fn find_exercises_by_name(conn: &Connection, name: &str) -> Result<Vec<Exercise>> {
        let sql = format!("SELECT {EXERCISE_COLUMNS} FROM exercises WHERE name = ? ORDER BY id");
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;

        let exercises = stmt
            .query_map([name], exercise_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(exercises)
    }

    /// The stored ID list for `day`; an absent row reads as empty
    pub fn get_day(conn: &Connection, day: Weekday) -> Result<Vec<String>> {
        let raw: Option<String> = conn
            .query_row(
                "SELECT exercise_ids FROM schedule WHERE day = ?",
                [day.code()],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?;

        match raw {
            None => Ok(Vec::new()),
            Some(json) => parse_ids("get_day", &json),
        }
    }

    /// Every stored `(day code, raw JSON)` pair ordered by day code
    pub fn list_day_rows(conn: &Connection) -> Result<Vec<(String, String)>> {
        let mut stmt = conn
            .prepare("SELECT day, exercise_ids FROM schedule ORDER BY day")
            .map_err(from_rusqlite)?;

        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }
}

fn exercise_from_row(row: &Row<'_>) -> rusqlite::Result<Exercise> {
    Ok(Exercise {
        id: row.get(0)?,
        name: row.get(1)?,
        last_weight: row.get(2)?,
        last_reps: row.get(3)?,
    })
}

pub(crate) fn parse_ids(op: &str, json: &str) -> Result<Vec<String>> {
    serde_json::from_str(json).map_err(|e| corrupt_value(op, format!("invalid id list: {e}")))
}
