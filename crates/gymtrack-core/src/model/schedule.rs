use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::weekday::Weekday;

/// Weekly schedule: an ordered list of exercise IDs per weekday
///
/// Every weekday is always present. Within one day an ID appears at most
/// once; the same ID may appear on several days. Referential integrity with
/// the exercise set is maintained by the ops layer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Weekday, Vec<String>>", into = "BTreeMap<Weekday, Vec<String>>")]
pub struct Schedule {
    days: BTreeMap<Weekday, Vec<String>>,
}

impl Schedule {
    /// Create a schedule with all five days empty
    pub fn new() -> Self {
        Self {
            days: Weekday::ALL.into_iter().map(|d| (d, Vec::new())).collect(),
        }
    }

    /// IDs assigned to `day`, in assignment order
    pub fn day(&self, day: Weekday) -> &[String] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, day: Weekday, exercise_id: &str) -> bool {
        self.day(day).iter().any(|id| id == exercise_id)
    }

    /// Append `exercise_id` to `day` unless already present
    ///
    /// Returns true if the schedule changed.
    pub fn assign(&mut self, day: Weekday, exercise_id: &str) -> bool {
        let ids = self.days.entry(day).or_default();
        if ids.iter().any(|id| id == exercise_id) {
            return false;
        }
        ids.push(exercise_id.to_string());
        true
    }

    /// Remove `exercise_id` from `day`; returns true if it was present
    pub fn unassign(&mut self, day: Weekday, exercise_id: &str) -> bool {
        let ids = self.days.entry(day).or_default();
        let before = ids.len();
        ids.retain(|id| id != exercise_id);
        ids.len() != before
    }

    /// Remove `exercise_id` from every day; returns the number of days touched
    pub fn strip(&mut self, exercise_id: &str) -> usize {
        Weekday::ALL
            .into_iter()
            .filter(|day| self.unassign(*day, exercise_id))
            .count()
    }

    /// Replace a day's list, dropping duplicate IDs while keeping first occurrence order
    pub fn set_day(&mut self, day: Weekday, exercise_ids: Vec<String>) {
        let mut deduped: Vec<String> = Vec::with_capacity(exercise_ids.len());
        for id in exercise_ids {
            if !deduped.contains(&id) {
                deduped.push(id);
            }
        }
        self.days.insert(day, deduped);
    }

    /// Drop every ID for which `keep` returns false; returns how many were dropped
    pub fn retain_ids<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let mut dropped = 0;
        for ids in self.days.values_mut() {
            let before = ids.len();
            ids.retain(|id| keep(id));
            dropped += before - ids.len();
        }
        dropped
    }

    /// True when no day has any assignment
    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }

    /// Iterate days in week order
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        Weekday::ALL.into_iter().map(move |d| (d, self.day(d)))
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<Weekday, Vec<String>>> for Schedule {
    fn from(map: BTreeMap<Weekday, Vec<String>>) -> Self {
        let mut schedule = Schedule::new();
        for (day, ids) in map {
            schedule.set_day(day, ids);
        }
        schedule
    }
}

impl From<Schedule> for BTreeMap<Weekday, Vec<String>> {
    fn from(schedule: Schedule) -> Self {
        schedule.days
    }
}
