use serde::{Deserialize, Serialize};

use super::exercise::Exercise;
use super::schedule::Schedule;

/// Full copy of the planner state, the unit exchanged with durable storage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Exercises ordered by ID
    pub exercises: Vec<Exercise>,
    pub schedule: Schedule,
}

impl Snapshot {
    pub fn new(exercises: Vec<Exercise>, schedule: Schedule) -> Self {
        Self {
            exercises,
            schedule,
        }
    }

    /// No exercises and no assignments on any day
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty() && self.schedule.is_empty()
    }
}
