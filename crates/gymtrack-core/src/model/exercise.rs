use serde::{Deserialize, Serialize};

use crate::errors::{PlannerError, Result};

/// Exercise - a named lift with the most recently recorded load and reps
///
/// Field names serialize in camelCase (`lastWeight`, `lastReps`) so the
/// persisted blob and the SQLite JSON columns share one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Unique identifier (UUID v7), immutable after creation
    pub id: String,

    /// Display label, never empty
    pub name: String,

    /// Last load in kilograms, fractional allowed
    pub last_weight: f64,

    /// Last repetition count
    pub last_reps: u32,
}

impl Exercise {
    /// Build an exercise from a validated draft and an assigned ID
    pub fn new(id: String, draft: ExerciseDraft) -> Self {
        Self {
            id,
            name: draft.name,
            last_weight: draft.last_weight,
            last_reps: draft.last_reps,
        }
    }

    /// Overwrite the fields present in `patch`
    ///
    /// The patch must already be validated; see [`ExercisePatch::validate`].
    pub fn apply_patch(&mut self, patch: ExercisePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(weight) = patch.last_weight {
            self.last_weight = weight;
        }
        if let Some(reps) = patch.last_reps {
            self.last_reps = reps;
        }
    }
}

/// Input for creating an exercise (everything except the ID)
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    pub name: String,
    pub last_weight: f64,
    pub last_reps: u32,
}

impl ExerciseDraft {
    pub fn new(name: impl Into<String>, last_weight: f64, last_reps: u32) -> Self {
        Self {
            name: name.into(),
            last_weight,
            last_reps,
        }
    }

    /// Check the name and weight constraints
    ///
    /// # Errors
    /// * `InvalidName` - If the name is empty or whitespace-only
    /// * `InvalidWeight` - If the weight is negative, NaN, or infinite
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_weight(self.last_weight)
    }
}

/// Partial update of an exercise; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub last_weight: Option<f64>,
    pub last_reps: Option<u32>,
}

impl ExercisePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_last_weight(mut self, weight: f64) -> Self {
        self.last_weight = Some(weight);
        self
    }

    pub fn with_last_reps(mut self, reps: u32) -> Self {
        self.last_reps = Some(reps);
        self
    }

    /// True if the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.last_weight.is_none() && self.last_reps.is_none()
    }

    /// Validate only the fields that are present
    ///
    /// # Errors
    /// * `InvalidName` - If a replacement name is empty or whitespace-only
    /// * `InvalidWeight` - If a replacement weight is negative or non-finite
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(weight) = self.last_weight {
            validate_weight(weight)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PlannerError::InvalidName {
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

fn validate_weight(weight: f64) -> Result<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(PlannerError::InvalidWeight { weight });
    }
    Ok(())
}
