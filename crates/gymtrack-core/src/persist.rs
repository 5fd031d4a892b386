//! Fallback persistence
//!
//! An always-available key-value string store that holds the whole planner
//! state as one JSON blob under [`FALLBACK_STORAGE_KEY`]. The blob shape is
//! `{"state":{"exercises":{id: Exercise},"schedule":{day:[id]}},"version":0}`.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::errors::{ExError, ExErrorKind, PlannerError};
use crate::model::{Exercise, Schedule, Snapshot};

/// Namespace key of the fallback blob
pub const FALLBACK_STORAGE_KEY: &str = "gym-tracker-storage";

/// Current blob format version
pub const FALLBACK_VERSION: u32 = 0;

/// Simple string key-value store used as the fallback persistence path
///
/// Implementations must be cheap to call on every mutation.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    /// Returns an `Io` or `Serialization` error if the backing medium fails.
    fn get(&self, key: &str) -> std::result::Result<Option<String>, ExError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns an `Io` error if the value could not be written.
    fn set(&self, key: &str, value: &str) -> std::result::Result<(), ExError>;

    /// Delete `key` if present
    ///
    /// # Errors
    /// Returns an `Io` error if the value could not be removed.
    fn remove(&self, key: &str) -> std::result::Result<(), ExError>;
}

/// Process-local key-value store; contents vanish with the process
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> ExError {
    ExError::new(ExErrorKind::Internal).with_message("memory key-value store lock poisoned")
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> std::result::Result<Option<String>, ExError> {
        let values = self.values.lock().map_err(|_| poisoned())?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> std::result::Result<(), ExError> {
        let mut values = self.values.lock().map_err(|_| poisoned())?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> std::result::Result<(), ExError> {
        let mut values = self.values.lock().map_err(|_| poisoned())?;
        values.remove(key);
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct PersistedState {
    exercises: BTreeMap<String, Exercise>,
    #[serde(default)]
    schedule: Schedule,
}

#[derive(Serialize, Deserialize)]
struct PersistedBlob {
    state: PersistedState,
    #[serde(default)]
    version: u32,
}

/// Encode a snapshot as the fallback blob
///
/// # Errors
/// Returns `Serialization` if JSON encoding fails.
pub fn encode_blob(snapshot: &Snapshot) -> crate::errors::Result<String> {
    let blob = PersistedBlob {
        state: PersistedState {
            exercises: snapshot
                .exercises
                .iter()
                .map(|e| (e.id.clone(), e.clone()))
                .collect(),
            schedule: snapshot.schedule.clone(),
        },
        version: FALLBACK_VERSION,
    };
    Ok(serde_json::to_string(&blob)?)
}

/// Decode a fallback blob into a snapshot
///
/// # Errors
/// Returns `Serialization` if the blob is not valid JSON of the expected shape.
pub fn decode_blob(raw: &str) -> crate::errors::Result<Snapshot> {
    let blob: PersistedBlob = serde_json::from_str(raw)?;
    if blob.version > FALLBACK_VERSION {
        return Err(PlannerError::Serialization {
            message: format!("unsupported fallback blob version {}", blob.version),
        });
    }
    Ok(Snapshot::new(
        blob.state.exercises.into_values().collect(),
        blob.state.schedule,
    ))
}
