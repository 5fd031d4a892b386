//! Planner configuration
//!
//! Layers, lowest priority first:
//! 1. Built-in defaults (data dir under the platform data directory)
//! 2. A TOML file (`gymtrack.toml` in the working directory, or an explicit path)
//! 3. `GYMTRACK_*` environment variables (`GYMTRACK_DATA_DIR`, ...)
//!
//! `database_file` and `fallback_dir` are resolved against `data_dir` unless
//! they are absolute.

#![allow(clippy::result_large_err)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use gymtrack_core::errors::{ExError, ExErrorKind};
use gymtrack_core::logging_facility::Profile;
use serde::Deserialize;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "gymtrack.toml";

const ENV_PREFIX: &str = "GYMTRACK";
const APP_DIR: &str = "gym-tracker";
const DEFAULT_DATABASE_FILE: &str = "gym-tracker.db";
const DEFAULT_FALLBACK_DIR: &str = "fallback";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    pub data_dir: PathBuf,
    pub database_file: PathBuf,
    pub fallback_dir: PathBuf,
    pub log_profile: Profile,
}

#[derive(Deserialize)]
struct RawConfig {
    data_dir: PathBuf,
    database_file: PathBuf,
    fallback_dir: PathBuf,
    log_profile: String,
}

impl PlannerConfig {
    /// Defaults rooted at `data_dir`, ignoring files and environment
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            database_file: PathBuf::from(DEFAULT_DATABASE_FILE),
            fallback_dir: PathBuf::from(DEFAULT_FALLBACK_DIR),
            log_profile: Profile::default(),
        }
    }

    /// Load the layered configuration
    ///
    /// An explicit `file` must exist; the implicit `gymtrack.toml` is optional.
    ///
    /// # Errors
    /// Returns an `InvalidInput` error if a source cannot be read or a value
    /// (such as the log profile) is not recognized.
    pub fn load(file: Option<&Path>) -> Result<Self, ExError> {
        Self::load_with_env(file, None)
    }

    /// Load with an explicit environment map instead of the process environment
    fn load_with_env(
        file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ExError> {
        let (file_path, required) = match file {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let raw: RawConfig = Config::builder()
            .set_default("data_dir", default_data_dir().to_string_lossy().into_owned())
            .and_then(|b| b.set_default("database_file", DEFAULT_DATABASE_FILE))
            .and_then(|b| b.set_default("fallback_dir", DEFAULT_FALLBACK_DIR))
            .and_then(|b| b.set_default("log_profile", "development"))
            .map_err(config_error)?
            .add_source(
                File::from(file_path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_error)?;

        let log_profile = raw.log_profile.parse::<Profile>().map_err(|reason| {
            ExError::new(ExErrorKind::InvalidInput)
                .with_op("load_config")
                .with_message(reason)
        })?;

        Ok(Self {
            data_dir: raw.data_dir,
            database_file: raw.database_file,
            fallback_dir: raw.fallback_dir,
            log_profile,
        })
    }

    /// Full path of the SQLite database
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }

    /// Directory holding the fallback key-value files
    pub fn fallback_path(&self) -> PathBuf {
        self.data_dir.join(&self.fallback_dir)
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

fn config_error(err: config::ConfigError) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("load_config")
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = PlannerConfig::load_with_env(None, env(&[])).unwrap();

        assert!(config.data_dir.ends_with(APP_DIR));
        assert_eq!(config.database_path(), config.data_dir.join("gym-tracker.db"));
        assert_eq!(config.fallback_path(), config.data_dir.join("fallback"));
        assert_eq!(config.log_profile, Profile::Development);
    }

    #[test]
    fn test_file_then_env_override() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("gymtrack.toml");
        std::fs::write(
            &file,
            "data_dir = \"/srv/gym\"\ndatabase_file = \"planner.db\"\nlog_profile = \"production\"\n",
        )
        .unwrap();

        let config =
            PlannerConfig::load_with_env(Some(&file), env(&[("GYMTRACK_DATA_DIR", "/var/gym")]))
                .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/gym"));
        assert_eq!(config.database_path(), PathBuf::from("/var/gym/planner.db"));
        assert_eq!(config.log_profile, Profile::Production);
    }

    #[test]
    fn test_absolute_fallback_dir_is_kept() {
        let mut config = PlannerConfig::in_dir("/data");
        config.fallback_dir = PathBuf::from("/elsewhere/kv");
        assert_eq!(config.fallback_path(), PathBuf::from("/elsewhere/kv"));
    }

    #[test]
    fn test_unknown_log_profile_rejected() {
        let err =
            PlannerConfig::load_with_env(None, env(&[("GYMTRACK_LOG_PROFILE", "verbose")]))
                .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        assert!(PlannerConfig::load_with_env(Some(&missing), env(&[])).is_err());
    }
}
