//! Error handling for gymtrack-store
//!
//! Wraps gymtrack-core ExError with store-specific helpers

use gymtrack_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Structured engine could not be opened or its schema created
pub fn initialization_error(reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Initialization)
        .with_op("initialize")
        .with_message(reason)
}

/// A load or save failed mid-flight
pub fn transaction_error(op: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Transaction)
        .with_op(op.to_string())
        .with_message(reason)
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Initialization)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Initialization)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Transaction)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a serialization error for a malformed stored value
pub fn corrupt_value(op: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(op.to_string())
        .with_message(reason)
}
