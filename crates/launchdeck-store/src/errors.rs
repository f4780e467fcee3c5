//! Error helpers for launchdeck-store
//!
//! Foreign errors are folded into `LaunchError` at the point they occur so
//! the store satisfies the core traits' `Result` type.

use launchdeck_core::LaunchError;

/// Result type alias shared with launchdeck-core
pub type Result<T> = launchdeck_core::Result<T>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> LaunchError {
    LaunchError::Persistence {
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> LaunchError {
    LaunchError::Persistence {
        message: format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, expected, actual
        ),
    }
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> LaunchError {
    LaunchError::InvalidInput {
        reason: reason.to_string(),
    }
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> LaunchError {
    LaunchError::Persistence {
        message: err.to_string(),
    }
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> LaunchError {
    LaunchError::Io {
        operation: operation.to_string(),
        message: err.to_string(),
    }
}
