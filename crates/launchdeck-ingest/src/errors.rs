//! Conversions from HTTP client failures into `LaunchError`

use launchdeck_core::LaunchError;

/// Service name reported in `ExternalService` errors
pub const UPSTREAM_SERVICE: &str = "spacex";

/// Classify a reqwest failure
///
/// Timeouts keep their own kind so callers can tell a slow upstream from a
/// broken one; undecodable bodies are serialization failures.
pub fn from_reqwest(operation: &str, err: reqwest::Error) -> LaunchError {
    if err.is_timeout() {
        LaunchError::Timeout {
            operation: operation.to_string(),
        }
    } else if err.is_decode() {
        LaunchError::Serialization {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        LaunchError::ExternalService {
            service: UPSTREAM_SERVICE.to_string(),
            message: format!("connection failed: {}", err),
        }
    } else if let Some(status) = err.status() {
        LaunchError::ExternalService {
            service: UPSTREAM_SERVICE.to_string(),
            message: format!("HTTP {}", status),
        }
    } else {
        LaunchError::ExternalService {
            service: UPSTREAM_SERVICE.to_string(),
            message: err.to_string(),
        }
    }
}
