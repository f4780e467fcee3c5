//! Operation boundary macros
//!
//! `create_launch`, `abort_launch` and `sync_launches` each emit one start
//! event and exactly one of end / end_error, all carrying the same `op`.
//! Log pipelines pair them on `op` and read `duration_ms` off the closing
//! event. Extra fields (`flight_number`, `record_count`) go after the
//! mandatory ones.

/// Emit the `start` event of a launch operation
///
/// # Example
///
/// ```
/// # use launchdeck_core::log_op_start;
/// log_op_start!("create_launch");
/// log_op_start!("abort_launch", flight_number = 101);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {{
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
        );
    }};
    ($op:expr, $($field:tt)*) => {{
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($field)*
        );
    }};
}

/// Emit the `end` event of a launch operation that succeeded
///
/// # Example
///
/// ```
/// # use launchdeck_core::log_op_end;
/// log_op_end!("create_launch", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {{
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    }};
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    }};
}

/// Emit the `end_error` event of a launch operation that failed
///
/// `$err` is a `LaunchError` or a reference to one; its stable code and kind
/// are attached so a rejected schedule (`ERR_UNKNOWN_TARGET`) can be told
/// apart from a store outage (`ERR_PERSISTENCE`) without parsing messages.
///
/// # Example
///
/// ```
/// # use launchdeck_core::{log_op_error, errors::LaunchError};
/// let err = LaunchError::UnknownTarget { target: "Kepler-1 z".to_string() };
/// log_op_error!("create_launch", &err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
