//! Structured logging for launch operations
//!
//! The `launchdeck` binary calls `init` with the profile from its settings.
//! Scheduling, aborting and syncing launches are bracketed with
//! `log_op_start!` / `log_op_end!` / `log_op_error!`, and tests observe those
//! events through `init_test_capture`.
//!
//! ```rust
//! use launchdeck_core::logging_facility::{init, Profile};
//!
//! init(Profile::Production);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
