//! LaunchDeck Core - launch record lifecycle kernel
//!
//! This crate provides the domain model and the business rules for
//! spaceflight launch records:
//! - `LaunchRecord`, `LaunchDraft` and `LaunchPatch` models
//! - Draft validation with deterministic error precedence
//! - `LaunchStore` and `PlanetLookup` seams with in-memory implementations
//! - Flight number allocation
//! - `LaunchLifecycleManager` orchestrating create / abort / list
//! - Structured error and logging facilities shared by the other crates

pub use launchdeck_core_types as core_types;

pub mod errors;
pub mod lifecycle;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, LaunchError, Result};
pub use lifecycle::{LaunchLifecycleManager, LifecycleConfig};
pub use model::{LaunchDraft, LaunchPatch, LaunchRecord, Pagination, Planet};
pub use ops::{
    FlightNumberAllocator, LaunchStore, MemoryLaunchStore, MemoryPlanetCatalog, PlanetLookup,
};
