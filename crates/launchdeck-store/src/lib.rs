//! LaunchDeck Store - SQLite persistence for launches and planets
//!
//! Provides:
//! - Connection helpers and embedded migrations with checksums
//! - `SqliteRepo`, implementing `LaunchStore` and `PlanetLookup`
//! - Planet catalog seed import (YAML, schema version 0)

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
