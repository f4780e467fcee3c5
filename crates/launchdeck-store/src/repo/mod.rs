//! Repository layer for persisting launches and planets to SQLite

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
