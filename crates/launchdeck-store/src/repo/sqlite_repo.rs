//! SQLite repository implementation
//!
//! Persists launch records and the planet catalog. The row id and the
//! bookkeeping timestamps stay inside this module; callers only ever see
//! `LaunchRecord`.

#![allow(clippy::result_large_err)]

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use launchdeck_core::{
    FlightNumberAllocator, LaunchError, LaunchPatch, LaunchRecord, LaunchStore, Pagination,
    Planet, PlanetLookup,
};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::migrations::apply_migrations;

const INSERT_LAUNCH: &str = "INSERT INTO launches (flight_number, mission, rocket, launch_date, target, customers, upcoming, success, created_at, updated_at)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)";

const SELECT_LAUNCH: &str = "SELECT flight_number, mission, rocket, launch_date, target, customers, upcoming, success
     FROM launches";

/// SQLite-backed launch store and planet catalog
///
/// One connection guarded by a mutex; every statement runs with the lock
/// held, so read-modify-write sequences are not interleaved within a
/// process. Flight number allocation additionally takes SQLite's write lock
/// up front, which covers other processes on the same file.
pub struct SqliteRepo {
    conn: Mutex<Connection>,
}

impl SqliteRepo {
    /// Open (or create) the database at `path` and bring its schema up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        db::configure(&conn)?;
        Self::from_connection(conn)
    }

    /// Fresh in-memory database with the schema applied
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Wrap an existing connection, applying pending migrations first
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        apply_migrations(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| LaunchError::poisoned("sqlite connection"))
    }

    /// Run `f` against the underlying connection (tests, seed import)
    pub fn with_connection<T>(&self, f: impl FnOnce(&mut Connection) -> Result<T>) -> Result<T> {
        let mut conn = self.lock()?;
        f(&mut conn)
    }

    /// Add a planet to the catalog; returns false if it was already present
    pub fn insert_planet(&self, planet: &Planet) -> Result<bool> {
        let conn = self.lock()?;
        insert_planet(&conn, planet)
    }

    /// All catalog entries ordered by name
    pub fn list_planets(&self) -> Result<Vec<Planet>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare("SELECT kepler_name FROM planets ORDER BY kepler_name")
            .map_err(from_rusqlite)?;
        let planets = stmt
            .query_map([], |row| Ok(Planet::new(row.get::<_, String>(0)?)))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(planets)
    }

    /// Number of stored launches
    pub fn count_launches(&self) -> Result<usize> {
        let conn = self.lock()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM launches", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

/// Insert a planet using an existing connection or transaction
pub(crate) fn insert_planet(conn: &Connection, planet: &Planet) -> Result<bool> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO planets (kepler_name, created_at) VALUES (?1, ?2)",
            rusqlite::params![planet.kepler_name, Utc::now().timestamp()],
        )
        .map_err(from_rusqlite)?;
    Ok(inserted > 0)
}

fn write_launch(tx: &Transaction, record: &LaunchRecord) -> Result<()> {
    execute_insert(
        tx,
        &format!(
            "{} ON CONFLICT(flight_number) DO UPDATE SET
                mission = excluded.mission,
                rocket = excluded.rocket,
                launch_date = excluded.launch_date,
                target = excluded.target,
                customers = excluded.customers,
                upcoming = excluded.upcoming,
                success = excluded.success,
                updated_at = excluded.updated_at",
            INSERT_LAUNCH
        ),
        record,
    )
}

/// Run `sql` (an `INSERT_LAUNCH` variant) with `record` bound
fn execute_insert(tx: &Transaction, sql: &str, record: &LaunchRecord) -> Result<()> {
    let customers = serde_json::to_string(&record.customers)?;
    let now = Utc::now().timestamp();

    tx.execute(
        sql,
        rusqlite::params![
            record.flight_number,
            record.mission,
            record.rocket,
            record.launch_date.timestamp_millis(),
            record.target,
            customers,
            record.upcoming,
            record.success,
            now,
        ],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

fn find_launch(conn: &Connection, flight_number: i64) -> Result<Option<LaunchRecord>> {
    conn.query_row(
        &format!("{} WHERE flight_number = ?1", SELECT_LAUNCH),
        [flight_number],
        row_to_launch,
    )
    .optional()
    .map_err(from_rusqlite)
}

fn row_to_launch(row: &Row<'_>) -> rusqlite::Result<LaunchRecord> {
    let millis: i64 = row.get(3)?;
    let launch_date = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or(rusqlite::Error::IntegralValueOutOfRange(3, millis))?;

    let customers_json: String = row.get(5)?;
    let customers: Vec<String> = serde_json::from_str(&customers_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e)))?;

    Ok(LaunchRecord {
        flight_number: row.get(0)?,
        mission: row.get(1)?,
        rocket: row.get(2)?,
        launch_date,
        target: row.get(4)?,
        customers,
        upcoming: row.get(6)?,
        success: row.get(7)?,
    })
}

impl LaunchStore for SqliteRepo {
    fn find_by_flight_number(&self, flight_number: i64) -> Result<Option<LaunchRecord>> {
        let conn = self.lock()?;
        find_launch(&conn, flight_number)
    }

    fn find_latest(&self) -> Result<Option<LaunchRecord>> {
        let conn = self.lock()?;
        conn.query_row(
            &format!("{} ORDER BY flight_number DESC LIMIT 1", SELECT_LAUNCH),
            [],
            row_to_launch,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    fn list_all(&self) -> Result<Vec<LaunchRecord>> {
        self.list_page(Pagination::all())
    }

    fn list_page(&self, page: Pagination) -> Result<Vec<LaunchRecord>> {
        let conn = self.lock()?;
        // LIMIT -1 means no limit in SQLite
        let limit = page
            .limit
            .map(|l| i64::try_from(l).unwrap_or(i64::MAX))
            .unwrap_or(-1);
        let offset = i64::try_from(page.skip).unwrap_or(i64::MAX);

        let mut stmt = conn
            .prepare(&format!(
                "{} ORDER BY flight_number ASC LIMIT ?1 OFFSET ?2",
                SELECT_LAUNCH
            ))
            .map_err(from_rusqlite)?;
        let launches = stmt
            .query_map([limit, offset], row_to_launch)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(launches)
    }

    fn upsert(&self, record: &LaunchRecord) -> Result<()> {
        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(from_rusqlite)?;
        write_launch(&tx, record)?;
        tx.commit().map_err(from_rusqlite)
    }

    fn insert_with_next_flight_number(
        &self,
        allocator: &FlightNumberAllocator,
        mut record: LaunchRecord,
    ) -> Result<LaunchRecord> {
        let mut conn = self.lock()?;
        // IMMEDIATE takes the database write lock before the MAX read, so a
        // second process waits (busy timeout) instead of reading the same max
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(from_rusqlite)?;

        let latest: Option<i64> = tx
            .query_row("SELECT MAX(flight_number) FROM launches", [], |row| {
                row.get(0)
            })
            .map_err(from_rusqlite)?;
        record.flight_number = allocator.next_after(latest)?;

        // Plain INSERT: a duplicate key fails instead of replacing
        execute_insert(&tx, INSERT_LAUNCH, &record)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(record)
    }

    fn upsert_many(&self, records: &[LaunchRecord]) -> Result<usize> {
        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(from_rusqlite)?;
        for record in records {
            write_launch(&tx, record)?;
        }
        tx.commit().map_err(from_rusqlite)?;
        Ok(records.len())
    }

    fn apply_partial_update(&self, flight_number: i64, patch: &LaunchPatch) -> Result<bool> {
        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(from_rusqlite)?;

        let Some(mut record) = find_launch(&tx, flight_number)? else {
            return Ok(false);
        };
        if !patch.apply_to(&mut record) {
            return Ok(false);
        }

        write_launch(&tx, &record)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(true)
    }
}

impl PlanetLookup for SqliteRepo {
    fn exists(&self, kepler_name: &str) -> Result<bool> {
        let conn = self.lock()?;
        let found: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM planets WHERE kepler_name = ?1",
                [kepler_name],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?;
        Ok(found.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdeck_core::model::seed_launch;

    #[test]
    fn test_round_trip_preserves_record() {
        let repo = SqliteRepo::open_in_memory().unwrap();
        let record = seed_launch();
        repo.upsert(&record).unwrap();

        let loaded = repo.find_by_flight_number(100).unwrap().unwrap();
        assert_eq!(loaded, record);
        assert_eq!(loaded.customers, record.customers);
    }

    #[test]
    fn test_unknown_planet() {
        let repo = SqliteRepo::open_in_memory().unwrap();
        assert!(!repo.exists("Kepler-442 b").unwrap());
        assert!(repo.insert_planet(&Planet::new("Kepler-442 b")).unwrap());
        assert!(repo.exists("Kepler-442 b").unwrap());
    }

    #[test]
    fn test_insert_with_next_number_never_overwrites() {
        let repo = SqliteRepo::open_in_memory().unwrap();
        repo.upsert(&seed_launch()).unwrap();

        let mut record = seed_launch();
        record.mission = "Kepler Exploration Y".to_string();
        let stored = repo
            .insert_with_next_flight_number(&FlightNumberAllocator::default(), record)
            .unwrap();

        assert_eq!(stored.flight_number, 101);
        assert_eq!(repo.find_by_flight_number(101).unwrap(), Some(stored));
        assert_eq!(
            repo.find_by_flight_number(100).unwrap().unwrap(),
            seed_launch()
        );
    }

    #[test]
    fn test_insert_with_next_number_on_empty_table_uses_default() {
        let repo = SqliteRepo::open_in_memory().unwrap();
        let stored = repo
            .insert_with_next_flight_number(&FlightNumberAllocator::new(500), seed_launch())
            .unwrap();
        assert_eq!(stored.flight_number, 500);
    }
}
