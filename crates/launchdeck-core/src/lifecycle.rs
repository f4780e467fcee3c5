//! Launch lifecycle orchestration
//!
//! `LaunchLifecycleManager` is the public contract consumed by front ends
//! (the CLI, an HTTP layer). It owns the ordering of checks on creation and
//! the critical section that keeps flight numbers unique.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use crate::errors::{LaunchError, Result};
use crate::model::{LaunchDraft, LaunchPatch, LaunchRecord, Pagination};
use crate::ops::{FlightNumberAllocator, LaunchStore, PlanetLookup, DEFAULT_FLIGHT_NUMBER};
use crate::rules::validate_draft;
use crate::{log_op_end, log_op_error, log_op_start};

/// Tunables for launch creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleConfig {
    /// Flight number used when the store is empty
    pub default_flight_number: i64,
    /// Customer list assigned to every locally scheduled launch
    pub default_customers: Vec<String>,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            default_flight_number: DEFAULT_FLIGHT_NUMBER,
            default_customers: vec!["Zero To Mastery".to_string(), "NASA".to_string()],
        }
    }
}

/// Creates, aborts and lists launches
pub struct LaunchLifecycleManager {
    store: Arc<dyn LaunchStore>,
    planets: Arc<dyn PlanetLookup>,
    allocator: FlightNumberAllocator,
    default_customers: Vec<String>,
    /// Keeps `bootstrap` from interleaving with `create` on this manager
    allocation: Mutex<()>,
}

impl LaunchLifecycleManager {
    pub fn new(
        store: Arc<dyn LaunchStore>,
        planets: Arc<dyn PlanetLookup>,
        config: LifecycleConfig,
    ) -> Self {
        Self {
            store,
            planets,
            allocator: FlightNumberAllocator::new(config.default_flight_number),
            default_customers: config.default_customers,
            allocation: Mutex::new(()),
        }
    }

    /// The store this manager writes to
    pub fn store(&self) -> Arc<dyn LaunchStore> {
        Arc::clone(&self.store)
    }

    /// Whether a launch with this flight number is stored
    ///
    /// # Errors
    /// `Persistence` if the store is unavailable
    pub fn exists(&self, flight_number: i64) -> Result<bool> {
        Ok(self.store.find_by_flight_number(flight_number)?.is_some())
    }

    /// Every launch, ordered by flight number
    ///
    /// # Errors
    /// `Persistence` if the store is unavailable
    pub fn list_all(&self) -> Result<Vec<LaunchRecord>> {
        self.store.list_all()
    }

    /// One page of launches, ordered by flight number
    ///
    /// # Errors
    /// `Persistence` if the store is unavailable
    pub fn list_page(&self, page: Pagination) -> Result<Vec<LaunchRecord>> {
        self.store.list_page(page)
    }

    /// Schedule a new launch
    ///
    /// Order of checks: mandatory fields, date validity, target planet. Only
    /// then is a flight number allocated; the store allocates and inserts in
    /// one step so concurrent callers, in this process or another one on the
    /// same database, never share a number. The record written is the fully
    /// populated one carrying the new number.
    ///
    /// # Errors
    /// * `MissingField` - mission, rocket, launchDate or target absent
    /// * `InvalidDate` - launchDate does not parse
    /// * `UnknownTarget` - target is not in the planet catalog
    /// * `InvalidInput` - flight numbers are exhausted
    /// * `Persistence` - the store failed; nothing was written
    pub fn create(&self, draft: &LaunchDraft) -> Result<LaunchRecord> {
        let start = Instant::now();
        log_op_start!("create_launch");

        let result = self.create_inner(draft);
        match &result {
            Ok(record) => log_op_end!(
                "create_launch",
                duration_ms = elapsed_ms(start),
                flight_number = record.flight_number
            ),
            Err(err) => log_op_error!("create_launch", err, duration_ms = elapsed_ms(start)),
        }
        result
    }

    fn create_inner(&self, draft: &LaunchDraft) -> Result<LaunchRecord> {
        let valid = validate_draft(draft)?;
        self.ensure_target_exists(&valid.target)?;

        let _guard = self
            .allocation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let record = LaunchRecord {
            flight_number: 0,
            mission: valid.mission,
            rocket: valid.rocket,
            launch_date: valid.launch_date,
            target: Some(valid.target),
            customers: self.default_customers.clone(),
            upcoming: true,
            success: true,
        };
        self.store
            .insert_with_next_flight_number(&self.allocator, record)
    }

    /// Mark a launch as aborted
    ///
    /// Returns true only when the launch existed and its status changed;
    /// aborting an unknown or already aborted launch returns false.
    ///
    /// # Errors
    /// `Persistence` if the store is unavailable
    pub fn abort(&self, flight_number: i64) -> Result<bool> {
        let start = Instant::now();
        log_op_start!("abort_launch", flight_number = flight_number);

        let result = self
            .store
            .apply_partial_update(flight_number, &LaunchPatch::abort());
        match &result {
            Ok(aborted) => log_op_end!(
                "abort_launch",
                duration_ms = elapsed_ms(start),
                flight_number = flight_number,
                aborted = *aborted
            ),
            Err(err) => log_op_error!(
                "abort_launch",
                err,
                duration_ms = elapsed_ms(start),
                flight_number = flight_number
            ),
        }
        result
    }

    /// Install `seed` if its flight number is not stored yet
    ///
    /// Called once at startup. An existing record is left alone so that a
    /// seed launch aborted earlier stays aborted across restarts.
    ///
    /// # Errors
    /// * `UnknownTarget` - the seed's target is not in the planet catalog
    /// * `Persistence` - the store failed
    pub fn bootstrap(&self, seed: &LaunchRecord) -> Result<bool> {
        let _guard = self
            .allocation
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.exists(seed.flight_number)? {
            tracing::debug!(
                flight_number = seed.flight_number,
                "seed launch already present"
            );
            return Ok(false);
        }
        if let Some(target) = &seed.target {
            self.ensure_target_exists(target)?;
        }
        self.store.upsert(seed)?;
        tracing::info!(flight_number = seed.flight_number, "seed launch installed");
        Ok(true)
    }

    fn ensure_target_exists(&self, target: &str) -> Result<()> {
        if self.planets.exists(target)? {
            Ok(())
        } else {
            Err(LaunchError::UnknownTarget {
                target: target.to_string(),
            })
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
