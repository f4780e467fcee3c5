use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use super::allocator::FlightNumberAllocator;
use crate::errors::{LaunchError, Result};
use crate::model::{LaunchPatch, LaunchRecord, Pagination};

/// Persistence seam for launch records keyed by flight number
///
/// Implementations must be shareable across threads; the lifecycle manager
/// and the ingestor hold the same store behind an `Arc`.
pub trait LaunchStore: Send + Sync {
    /// Look up one launch
    ///
    /// # Errors
    /// `Persistence` if the backing store is unavailable
    fn find_by_flight_number(&self, flight_number: i64) -> Result<Option<LaunchRecord>>;

    /// The launch with the highest flight number, if any
    ///
    /// # Errors
    /// `Persistence` if the backing store is unavailable
    fn find_latest(&self) -> Result<Option<LaunchRecord>>;

    /// Every launch, ordered by ascending flight number
    ///
    /// # Errors
    /// `Persistence` if the backing store is unavailable
    fn list_all(&self) -> Result<Vec<LaunchRecord>>;

    /// A skip/limit window over `list_all` ordering
    ///
    /// # Errors
    /// `Persistence` if the backing store is unavailable
    fn list_page(&self, page: Pagination) -> Result<Vec<LaunchRecord>> {
        Ok(page.apply(self.list_all()?))
    }

    /// Replace-or-insert keyed by `record.flight_number`
    ///
    /// Full replace: whatever the stored match held is discarded, including
    /// fields the new record leaves empty (e.g. `target: None`).
    ///
    /// # Errors
    /// `Persistence` if the write fails
    fn upsert(&self, record: &LaunchRecord) -> Result<()>;

    /// Give `record` the next flight number and insert it
    ///
    /// Reading the current maximum and inserting happen as one step, so two
    /// writers sharing the backing store (threads, or processes on the same
    /// database file) never receive the same number. Never overwrites.
    ///
    /// # Errors
    /// * `InvalidInput` - flight numbers are exhausted
    /// * `Persistence` - the write failed; nothing was stored
    fn insert_with_next_flight_number(
        &self,
        allocator: &FlightNumberAllocator,
        record: LaunchRecord,
    ) -> Result<LaunchRecord>;

    /// Upsert a batch, returning how many records were written
    ///
    /// Stores that can should apply the batch atomically; the default writes
    /// one record at a time.
    ///
    /// # Errors
    /// `Persistence` if a write fails
    fn upsert_many(&self, records: &[LaunchRecord]) -> Result<usize> {
        for record in records {
            self.upsert(record)?;
        }
        Ok(records.len())
    }

    /// Merge `patch` into an existing launch
    ///
    /// Returns `false` both when no launch matched and when the patch changed
    /// nothing; a miss is not an error.
    ///
    /// # Errors
    /// `Persistence` if the write fails
    fn apply_partial_update(&self, flight_number: i64, patch: &LaunchPatch) -> Result<bool>;
}

/// In-memory launch store
///
/// Backed by an ordered map so listing is naturally sorted by flight number.
#[derive(Debug, Default)]
pub struct MemoryLaunchStore {
    launches: RwLock<BTreeMap<i64, LaunchRecord>>,
}

impl MemoryLaunchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records` (later duplicates win)
    pub fn with_records(records: impl IntoIterator<Item = LaunchRecord>) -> Self {
        let launches = records
            .into_iter()
            .map(|r| (r.flight_number, r))
            .collect();
        Self {
            launches: RwLock::new(launches),
        }
    }

    /// Number of stored launches
    ///
    /// A poisoned lock still holds a consistent map (every write is a single
    /// insert), so the count is read through it.
    pub fn len(&self) -> usize {
        self.launches
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LaunchStore for MemoryLaunchStore {
    fn find_by_flight_number(&self, flight_number: i64) -> Result<Option<LaunchRecord>> {
        let launches = self
            .launches
            .read()
            .map_err(|_| LaunchError::poisoned("launch store"))?;
        Ok(launches.get(&flight_number).cloned())
    }

    fn find_latest(&self) -> Result<Option<LaunchRecord>> {
        let launches = self
            .launches
            .read()
            .map_err(|_| LaunchError::poisoned("launch store"))?;
        Ok(launches.values().next_back().cloned())
    }

    fn list_all(&self) -> Result<Vec<LaunchRecord>> {
        let launches = self
            .launches
            .read()
            .map_err(|_| LaunchError::poisoned("launch store"))?;
        Ok(launches.values().cloned().collect())
    }

    fn list_page(&self, page: Pagination) -> Result<Vec<LaunchRecord>> {
        let launches = self
            .launches
            .read()
            .map_err(|_| LaunchError::poisoned("launch store"))?;
        Ok(page.apply(launches.values().cloned()))
    }

    fn upsert(&self, record: &LaunchRecord) -> Result<()> {
        let mut launches = self
            .launches
            .write()
            .map_err(|_| LaunchError::poisoned("launch store"))?;
        launches.insert(record.flight_number, record.clone());
        Ok(())
    }

    fn insert_with_next_flight_number(
        &self,
        allocator: &FlightNumberAllocator,
        mut record: LaunchRecord,
    ) -> Result<LaunchRecord> {
        let mut launches = self
            .launches
            .write()
            .map_err(|_| LaunchError::poisoned("launch store"))?;
        record.flight_number = allocator.next_after(launches.keys().next_back().copied())?;
        launches.insert(record.flight_number, record.clone());
        Ok(record)
    }

    fn upsert_many(&self, records: &[LaunchRecord]) -> Result<usize> {
        let mut launches = self
            .launches
            .write()
            .map_err(|_| LaunchError::poisoned("launch store"))?;
        for record in records {
            launches.insert(record.flight_number, record.clone());
        }
        Ok(records.len())
    }

    fn apply_partial_update(&self, flight_number: i64, patch: &LaunchPatch) -> Result<bool> {
        let mut launches = self
            .launches
            .write()
            .map_err(|_| LaunchError::poisoned("launch store"))?;
        Ok(launches
            .get_mut(&flight_number)
            .map(|record| patch.apply_to(record))
            .unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_launch;

    #[test]
    fn test_latest_is_highest_flight_number() {
        let mut a = seed_launch();
        a.flight_number = 7;
        let mut b = seed_launch();
        b.flight_number = 120;
        let store = MemoryLaunchStore::with_records([b, a]);

        assert_eq!(store.find_latest().unwrap().unwrap().flight_number, 120);
    }

    #[test]
    fn test_partial_update_on_missing_record() {
        let store = MemoryLaunchStore::new();
        assert!(!store.apply_partial_update(1, &LaunchPatch::abort()).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_takes_number_after_highest() {
        let mut early = seed_launch();
        early.flight_number = 7;
        let store = MemoryLaunchStore::with_records([seed_launch(), early]);

        let mut draft = seed_launch();
        draft.flight_number = 7;
        draft.mission = "Kepler Exploration Y".to_string();
        let stored = store
            .insert_with_next_flight_number(&FlightNumberAllocator::default(), draft)
            .unwrap();

        assert_eq!(stored.flight_number, 101);
        assert_eq!(store.len(), 3);
        assert_ne!(
            store.find_by_flight_number(7).unwrap().unwrap().mission,
            "Kepler Exploration Y",
            "the incoming flight number is ignored"
        );
    }

    #[test]
    fn test_len_survives_poisoned_lock() {
        let store = std::sync::Arc::new(MemoryLaunchStore::with_records([seed_launch()]));

        let holder = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = holder.launches.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(store.launches.is_poisoned());
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert!(matches!(
            store.list_all(),
            Err(LaunchError::Concurrency { .. })
        ));
    }
}
