use super::store::LaunchStore;
use crate::errors::{LaunchError, Result};

/// Flight number handed out when the store holds no launches yet
pub const DEFAULT_FLIGHT_NUMBER: i64 = 100;

/// Computes the next flight number from the current maximum in the store
///
/// `next_flight_number` is a read followed by a decision: two callers that
/// run concurrently can observe the same maximum. Creation goes through
/// `LaunchStore::insert_with_next_flight_number`, which calls `next_after`
/// inside the store's own write lock or transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightNumberAllocator {
    default_flight_number: i64,
}

impl FlightNumberAllocator {
    pub fn new(default_flight_number: i64) -> Self {
        Self {
            default_flight_number,
        }
    }

    pub fn default_flight_number(&self) -> i64 {
        self.default_flight_number
    }

    /// `max + 1`, or the configured default on an empty store
    ///
    /// # Errors
    /// `Persistence` if the store cannot be read
    pub fn next_flight_number(&self, store: &dyn LaunchStore) -> Result<i64> {
        self.next_after(store.find_latest()?.map(|latest| latest.flight_number))
    }

    /// The number following `latest`, the highest stored flight number
    ///
    /// # Errors
    /// `InvalidInput` when `latest` is `i64::MAX`; no number is left to hand out
    pub fn next_after(&self, latest: Option<i64>) -> Result<i64> {
        match latest {
            Some(n) => n.checked_add(1).ok_or_else(|| LaunchError::InvalidInput {
                reason: format!("flight numbers exhausted after {}", n),
            }),
            None => Ok(self.default_flight_number),
        }
    }
}

impl Default for FlightNumberAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_FLIGHT_NUMBER)
    }
}
