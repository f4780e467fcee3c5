//! Upstream catalog synchronization

use std::sync::Arc;
use std::time::{Duration, Instant};

use launchdeck_core::{log_op_end, log_op_error, log_op_start};
use launchdeck_core::{LaunchError, LaunchRecord, LaunchStore, Result};
use tokio::task::JoinHandle;

use crate::feed::LaunchFeed;
use crate::mapping::map_upstream;

/// Flight whose presence means the catalog was loaded before
pub const SENTINEL_FLIGHT_NUMBER: i64 = 1;
pub const SENTINEL_ROCKET: &str = "Falcon 1";
pub const SENTINEL_MISSION: &str = "FalconSat";

/// Outcome of one synchronization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Documents received from the upstream
    pub fetched: usize,
    /// Records written to the store
    pub applied: usize,
}

/// Copies the upstream launch catalog into a `LaunchStore`
pub struct LaunchIngestor {
    feed: Arc<dyn LaunchFeed>,
    store: Arc<dyn LaunchStore>,
}

impl LaunchIngestor {
    pub fn new(feed: Arc<dyn LaunchFeed>, store: Arc<dyn LaunchStore>) -> Self {
        Self { feed, store }
    }

    /// Fetch the whole upstream catalog and upsert it by flight number
    ///
    /// Every page is fetched and every document mapped before the first
    /// write, so a network or decode failure leaves the store untouched.
    /// Records that exist only locally are kept; records sharing a flight
    /// number with an upstream launch are replaced.
    ///
    /// # Errors
    /// * `Timeout` / `ExternalService` - the upstream failed
    /// * `Serialization` - a document did not decode or map
    /// * `Persistence` - the store rejected the batch
    pub async fn sync(&self) -> Result<SyncReport> {
        let start = Instant::now();
        log_op_start!("sync_launches");

        let result = self.sync_inner().await;
        match &result {
            Ok(report) => log_op_end!(
                "sync_launches",
                duration_ms = elapsed_ms(start),
                record_count = report.applied
            ),
            Err(err) => log_op_error!("sync_launches", err, duration_ms = elapsed_ms(start)),
        }
        result
    }

    async fn sync_inner(&self) -> Result<SyncReport> {
        let docs = self.feed.fetch_all().await?;
        let records = docs
            .iter()
            .map(map_upstream)
            .collect::<Result<Vec<LaunchRecord>>>()?;

        let store = Arc::clone(&self.store);
        let applied = tokio::task::spawn_blocking(move || store.upsert_many(&records))
            .await
            .map_err(|e| LaunchError::Concurrency {
                message: format!("store writer task failed: {}", e),
            })??;

        Ok(SyncReport {
            fetched: docs.len(),
            applied,
        })
    }

    /// Sync unless the catalog was already loaded
    ///
    /// Returns `None` when the sentinel launch (flight 1, FalconSat on a
    /// Falcon 1) is present and the download was skipped.
    ///
    /// # Errors
    /// Same as `sync`
    pub async fn ensure_loaded(&self) -> Result<Option<SyncReport>> {
        if self.catalog_present()? {
            tracing::info!("launch catalog already loaded");
            return Ok(None);
        }
        self.sync().await.map(Some)
    }

    fn catalog_present(&self) -> Result<bool> {
        Ok(self
            .store
            .find_by_flight_number(SENTINEL_FLIGHT_NUMBER)?
            .is_some_and(|r| r.rocket == SENTINEL_ROCKET && r.mission == SENTINEL_MISSION))
    }

    /// Run `sync` now and then every `interval`
    ///
    /// A failed run is logged and the next tick tries again; nothing is
    /// retried early. Abort the returned handle to stop.
    pub fn spawn_periodic(self: Arc<Self>, interval: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if let Err(err) = self.sync().await {
                    tracing::warn!(error = %err, "periodic launch sync failed");
                }
            }
        })
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
