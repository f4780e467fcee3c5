//! Startup wiring shared by every subcommand

use std::path::PathBuf;
use std::sync::Arc;

use launchdeck_core::model::seed_launch;
use launchdeck_core::{LaunchLifecycleManager, LaunchStore};
use launchdeck_ingest::{LaunchIngestor, SpaceXFeed};
use launchdeck_store::SqliteRepo;

use crate::config::Settings;

/// Opened database plus the components built on it
pub struct App {
    pub repo: Arc<SqliteRepo>,
    pub manager: LaunchLifecycleManager,
    pub ingestor: Arc<LaunchIngestor>,
}

impl App {
    /// Open the database (applying migrations) and build the components
    ///
    /// # Errors
    /// Fails if the database cannot be opened or migrated, or the HTTP
    /// client cannot be built
    pub fn open(settings: &Settings, db_override: Option<PathBuf>) -> anyhow::Result<Self> {
        let db_path = db_override.unwrap_or_else(|| settings.database.path.clone());
        tracing::debug!(db_path = %db_path.display(), "opening launch database");

        let repo = Arc::new(SqliteRepo::open(&db_path)?);
        let store: Arc<dyn LaunchStore> = repo.clone();

        let manager =
            LaunchLifecycleManager::new(store.clone(), repo.clone(), settings.lifecycle_config());
        let feed = Arc::new(SpaceXFeed::new(&settings.feed_config())?);
        let ingestor = Arc::new(LaunchIngestor::new(feed, store));

        Ok(Self {
            repo,
            manager,
            ingestor,
        })
    }

    /// Install the seed launch; a failure is logged, not fatal
    pub fn bootstrap(&self) {
        match self.manager.bootstrap(&seed_launch()) {
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "seed launch not installed"),
        }
    }

    /// Load the upstream catalog once; a failure is logged, not fatal
    pub async fn ensure_loaded(&self) {
        if let Err(err) = self.ingestor.ensure_loaded().await {
            tracing::warn!(error = %err, "initial launch catalog load failed");
        }
    }
}
