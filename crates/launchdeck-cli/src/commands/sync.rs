//! Upstream catalog sync command
//!
//! Usage: launchdeck sync [--every <SECS>]

use std::sync::Arc;
use std::time::Duration;

use clap::Args;

use crate::app::App;

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Keep running and sync again every SECS seconds until interrupted
    #[arg(long, value_name = "SECS")]
    pub every: Option<u64>,
}

/// Execute sync command
pub async fn execute(app: &App, args: SyncArgs) -> anyhow::Result<()> {
    match args.every {
        None => {
            let report = app.ingestor.sync().await?;
            println!(
                "{}",
                serde_json::json!({ "fetched": report.fetched, "applied": report.applied })
            );
        }
        Some(secs) => {
            let interval = Duration::from_secs(secs.max(1));
            tracing::info!(interval_secs = interval.as_secs(), "periodic sync started");
            let handle = Arc::clone(&app.ingestor).spawn_periodic(interval);
            tokio::signal::ctrl_c().await?;
            handle.abort();
            tracing::info!("periodic sync stopped");
        }
    }
    Ok(())
}
