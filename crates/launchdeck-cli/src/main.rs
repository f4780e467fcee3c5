//! LaunchDeck CLI
//!
//! Command-line interface for the launch lifecycle

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use launchdeck_core::core_types::RequestContext;
use launchdeck_core::{logging_facility, ExError, LaunchError};
use tracing::Instrument;

mod app;
mod commands;
mod config;

use app::App;
use config::Settings;

#[derive(Debug, Parser)]
#[command(name = "launchdeck")]
#[command(about = "LaunchDeck - Spaceflight launch scheduling", long_about = None)]
struct Cli {
    /// Settings file (default: ./launchdeck.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database path, overriding settings
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Launch operations
    Launches(commands::launches::LaunchesArgs),
    /// Synchronize with the upstream launch catalog
    Sync(commands::sync::SyncArgs),
    /// Planet catalog operations
    Planets(commands::planets::PlanetsArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: invalid configuration: {}", e);
            std::process::exit(2);
        }
    };
    logging_facility::init(settings.logging_profile());

    let ctx = RequestContext::new();
    let span = tracing::info_span!("launchdeck", request_id = %ctx.request_id);
    if let Err(e) = run(cli, settings).instrument(span).await {
        eprintln!("Error: {}", render_error(&e, &ctx));
        std::process::exit(1);
    }
}

async fn run(cli: Cli, settings: Settings) -> anyhow::Result<()> {
    let app = App::open(&settings, cli.db)?;
    app.bootstrap();

    match cli.command {
        Commands::Launches(args) => {
            if settings.ingest.sync_on_start {
                app.ensure_loaded().await;
            }
            commands::launches::execute(&app, args)
        }
        Commands::Sync(args) => commands::sync::execute(&app, args).await,
        Commands::Planets(args) => commands::planets::execute(&app, args),
    }
}

/// Launch errors carry a stable code and the invocation's request id
fn render_error(err: &anyhow::Error, ctx: &RequestContext) -> String {
    match err.downcast_ref::<LaunchError>() {
        Some(launch_err) => ExError::from(launch_err)
            .with_request_id(ctx.request_id.clone())
            .to_string(),
        None => err.to_string(),
    }
}
