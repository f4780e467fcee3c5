//! Launch commands
//!
//! Usage: launchdeck launches <list|exists|schedule|abort>

use clap::{Args, Subcommand};
use launchdeck_core::{LaunchDraft, Pagination};

use crate::app::App;

#[derive(Debug, Args)]
pub struct LaunchesArgs {
    #[command(subcommand)]
    pub command: LaunchesCommand,
}

#[derive(Debug, Subcommand)]
pub enum LaunchesCommand {
    /// List launches ordered by flight number
    List(ListArgs),
    /// Report whether a flight number is stored
    Exists {
        flight_number: i64,
    },
    /// Schedule a new launch
    Schedule(ScheduleArgs),
    /// Abort a launch
    Abort {
        flight_number: i64,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Page size; 0 lists everything
    #[arg(long, default_value_t = 0)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    #[arg(long)]
    pub mission: Option<String>,

    #[arg(long)]
    pub rocket: Option<String>,

    /// e.g. 2030-12-27, "December 27, 2030" or an RFC 3339 timestamp
    #[arg(long)]
    pub launch_date: Option<String>,

    /// Kepler name of the destination planet
    #[arg(long)]
    pub target: Option<String>,
}

/// Execute launches command
pub fn execute(app: &App, args: LaunchesArgs) -> anyhow::Result<()> {
    match args.command {
        LaunchesCommand::List(list) => {
            let launches = app
                .manager
                .list_page(Pagination::page(list.page, list.limit))?;
            println!("{}", serde_json::to_string_pretty(&launches)?);
        }
        LaunchesCommand::Exists { flight_number } => {
            println!("{}", app.manager.exists(flight_number)?);
        }
        LaunchesCommand::Schedule(schedule) => {
            let draft = LaunchDraft {
                mission: schedule.mission,
                rocket: schedule.rocket,
                launch_date: schedule.launch_date,
                target: schedule.target,
                ..LaunchDraft::default()
            };
            let created = app.manager.create(&draft)?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        LaunchesCommand::Abort { flight_number } => {
            if !app.manager.exists(flight_number)? {
                anyhow::bail!("Launch not found: {}", flight_number);
            }
            if !app.manager.abort(flight_number)? {
                anyhow::bail!("Launch not aborted: {}", flight_number);
            }
            println!("{}", serde_json::json!({ "ok": true }));
        }
    }
    Ok(())
}
