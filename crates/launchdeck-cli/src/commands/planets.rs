//! Planet catalog commands
//!
//! Usage: launchdeck planets import <PATH>

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::app::App;

#[derive(Debug, Args)]
pub struct PlanetsArgs {
    #[command(subcommand)]
    pub command: PlanetsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PlanetsCommand {
    /// Import a planet seed file (or a directory of them) into the catalog
    Import {
        path: PathBuf,
    },
    /// List catalog planets
    List,
}

/// Execute planets command
pub fn execute(app: &App, args: PlanetsArgs) -> anyhow::Result<()> {
    match args.command {
        PlanetsCommand::Import { path } => {
            for seed_file in seed_files(&path)? {
                println!("Importing {}...", seed_file.display());
                let report = launchdeck_store::seed::import_planet_seed(&seed_file, &app.repo)?;
                if report.already_applied {
                    println!("Already imported (digest: {})", report.seed_digest);
                } else {
                    println!(
                        "Imported {} new planets (digest: {})",
                        report.inserted, report.seed_digest
                    );
                }
            }
        }
        PlanetsCommand::List => {
            for planet in app.repo.list_planets()? {
                println!("{}", planet.kepler_name);
            }
        }
    }
    Ok(())
}

/// A single file, or the YAML files of a directory sorted for determinism
fn seed_files(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(path)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .map(|ext| ext == "yaml" || ext == "yml")
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}
