//! Seed importer orchestration

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::sqlite_repo::insert_planet;
use crate::repo::SqliteRepo;
use crate::seed::{compute_seed_digest, parse_seed_file};
use launchdeck_core::Planet;
use rusqlite::OptionalExtension;
use std::path::Path;

const SEED_KIND: &str = "planets";

/// Outcome of a planet seed import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedImportReport {
    pub seed_digest: String,
    /// Planets that were not in the catalog before this import
    pub inserted: usize,
    /// True when this exact seed had been imported before and nothing ran
    pub already_applied: bool,
}

/// Import a planet seed file into the catalog
///
/// 1. Parses and validates the seed YAML
/// 2. Computes the seed digest
/// 3. Skips the import if the digest is already recorded
/// 4. Inserts planets and the provenance row in one transaction
pub fn import_planet_seed(path: &Path, repo: &SqliteRepo) -> Result<SeedImportReport> {
    let seed = parse_seed_file(path)?;
    let seed_digest = compute_seed_digest(&seed);

    repo.with_connection(|conn| {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        let previous: Option<i64> = tx
            .query_row(
                "SELECT id FROM seed_imports WHERE seed_kind = ?1 AND seed_digest = ?2",
                [SEED_KIND, seed_digest.as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?;
        if previous.is_some() {
            tracing::info!(seed_digest = %seed_digest, "planet seed already applied");
            return Ok(SeedImportReport {
                seed_digest: seed_digest.clone(),
                inserted: 0,
                already_applied: true,
            });
        }

        let mut inserted = 0;
        for planet in &seed.planets {
            if insert_planet(&tx, &Planet::new(planet.kepler_name.clone()))? {
                inserted += 1;
            }
        }

        tx.execute(
            "INSERT INTO seed_imports (seed_kind, seed_digest, item_count, imported_at)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                SEED_KIND,
                seed_digest,
                i64::try_from(seed.planets.len()).unwrap_or(i64::MAX),
                chrono::Utc::now().timestamp(),
            ],
        )
        .map_err(from_rusqlite)?;

        tx.commit().map_err(from_rusqlite)?;
        tracing::info!(seed_digest = %seed_digest, inserted, "planet seed imported");

        Ok(SeedImportReport {
            seed_digest: seed_digest.clone(),
            inserted,
            already_applied: false,
        })
    })
}
