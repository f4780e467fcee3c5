//! Seed parser with validation
//!
//! Parses YAML and validates schema version and planet names

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, seed_validation, Result};
use crate::seed::format_v0::PlanetSeedV0;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<PlanetSeedV0> {
    let content = fs::read_to_string(path).map_err(|e| io_error("read_seed_file", e))?;
    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<PlanetSeedV0> {
    let seed: PlanetSeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

fn validate_seed(seed: &PlanetSeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    let mut names = HashSet::new();
    for planet in &seed.planets {
        if planet.kepler_name.trim().is_empty() {
            return Err(seed_validation("Planet with empty kepler_name"));
        }
        if !names.insert(planet.kepler_name.as_str()) {
            return Err(seed_validation(&format!(
                "Duplicate planet {}",
                planet.kepler_name
            )));
        }
    }

    Ok(())
}
