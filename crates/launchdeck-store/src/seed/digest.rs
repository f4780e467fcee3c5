//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds for reproducibility

use crate::seed::format_v0::PlanetSeedV0;
use sha2::{Digest, Sha256};

/// Compute a stable digest for a seed
///
/// Planet names are sorted and newline-joined after the schema version, so
/// formatting and ordering in the YAML do not affect the digest.
pub fn compute_seed_digest(seed: &PlanetSeedV0) -> String {
    let mut names: Vec<&str> = seed
        .planets
        .iter()
        .map(|p| p.kepler_name.as_str())
        .collect();
    names.sort_unstable();

    let mut hasher = Sha256::new();
    hasher.update(format!("planets/v{}\n", seed.schema_version).as_bytes());
    for name in names {
        hasher.update(name.as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}
