//! Planet seed format v0
//!
//! ```yaml
//! schema_version: 0
//! planets:
//!   - kepler_name: Kepler-442 b
//! ```

use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanetSeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    #[serde(default)]
    pub planets: Vec<SeedPlanet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedPlanet {
    pub kepler_name: String,
}
