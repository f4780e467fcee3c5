//! Planet catalog seed import
//!
//! Provides:
//! - Planet seed format v0 schema
//! - YAML parser with validation
//! - Digest canonicalization
//! - Importer with provenance in `seed_imports`

pub mod digest;
pub mod format_v0;
pub mod importer;
pub mod parser;

pub use digest::compute_seed_digest;
pub use format_v0::{PlanetSeedV0, SeedPlanet};
pub use importer::{import_planet_seed, SeedImportReport};
pub use parser::{parse_seed_file, parse_seed_str};
