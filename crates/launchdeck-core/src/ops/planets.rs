use std::collections::HashSet;
use std::sync::RwLock;

use crate::errors::{LaunchError, Result};
use crate::model::Planet;

/// Read-only existence check against the planet catalog
pub trait PlanetLookup: Send + Sync {
    /// Whether a planet with this Kepler name exists
    ///
    /// # Errors
    /// `Persistence` if the catalog is unavailable
    fn exists(&self, kepler_name: &str) -> Result<bool>;
}

/// In-memory planet catalog
#[derive(Debug, Default)]
pub struct MemoryPlanetCatalog {
    names: RwLock<HashSet<String>>,
}

impl MemoryPlanetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_planets<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: RwLock::new(names.into_iter().map(Into::into).collect()),
        }
    }

    /// Add a planet; returns false if it was already known
    ///
    /// # Errors
    /// `Concurrency` if the catalog lock is poisoned
    pub fn insert(&self, planet: Planet) -> Result<bool> {
        let mut names = self
            .names
            .write()
            .map_err(|_| LaunchError::poisoned("planet catalog"))?;
        Ok(names.insert(planet.kepler_name))
    }
}

impl PlanetLookup for MemoryPlanetCatalog {
    fn exists(&self, kepler_name: &str) -> Result<bool> {
        let names = self
            .names
            .read()
            .map_err(|_| LaunchError::poisoned("planet catalog"))?;
        Ok(names.contains(kepler_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_exact_match() {
        let catalog = MemoryPlanetCatalog::with_planets(["Kepler-442 b"]);
        assert!(catalog.exists("Kepler-442 b").unwrap());
        assert!(!catalog.exists("kepler-442 b").unwrap());
        assert!(!catalog.exists("NonexistentPlanet").unwrap());
    }

    #[test]
    fn test_insert_reports_novelty() {
        let catalog = MemoryPlanetCatalog::new();
        assert!(catalog.insert(Planet::new("Kepler-62 f")).unwrap());
        assert!(!catalog.insert(Planet::new("Kepler-62 f")).unwrap());
    }
}
