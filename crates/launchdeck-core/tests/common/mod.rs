use std::sync::Arc;

use launchdeck_core::{
    LaunchDraft, LaunchLifecycleManager, LaunchRecord, LifecycleConfig, MemoryLaunchStore,
    MemoryPlanetCatalog,
};

#[allow(dead_code)]
pub const KNOWN_PLANET: &str = "Kepler-442 b";

/// Draft used throughout the lifecycle scenarios
#[allow(dead_code)]
pub fn kepler_draft() -> LaunchDraft {
    LaunchDraft::new(
        "Kepler Exploration X",
        "Explorer IS1",
        "2030-12-27",
        KNOWN_PLANET,
    )
}

/// A launch record with the given flight number and otherwise fixed fields
#[allow(dead_code)]
pub fn launch(flight_number: i64) -> LaunchRecord {
    let mut record = launchdeck_core::model::seed_launch();
    record.flight_number = flight_number;
    record.mission = format!("Mission {}", flight_number);
    record
}

/// Manager over in-memory collaborators, returning the store for inspection
#[allow(dead_code)]
pub fn manager_with(
    records: Vec<LaunchRecord>,
) -> (Arc<MemoryLaunchStore>, LaunchLifecycleManager) {
    let store = Arc::new(MemoryLaunchStore::with_records(records));
    let planets = Arc::new(MemoryPlanetCatalog::with_planets([
        KNOWN_PLANET,
        "Kepler-62 f",
        "Kepler-1649 b",
    ]));
    let manager = LaunchLifecycleManager::new(
        store.clone(),
        planets,
        LifecycleConfig::default(),
    );
    (store, manager)
}
