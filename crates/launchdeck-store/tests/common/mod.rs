use chrono::{TimeZone, Utc};
use launchdeck_core::{LaunchRecord, Planet};
use launchdeck_store::SqliteRepo;

#[allow(dead_code)]
pub const KNOWN_PLANET: &str = "Kepler-442 b";

/// Fresh in-memory repo with one known planet
pub fn repo_with_planet() -> SqliteRepo {
    let repo = SqliteRepo::open_in_memory().expect("Failed to open in-memory repo");
    repo.insert_planet(&Planet::new(KNOWN_PLANET))
        .expect("Failed to insert planet");
    repo
}

pub fn launch(flight_number: i64) -> LaunchRecord {
    LaunchRecord {
        flight_number,
        mission: format!("Mission {}", flight_number),
        rocket: "Explorer IS1".to_string(),
        launch_date: Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap(),
        target: Some(KNOWN_PLANET.to_string()),
        customers: vec!["ZTM".to_string(), "NASA".to_string()],
        upcoming: true,
        success: true,
    }
}
