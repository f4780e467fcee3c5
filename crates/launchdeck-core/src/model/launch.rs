use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A spaceflight launch, keyed by its flight number
///
/// This is the view handed to callers: storage-internal identifiers (row id,
/// bookkeeping timestamps) never appear here.
///
/// Equality compares `customers` as a multiset. The stored order is kept for
/// display but two records listing the same customers in a different order
/// are the same launch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRecord {
    /// Unique, monotonically assigned identifier
    pub flight_number: i64,

    pub mission: String,

    pub rocket: String,

    /// May lie in the past or the future
    pub launch_date: DateTime<Utc>,

    /// Kepler name of the destination planet
    ///
    /// Always set for locally scheduled launches. Records replaced by catalog
    /// ingestion carry no target because the upstream feed has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(default)]
    pub customers: Vec<String>,

    /// True until the launch resolves
    pub upcoming: bool,

    /// Meaningful once `upcoming` is false
    pub success: bool,
}

impl LaunchRecord {
    /// Whether this launch was aborted (or otherwise resolved unsuccessfully)
    pub fn is_aborted(&self) -> bool {
        !self.upcoming && !self.success
    }

    fn sorted_customers(&self) -> Vec<&str> {
        let mut customers: Vec<&str> = self.customers.iter().map(String::as_str).collect();
        customers.sort_unstable();
        customers
    }
}

impl PartialEq for LaunchRecord {
    fn eq(&self, other: &Self) -> bool {
        self.flight_number == other.flight_number
            && self.mission == other.mission
            && self.rocket == other.rocket
            && self.launch_date == other.launch_date
            && self.target == other.target
            && self.upcoming == other.upcoming
            && self.success == other.success
            && self.sorted_customers() == other.sorted_customers()
    }
}

impl Eq for LaunchRecord {}

/// The launch installed by `LaunchLifecycleManager::bootstrap` on a fresh store
pub fn seed_launch() -> LaunchRecord {
    LaunchRecord {
        flight_number: 100,
        mission: "Kepler Exploration X".to_string(),
        rocket: "Explorer IS1".to_string(),
        launch_date: Utc
            .with_ymd_and_hms(2030, 12, 27, 0, 0, 0)
            .single()
            .unwrap_or_default(),
        target: Some("Kepler-442 b".to_string()),
        customers: vec!["ZTM".to_string(), "NASA".to_string()],
        upcoming: true,
        success: true,
    }
}
