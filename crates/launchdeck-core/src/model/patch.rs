use chrono::{DateTime, Utc};

use super::launch::LaunchRecord;

/// Partial update of a stored launch
///
/// Only the fields set to `Some` are merged; `flight_number` is never part of
/// a patch, so identity cannot change through it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchPatch {
    pub mission: Option<String>,
    pub rocket: Option<String>,
    pub launch_date: Option<DateTime<Utc>>,
    pub target: Option<String>,
    pub customers: Option<Vec<String>>,
    pub upcoming: Option<bool>,
    pub success: Option<bool>,
}

impl LaunchPatch {
    /// The abort transition: no longer upcoming, not successful
    pub fn abort() -> Self {
        Self {
            upcoming: Some(false),
            success: Some(false),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `record`, returning whether any field actually changed
    pub fn apply_to(&self, record: &mut LaunchRecord) -> bool {
        let mut changed = false;
        changed |= merge(&mut record.mission, &self.mission);
        changed |= merge(&mut record.rocket, &self.rocket);
        changed |= merge(&mut record.launch_date, &self.launch_date);
        if let Some(target) = &self.target {
            if record.target.as_ref() != Some(target) {
                record.target = Some(target.clone());
                changed = true;
            }
        }
        changed |= merge(&mut record.customers, &self.customers);
        changed |= merge(&mut record.upcoming, &self.upcoming);
        changed |= merge(&mut record.success, &self.success);
        changed
    }
}

fn merge<T: PartialEq + Clone>(slot: &mut T, value: &Option<T>) -> bool {
    match value {
        Some(v) if slot != v => {
            *slot = v.clone();
            true
        }
        _ => false,
    }
}
