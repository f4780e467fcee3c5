use serde::{Deserialize, Serialize};

/// A habitable planet that launches may target
///
/// Only existence matters to the launch lifecycle; the name is the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub kepler_name: String,
}

impl Planet {
    pub fn new(kepler_name: impl Into<String>) -> Self {
        Self {
            kepler_name: kepler_name.into(),
        }
    }
}
