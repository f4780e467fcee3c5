use serde::{Deserialize, Serialize};

/// Client request to schedule a launch
///
/// Every field is optional at the type level so that an incomplete request
/// can be represented and rejected with a precise `MissingField` error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDraft {
    pub mission: Option<String>,
    pub rocket: Option<String>,
    /// Raw date text as received; parsed during validation
    pub launch_date: Option<String>,
    pub target: Option<String>,
    /// Accepted for wire compatibility; creation assigns the default list
    pub customers: Option<Vec<String>>,
}

impl LaunchDraft {
    pub fn new(
        mission: impl Into<String>,
        rocket: impl Into<String>,
        launch_date: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            mission: Some(mission.into()),
            rocket: Some(rocket.into()),
            launch_date: Some(launch_date.into()),
            target: Some(target.into()),
            customers: None,
        }
    }

    pub fn without_launch_date(mut self) -> Self {
        self.launch_date = None;
        self
    }

    pub fn with_launch_date(mut self, launch_date: impl Into<String>) -> Self {
        self.launch_date = Some(launch_date.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}
