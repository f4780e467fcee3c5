use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use launchdeck_core::{LaunchError, Result};
use launchdeck_ingest::upstream::{UpstreamLaunch, UpstreamPayload, UpstreamRocket};
use launchdeck_ingest::LaunchFeed;

/// In-process feed returning a fixed catalog (or a fixed error)
pub struct FakeFeed {
    response: Mutex<Result<Vec<UpstreamLaunch>>>,
    calls: AtomicUsize,
}

impl FakeFeed {
    pub fn with_docs(docs: Vec<UpstreamLaunch>) -> Self {
        Self {
            response: Mutex::new(Ok(docs)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(err: LaunchError) -> Self {
        Self {
            response: Mutex::new(Err(err)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_docs(&self, docs: Vec<UpstreamLaunch>) {
        *self.response.lock().unwrap() = Ok(docs);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LaunchFeed for FakeFeed {
    async fn fetch_all(&self) -> Result<Vec<UpstreamLaunch>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.lock().unwrap().clone()
    }
}

pub fn upstream(
    flight_number: i64,
    name: &str,
    rocket: &str,
    customers: &[&[&str]],
) -> UpstreamLaunch {
    UpstreamLaunch {
        flight_number,
        name: name.to_string(),
        rocket: UpstreamRocket {
            name: rocket.to_string(),
        },
        date_local: "2006-03-25T10:30:00+12:00".to_string(),
        success: Some(true),
        upcoming: Some(false),
        payloads: customers
            .iter()
            .map(|c| UpstreamPayload {
                customers: c.iter().map(|s| s.to_string()).collect(),
            })
            .collect(),
    }
}

/// A small catalog that includes the sentinel launch
pub fn catalog() -> Vec<UpstreamLaunch> {
    vec![
        upstream(1, "FalconSat", "Falcon 1", &[&["DARPA"]]),
        upstream(2, "DemoSat", "Falcon 1", &[&["DARPA"]]),
        upstream(67, "CRS-16", "Falcon 9", &[&["NASA (CRS)"], &["NASA (CRS)", "SES"]]),
    ]
}
