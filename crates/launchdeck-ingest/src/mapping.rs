//! Upstream document to `LaunchRecord` mapping

use chrono::{DateTime, Utc};
use launchdeck_core::{LaunchError, LaunchRecord, Result};

use crate::upstream::UpstreamLaunch;

/// Map one upstream launch document to a record
///
/// - customers: every payload's customers, in payload order, duplicates kept
/// - launch_date: the instant `date_local` denotes, kept in UTC; the site's
///   local offset is discarded and cannot be recovered from the record
/// - upcoming and success: both taken from upstream `success`, null as false
/// - target: none, the upstream has no destination planet
///
/// # Errors
/// `Serialization` if `date_local` is not an RFC 3339 timestamp
pub fn map_upstream(doc: &UpstreamLaunch) -> Result<LaunchRecord> {
    let launch_date = DateTime::parse_from_rfc3339(&doc.date_local)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| LaunchError::Serialization {
            message: format!(
                "flight {}: bad date_local {:?}: {}",
                doc.flight_number, doc.date_local, e
            ),
        })?;

    let customers = doc
        .payloads
        .iter()
        .flat_map(|p| p.customers.iter().cloned())
        .collect();

    let success = doc.success.unwrap_or(false);

    Ok(LaunchRecord {
        flight_number: doc.flight_number,
        mission: doc.name.clone(),
        rocket: doc.rocket.name.clone(),
        launch_date,
        target: None,
        customers,
        // Mirrors the established catalog contents, where `upcoming` was
        // filled from upstream `success`.
        // TODO: switch to `doc.upcoming` once stored catalogs are re-synced
        upcoming: success,
        success,
    })
}
