use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::{LaunchError, Result};
use crate::model::LaunchDraft;

/// Naive date-time layouts accepted in addition to RFC 3339, interpreted as UTC
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Date-only layouts accepted, interpreted as midnight UTC
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"];

/// A draft that passed field and date validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub mission: String,
    pub rocket: String,
    pub launch_date: DateTime<Utc>,
    pub target: String,
}

/// Parse a launch date in any accepted layout
///
/// # Errors
/// * `InvalidDate` - if no layout matches
pub fn parse_launch_date(raw: &str) -> Result<DateTime<Utc>> {
    let text = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(midnight.and_utc());
            }
        }
    }

    Err(LaunchError::InvalidDate {
        value: raw.to_string(),
    })
}

/// Validate a client draft
///
/// Checks run in a fixed order so the reported error is deterministic:
/// every mandatory field is checked for presence first (mission, rocket,
/// launchDate, target), then the date is parsed. Planet existence is left to
/// the caller because it needs the catalog.
///
/// # Errors
/// * `MissingField` - a mandatory field is absent or empty
/// * `InvalidDate` - the launch date does not parse
pub fn validate_draft(draft: &LaunchDraft) -> Result<ValidDraft> {
    let mission = required(&draft.mission, "mission")?;
    let rocket = required(&draft.rocket, "rocket")?;
    let launch_date = required(&draft.launch_date, "launchDate")?;
    let target = required(&draft.target, "target")?;

    let launch_date = parse_launch_date(launch_date)?;

    Ok(ValidDraft {
        mission: mission.to_string(),
        rocket: rocket.to_string(),
        launch_date,
        target: target.to_string(),
    })
}

/// Blank (empty or whitespace-only) counts as absent
fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(LaunchError::MissingField {
            field: field.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let dt = parse_launch_date("2030-12-27").unwrap();
        assert_eq!(dt.to_rfc3339(), "2030-12-27T00:00:00+00:00");
    }

    #[test]
    fn test_parse_long_form_date() {
        let dt = parse_launch_date("December 27, 2030").unwrap();
        assert_eq!(dt, parse_launch_date("2030-12-27").unwrap());
    }

    #[test]
    fn test_parse_rfc3339_normalizes_to_utc() {
        let dt = parse_launch_date("2006-03-25T10:30:00+12:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2006-03-24T22:30:00+00:00");
    }

    #[test]
    fn test_parse_javascript_iso_string() {
        assert!(parse_launch_date("2030-12-27T00:00:00.000Z").is_ok());
    }

    #[test]
    fn test_reject_garbage() {
        assert_eq!(
            parse_launch_date("asd"),
            Err(LaunchError::InvalidDate {
                value: "asd".to_string()
            })
        );
    }

    #[test]
    fn test_reject_impossible_calendar_date() {
        assert!(parse_launch_date("2030-02-30").is_err());
    }
}
