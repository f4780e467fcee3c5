// Integration tests for SqliteRepo as a LaunchStore

mod common;

use common::{launch, repo_with_planet};
use launchdeck_core::{LaunchPatch, LaunchStore, Pagination};

#[test]
fn test_empty_store_has_no_latest() {
    let repo = repo_with_planet();
    assert!(repo.find_latest().unwrap().is_none());
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn test_latest_is_highest_flight_number() {
    // Given: Launches inserted out of order
    let repo = repo_with_planet();
    for n in [5, 120, 17] {
        repo.upsert(&launch(n)).unwrap();
    }

    // Then: The latest is the maximum and listing is ascending
    assert_eq!(repo.find_latest().unwrap().unwrap().flight_number, 120);
    let numbers: Vec<i64> = repo
        .list_all()
        .unwrap()
        .iter()
        .map(|r| r.flight_number)
        .collect();
    assert_eq!(numbers, vec![5, 17, 120]);
}

#[test]
fn test_upsert_is_full_replace() {
    // Given: A stored launch with a target
    let repo = repo_with_planet();
    repo.upsert(&launch(7)).unwrap();

    // When: A record for the same flight without a target is upserted
    let mut replacement = launch(7);
    replacement.mission = "Replaced".to_string();
    replacement.target = None;
    replacement.customers = vec!["SES".to_string(), "SES".to_string()];
    repo.upsert(&replacement).unwrap();

    // Then: The stored record equals the replacement exactly
    let stored = repo.find_by_flight_number(7).unwrap().unwrap();
    assert_eq!(stored, replacement);
    assert_eq!(stored.target, None);
    assert_eq!(stored.customers.len(), 2);
    assert_eq!(repo.count_launches().unwrap(), 1);
}

#[test]
fn test_partial_update_merges_only_given_fields() {
    let repo = repo_with_planet();
    let original = launch(9);
    repo.upsert(&original).unwrap();

    assert!(repo.apply_partial_update(9, &LaunchPatch::abort()).unwrap());

    let stored = repo.find_by_flight_number(9).unwrap().unwrap();
    assert!(!stored.upcoming);
    assert!(!stored.success);
    assert_eq!(stored.mission, original.mission);
    assert_eq!(stored.rocket, original.rocket);
    assert_eq!(stored.launch_date, original.launch_date);
    assert_eq!(stored.target, original.target);
    assert_eq!(stored.customers, original.customers);
}

#[test]
fn test_partial_update_reports_no_change() {
    let repo = repo_with_planet();
    repo.upsert(&launch(9)).unwrap();

    // Unknown flight
    assert!(!repo.apply_partial_update(404, &LaunchPatch::abort()).unwrap());
    assert_eq!(repo.count_launches().unwrap(), 1);

    // Already aborted
    assert!(repo.apply_partial_update(9, &LaunchPatch::abort()).unwrap());
    assert!(!repo.apply_partial_update(9, &LaunchPatch::abort()).unwrap());
}

#[test]
fn test_list_page_windows_ordering() {
    let repo = repo_with_planet();
    for n in 1..=5 {
        repo.upsert(&launch(n)).unwrap();
    }

    let page: Vec<i64> = repo
        .list_page(Pagination::page(2, 2))
        .unwrap()
        .iter()
        .map(|r| r.flight_number)
        .collect();
    assert_eq!(page, vec![3, 4]);

    assert_eq!(repo.list_page(Pagination::page(1, 0)).unwrap().len(), 5);
}

#[test]
fn test_upsert_many_writes_batch() {
    let repo = repo_with_planet();
    let batch: Vec<_> = (1..=3).map(launch).collect();

    assert_eq!(repo.upsert_many(&batch).unwrap(), 3);
    assert_eq!(repo.list_all().unwrap(), batch);
}

#[test]
fn test_records_survive_reopen() {
    // Given: A launch written to an on-disk database
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("launchdeck.db");
    {
        let repo = launchdeck_store::SqliteRepo::open(&path).unwrap();
        repo.upsert(&launch(42)).unwrap();
    }

    // When: The database is reopened
    let repo = launchdeck_store::SqliteRepo::open(&path).unwrap();

    // Then: The launch is still there
    assert_eq!(repo.find_by_flight_number(42).unwrap(), Some(launch(42)));
}
