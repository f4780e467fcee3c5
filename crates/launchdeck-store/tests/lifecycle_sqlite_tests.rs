// The lifecycle manager running against the SQLite repo

mod common;

use std::sync::Arc;

use common::{launch, repo_with_planet, KNOWN_PLANET};
use launchdeck_core::model::seed_launch;
use launchdeck_core::{
    LaunchDraft, LaunchError, LaunchLifecycleManager, LaunchStore, LifecycleConfig, Planet,
};
use launchdeck_store::SqliteRepo;

fn manager(repo: Arc<SqliteRepo>) -> LaunchLifecycleManager {
    LaunchLifecycleManager::new(repo.clone(), repo, LifecycleConfig::default())
}

#[test]
fn test_end_to_end_scenario() {
    // Given: The seed launch (flight 100) is the only record
    let repo = Arc::new(repo_with_planet());
    let manager = manager(repo.clone());
    assert!(manager.bootstrap(&seed_launch()).unwrap());

    // When: A launch is scheduled
    let draft = LaunchDraft::new(
        "Kepler Exploration Y",
        "Explorer IS2",
        "January 17, 2031",
        KNOWN_PLANET,
    );
    let created = manager.create(&draft).unwrap();

    // Then: It gets flight 101 and is stored fully populated
    assert_eq!(created.flight_number, 101);
    assert_eq!(repo.find_by_flight_number(101).unwrap(), Some(created.clone()));
    assert_eq!(created.customers, vec!["Zero To Mastery", "NASA"]);
    assert!(manager.exists(101).unwrap());

    // And: Aborting it flips status only
    assert!(manager.abort(101).unwrap());
    let aborted = repo.find_by_flight_number(101).unwrap().unwrap();
    assert!(aborted.is_aborted());
    assert_eq!(aborted.mission, created.mission);
}

#[test]
fn test_unknown_target_persists_nothing() {
    let repo = Arc::new(repo_with_planet());
    let manager = manager(repo.clone());

    let draft = LaunchDraft::new("M", "R", "2030-01-01", "NonexistentPlanet");
    let err = manager.create(&draft).unwrap_err();

    assert!(matches!(err, LaunchError::UnknownTarget { .. }));
    assert_eq!(repo.count_launches().unwrap(), 0);
}

#[test]
fn test_bootstrap_keeps_aborted_seed() {
    let repo = Arc::new(repo_with_planet());
    let manager = manager(repo.clone());
    manager.bootstrap(&seed_launch()).unwrap();
    manager.abort(100).unwrap();

    assert!(!manager.bootstrap(&seed_launch()).unwrap());
    assert!(repo.find_by_flight_number(100).unwrap().unwrap().is_aborted());
}

#[test]
fn test_concurrent_creates_get_distinct_numbers() {
    let repo = Arc::new(repo_with_planet());
    repo.upsert(&launch(100)).unwrap();
    let manager = Arc::new(manager(repo.clone()));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let manager = Arc::clone(&manager);
            std::thread::spawn(move || {
                let draft =
                    LaunchDraft::new(format!("M{}", i), "R", "2031-05-05", KNOWN_PLANET);
                manager.create(&draft).unwrap().flight_number
            })
        })
        .collect();

    let mut numbers: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    numbers.sort_unstable();
    assert_eq!(numbers, (101..=108).collect::<Vec<_>>());
}

// Two repos on one file stand in for two `launchdeck` processes: each has its
// own connection and its own manager, so no in-process lock is shared.
#[test]
fn test_creates_from_two_connections_get_distinct_numbers() {
    const PER_WRITER: i64 = 50;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("launches.db");

    let first = Arc::new(SqliteRepo::open(&path).unwrap());
    first.insert_planet(&Planet::new(KNOWN_PLANET)).unwrap();
    first.upsert(&launch(100)).unwrap();
    let second = Arc::new(SqliteRepo::open(&path).unwrap());

    let handles: Vec<_> = [Arc::clone(&first), second]
        .into_iter()
        .enumerate()
        .map(|(writer, repo)| {
            std::thread::spawn(move || {
                let manager = manager(repo);
                (0..PER_WRITER)
                    .map(|i| {
                        let draft = LaunchDraft::new(
                            format!("W{}-{}", writer, i),
                            "R",
                            "2031-05-05",
                            KNOWN_PLANET,
                        );
                        manager.create(&draft).unwrap().flight_number
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut numbers: Vec<i64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    numbers.sort_unstable();

    assert_eq!(numbers, (101..=100 + 2 * PER_WRITER).collect::<Vec<_>>());
    assert_eq!(
        first.count_launches().unwrap(),
        1 + 2 * PER_WRITER as usize,
        "no create overwrote another"
    );
}

#[test]
fn test_create_after_highest_number_fails_cleanly() {
    let repo = Arc::new(repo_with_planet());
    repo.upsert(&launch(i64::MAX)).unwrap();
    let manager = manager(repo.clone());

    let draft = LaunchDraft::new("Overflow", "R", "2031-05-05", KNOWN_PLANET);
    let err = manager.create(&draft).unwrap_err();

    assert!(matches!(err, LaunchError::InvalidInput { .. }));
    assert_eq!(repo.count_launches().unwrap(), 1);
    assert_eq!(
        repo.find_by_flight_number(i64::MAX).unwrap(),
        Some(launch(i64::MAX))
    );
}
