#![allow(clippy::unwrap_used)]

mod common;

use common::launch;
use launchdeck_core::LaunchPatch;
use proptest::prelude::*;

fn patch_strategy() -> impl Strategy<Value = LaunchPatch> {
    (
        proptest::option::of("[A-Za-z ]{1,12}"),
        proptest::option::of("[A-Za-z0-9 ]{1,12}"),
        proptest::option::of(prop::collection::vec("[A-Z]{2,5}", 0..4)),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(mission, rocket, customers, upcoming, success)| LaunchPatch {
            mission,
            rocket,
            customers,
            upcoming,
            success,
            ..LaunchPatch::default()
        })
}

proptest! {
    #[test]
    fn prop_patch_never_changes_flight_number(n in 1i64..10_000, patch in patch_strategy()) {
        let mut record = launch(n);
        patch.apply_to(&mut record);
        prop_assert_eq!(record.flight_number, n);
    }

    #[test]
    fn prop_second_application_changes_nothing(n in 1i64..10_000, patch in patch_strategy()) {
        let mut record = launch(n);
        patch.apply_to(&mut record);
        let after_first = record.clone();

        prop_assert!(!patch.apply_to(&mut record));
        prop_assert_eq!(record, after_first);
    }

    #[test]
    fn prop_unset_fields_are_kept(n in 1i64..10_000, patch in patch_strategy()) {
        let original = launch(n);
        let mut record = original.clone();
        patch.apply_to(&mut record);

        if patch.mission.is_none() {
            prop_assert_eq!(&record.mission, &original.mission);
        }
        if patch.rocket.is_none() {
            prop_assert_eq!(&record.rocket, &original.rocket);
        }
        prop_assert_eq!(record.launch_date, original.launch_date);
        prop_assert_eq!(record.target, original.target);
    }
}
