//! Property-based tests for filtering and row selection.
//!
//! Uses `proptest` to verify invariants across many random snapshot sets.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use azvm_cli::domain::{FilterCategory, PowerState, ResourceId, StatusSet, VmDetails};

fn label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("VM running".to_string()),
        Just("vm RUNNING".to_string()),
        Just("VM deallocated".to_string()),
        Just("VM Deallocated".to_string()),
        Just("VM stopping".to_string()),
        Just("VM starting".to_string()),
        Just("VM stopped".to_string()),
        "[A-Za-z ]{0,16}",
    ]
}

fn status_set() -> impl Strategy<Value = StatusSet> {
    prop::collection::vec(("[a-z0-9-]{1,12}", label(), any::<bool>()), 0..24).prop_map(|rows| {
        StatusSet::from_details(
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, label, failed))| {
                    let details = if failed {
                        VmDetails::query_failed()
                    } else {
                        VmDetails {
                            name,
                            power_state: PowerState::from_label(&label),
                        }
                    };
                    (ResourceId::new(format!("/vm/{i}")), details)
                })
                .collect(),
        )
    })
}

proptest! {
    /// Filter(All) is the whole set, in order.
    #[test]
    fn prop_all_passes_everything(set in status_set()) {
        let view = set.filter(FilterCategory::All);
        prop_assert_eq!(view.len(), set.len());
        for (row, snap) in view.rows().iter().zip(set.snapshots()) {
            prop_assert_eq!(*row, snap);
        }
    }

    /// Running and Deallocated views only hold matching labels and never overlap.
    #[test]
    fn prop_running_and_deallocated_are_disjoint(set in status_set()) {
        let running = set.filter(FilterCategory::Running);
        let deallocated = set.filter(FilterCategory::Deallocated);
        for s in running.rows() {
            prop_assert_eq!(s.power_state.label().to_lowercase(), "vm running");
        }
        for s in deallocated.rows() {
            prop_assert_eq!(s.power_state.label().to_lowercase(), "vm deallocated");
        }
        for r in running.rows() {
            prop_assert!(deallocated.rows().iter().all(|d| d.ordinal != r.ordinal));
        }
    }

    /// Filtered views keep ascending scan ordinals.
    #[test]
    fn prop_views_keep_ordinals(set in status_set()) {
        for category in FilterCategory::ALL {
            let ordinals: Vec<_> = set.filter(category).rows().iter().map(|s| s.ordinal).collect();
            prop_assert!(ordinals.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// Filtering twice gives the same view.
    #[test]
    fn prop_filter_is_idempotent(set in status_set()) {
        for category in FilterCategory::ALL {
            prop_assert_eq!(set.filter(category), set.filter(category));
        }
    }

    /// Row numbers outside 1..=len are always rejected, for every view.
    #[test]
    fn prop_out_of_range_rows_rejected(set in status_set(), row in -50i64..80) {
        for category in FilterCategory::ALL {
            let view = set.filter(category);
            let len = i64::try_from(view.len()).expect("small view");
            let result = view.resolve(row);
            if row >= 1 && row <= len {
                let idx = usize::try_from(row - 1).expect("positive");
                prop_assert_eq!(result.expect("in range"), &view.rows()[idx].id);
            } else {
                prop_assert!(result.is_err());
            }
        }
    }
}
