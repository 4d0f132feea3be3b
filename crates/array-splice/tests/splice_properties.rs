mod common;

use array_splice::{calculate_splices, merge_splice, project_array_splices, MutationFuzzer};
use common::replay;
use proptest::prelude::*;

fn small_array() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..16)
}

proptest! {
    /// Diffing an array against itself finds nothing.
    #[test]
    fn identical_arrays_have_no_splices(array in small_array()) {
        prop_assert!(calculate_splices(&array, &array).is_empty());
        let copy = array.clone();
        prop_assert!(calculate_splices(&array, &copy).is_empty());
    }

    /// Applying the diff to the old array reproduces the current one.
    #[test]
    fn splices_reproduce_current(old in small_array(), current in small_array()) {
        let splices = calculate_splices(&current, &old);
        prop_assert_eq!(replay(&old, &current, &splices), current);
    }

    /// No splice ever describes an unchanged region.
    #[test]
    fn splices_are_never_empty(old in small_array(), current in small_array()) {
        for splice in calculate_splices(&current, &old) {
            prop_assert!(splice.added_count > 0 || !splice.removed.is_empty());
        }
    }

    /// The merged list stays ordered and disjoint after every merge.
    #[test]
    fn merge_keeps_splices_disjoint(seed in any::<u64>(), steps in 1usize..12) {
        let mut fuzzer = MutationFuzzer::new(seed);
        let mut array = fuzzer.random_array(10);
        let records = fuzzer.mutate(&mut array, steps);

        let mut splices = Vec::new();
        for record in records {
            if let array_splice::ChangeRecord::Splice { index, removed, added_count } = record {
                merge_splice(&mut splices, index, removed, added_count);
            }
            for pair in splices.windows(2) {
                prop_assert!(pair[0].index + pair[0].added_count <= pair[1].index);
            }
        }
    }

    /// Projection of any random mutation stream replays to the final array.
    #[test]
    fn projection_replays(seed in any::<u64>(), steps in 1usize..10) {
        let mut fuzzer = MutationFuzzer::new(seed);
        let initial = fuzzer.random_array(10);
        let mut array = initial.clone();
        let records = fuzzer.mutate(&mut array, steps);

        let splices = project_array_splices(&array, &records);
        prop_assert_eq!(replay(&initial, &array, &splices), array);
    }
}
