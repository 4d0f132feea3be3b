mod common;

use array_splice::{
    calculate_splices, create_initial_splices, project_array_splices, ArrayObserver,
    ChangeRecord, MutationFuzzer,
};
use common::{assert_disjoint, replay};

const SEEDS: u64 = 500;

#[test]
fn projected_records_replay_to_final_array() {
    let mut deletes = 0;
    for seed in 0..SEEDS {
        let mut fuzzer = MutationFuzzer::new(seed);
        let initial = fuzzer.random_array(12);
        let mut array = initial.clone();
        let steps = (seed % 9) as usize + 1;
        let records = fuzzer.mutate(&mut array, steps);
        deletes += records
            .iter()
            .filter(|record| matches!(record, ChangeRecord::Delete { .. }))
            .count();

        let splices = project_array_splices(&array, &records);
        assert_disjoint(&splices);
        assert_eq!(
            replay(&initial, &array, &splices),
            array,
            "seed {} initial {:?} records {:?}",
            fuzzer.seed,
            initial,
            records
        );
    }
    assert!(deletes > 0, "no delete records generated");
}

#[test]
fn merged_records_replay_to_final_array() {
    for seed in 0..SEEDS {
        let mut fuzzer = MutationFuzzer::new(seed ^ 0x5eed);
        let initial = fuzzer.random_array(10);
        let mut array = initial.clone();
        let records = fuzzer.mutate(&mut array, 6);

        let merged = create_initial_splices(&records);
        assert_disjoint(&merged);
        assert_eq!(replay(&initial, &array, &merged), array, "seed {}", fuzzer.seed);
    }
}

#[test]
fn snapshot_diff_replays_to_final_array() {
    for seed in 0..SEEDS {
        let mut fuzzer = MutationFuzzer::new(seed.wrapping_mul(31));
        let old = fuzzer.random_array(15);
        let current = fuzzer.random_array(15);

        let splices = calculate_splices(&current, &old);
        assert_disjoint(&splices);
        assert_eq!(replay(&old, &current, &splices), current, "seed {}", fuzzer.seed);
    }
}

#[test]
fn observer_tracks_a_mutating_array() {
    let mut fuzzer = MutationFuzzer::new(2024);
    let mut array = fuzzer.random_array(8);
    let mut observer = ArrayObserver::new(&array);

    for _ in 0..50 {
        let before = observer.value().to_vec();
        fuzzer.mutate(&mut array, 3);
        let splices = observer.check(&array);
        assert_eq!(replay(&before, &array, &splices), array);
        assert_eq!(observer.value(), array.as_slice());
    }
}
