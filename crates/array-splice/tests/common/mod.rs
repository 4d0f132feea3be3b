#![allow(dead_code)]

use array_splice::{apply_splices, Splice};

/// Replay `splices` onto a copy of `old` and return the result.
pub fn replay<T: Clone>(old: &[T], current: &[T], splices: &[Splice<T>]) -> Vec<T> {
    let mut patched = old.to_vec();
    apply_splices(&mut patched, current, splices).expect("splices must apply cleanly");
    patched
}

/// Ordered and non-overlapping in current-array coordinates.
pub fn assert_disjoint<T>(splices: &[Splice<T>]) {
    for pair in splices.windows(2) {
        assert!(
            pair[0].index + pair[0].added_count <= pair[1].index,
            "splice at {} (+{}) overlaps splice at {}",
            pair[0].index,
            pair[0].added_count,
            pair[1].index
        );
    }
}
