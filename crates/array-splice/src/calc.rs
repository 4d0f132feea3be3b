//! Splice calculation between two array snapshots.

use std::ops::Range;

use crate::edit_distance::{calc_edit_distances, DistanceMatrix};
use crate::edit_script::splice_operations_from_edit_distances;
use crate::equality::{DefaultEquals, Equals};
use crate::splice::{EditOp, Splice};

/// Array differ parameterised by its element comparison.
///
/// # Examples
///
/// ```
/// use array_splice::{ArraySplice, Splice};
///
/// let differ = ArraySplice::new();
/// let splices = differ.calculate_splices(&[1, 9, 9, 4, 5], &[1, 2, 3, 4, 5]);
/// assert_eq!(splices, vec![Splice::new(1, vec![2, 3], 2)]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ArraySplice<E = DefaultEquals> {
    equals: E,
}

impl ArraySplice<DefaultEquals> {
    pub fn new() -> Self {
        Self {
            equals: DefaultEquals,
        }
    }
}

impl<E> ArraySplice<E> {
    /// Differ using a custom comparison, e.g. a closure `|a, b| ...`.
    pub fn with_equals(equals: E) -> Self {
        Self { equals }
    }

    pub fn equals(&self) -> &E {
        &self.equals
    }

    pub fn calc_edit_distances<T>(
        &self,
        current: &[T],
        current_range: Range<usize>,
        old: &[T],
        old_range: Range<usize>,
    ) -> DistanceMatrix
    where
        E: Equals<T>,
    {
        calc_edit_distances(&self.equals, current, current_range, old, old_range)
    }

    /// Splices turning `old[old_range]` into `current[current_range]`.
    ///
    /// The shared prefix is only stripped when both ranges start at 0, and the
    /// shared suffix only when both ranges run to the end of their arrays.
    pub fn calc_splices<T>(
        &self,
        current: &[T],
        current_range: Range<usize>,
        old: &[T],
        old_range: Range<usize>,
    ) -> Vec<Splice<T>>
    where
        T: Clone,
        E: Equals<T>,
    {
        let Range {
            start: mut current_start,
            end: mut current_end,
        } = current_range;
        let Range {
            start: mut old_start,
            end: mut old_end,
        } = old_range;

        let min_length = (current_end - current_start).min(old_end - old_start);
        let prefix_count = if current_start == 0 && old_start == 0 {
            self.shared_prefix(current, old, min_length)
        } else {
            0
        };
        let suffix_count = if current_end == current.len() && old_end == old.len() {
            self.shared_suffix(current, old, min_length - prefix_count)
        } else {
            0
        };

        current_start += prefix_count;
        old_start += prefix_count;
        current_end -= suffix_count;
        old_end -= suffix_count;

        if current_start == current_end && old_start == old_end {
            return Vec::new();
        }
        if current_start == current_end {
            return vec![Splice::new(
                current_start,
                old[old_start..old_end].to_vec(),
                0,
            )];
        }
        if old_start == old_end {
            return vec![Splice::new(current_start, Vec::new(), current_end - current_start)];
        }

        tracing::trace!(
            current_len = current_end - current_start,
            old_len = old_end - old_start,
            "computing edit distances"
        );
        let distances =
            self.calc_edit_distances(current, current_start..current_end, old, old_start..old_end);
        let ops = splice_operations_from_edit_distances(&distances);

        let mut splice: Option<Splice<T>> = None;
        let mut splices = Vec::new();
        let mut index = current_start;
        let mut old_index = old_start;
        for op in ops {
            match op {
                EditOp::Leave => {
                    if let Some(done) = splice.take() {
                        splices.push(done);
                    }
                    index += 1;
                    old_index += 1;
                }
                EditOp::Update => {
                    let open = splice.get_or_insert_with(|| Splice::new(index, Vec::new(), 0));
                    open.added_count += 1;
                    open.removed.push(old[old_index].clone());
                    index += 1;
                    old_index += 1;
                }
                EditOp::Add => {
                    let open = splice.get_or_insert_with(|| Splice::new(index, Vec::new(), 0));
                    open.added_count += 1;
                    index += 1;
                }
                EditOp::Delete => {
                    let open = splice.get_or_insert_with(|| Splice::new(index, Vec::new(), 0));
                    open.removed.push(old[old_index].clone());
                    old_index += 1;
                }
            }
        }
        if let Some(done) = splice {
            splices.push(done);
        }
        splices
    }

    /// Splices turning the whole `previous` array into the whole `current` one.
    pub fn calculate_splices<T>(&self, current: &[T], previous: &[T]) -> Vec<Splice<T>>
    where
        T: Clone,
        E: Equals<T>,
    {
        self.calc_splices(current, 0..current.len(), previous, 0..previous.len())
    }

    fn shared_prefix<T>(&self, current: &[T], old: &[T], search_length: usize) -> usize
    where
        E: Equals<T>,
    {
        (0..search_length)
            .find(|&i| !self.equals.equals(&current[i], &old[i]))
            .unwrap_or(search_length)
    }

    fn shared_suffix<T>(&self, current: &[T], old: &[T], search_length: usize) -> usize
    where
        E: Equals<T>,
    {
        current
            .iter()
            .rev()
            .zip(old.iter().rev())
            .take(search_length)
            .take_while(|(c, o)| self.equals.equals(*c, *o))
            .count()
    }
}

/// [`ArraySplice::calculate_splices`] with [`PartialEq`] comparison.
pub fn calculate_splices<T: Clone + PartialEq>(current: &[T], previous: &[T]) -> Vec<Splice<T>> {
    ArraySplice::new().calculate_splices(current, previous)
}
