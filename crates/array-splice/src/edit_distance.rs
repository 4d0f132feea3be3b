//! Edit-distance matrix between two array ranges.
//!
//! A changed element is never charged as a single substitution: it costs a
//! delete plus an add, which biases the cheapest path toward keeping the
//! longest common subsequence intact.

use std::fmt;
use std::ops::Range;

use crate::equality::Equals;

/// Fixed-size grid of edit costs, stored row-major in a flat buffer.
///
/// Rows follow the old range (`old_len + 1`), columns follow the current range
/// (`current_len + 1`).
#[derive(Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    cells: Vec<usize>,
    row_count: usize,
    column_count: usize,
}

impl DistanceMatrix {
    /// Matrix with row 0 and column 0 set to their index, everything else 0.
    pub fn new(row_count: usize, column_count: usize) -> Self {
        let mut matrix = Self {
            cells: vec![0; row_count * column_count],
            row_count,
            column_count,
        };
        for i in 0..row_count {
            matrix.set(i, 0, i);
        }
        for j in 0..column_count {
            matrix.set(0, j, j);
        }
        matrix
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> usize {
        self.cells[row * self.column_count + column]
    }

    #[inline]
    pub fn set(&mut self, row: usize, column: usize, value: usize) {
        self.cells[row * self.column_count + column] = value;
    }

    /// Copy out as nested rows. Handy for assertions.
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.cells
            .chunks(self.column_count.max(1))
            .take(self.row_count)
            .map(<[usize]>::to_vec)
            .collect()
    }
}

impl fmt::Debug for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_rows()).finish()
    }
}

/// Fill the distance matrix for `current[current_range]` against
/// `old[old_range]`.
pub fn calc_edit_distances<T, E>(
    equals: &E,
    current: &[T],
    current_range: Range<usize>,
    old: &[T],
    old_range: Range<usize>,
) -> DistanceMatrix
where
    E: Equals<T> + ?Sized,
{
    let row_count = old_range.len() + 1;
    let column_count = current_range.len() + 1;
    let mut distances = DistanceMatrix::new(row_count, column_count);

    for i in 1..row_count {
        let old_item = &old[old_range.start + i - 1];
        for j in 1..column_count {
            let current_item = &current[current_range.start + j - 1];
            let cost = if equals.equals(current_item, old_item) {
                distances.get(i - 1, j - 1)
            } else {
                let north = distances.get(i - 1, j) + 1;
                let west = distances.get(i, j - 1) + 1;
                north.min(west)
            };
            distances.set(i, j, cost);
        }
    }

    distances
}
