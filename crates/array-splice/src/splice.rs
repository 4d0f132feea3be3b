//! Core types shared by the diff, merge, and projection passes.

use serde::{Deserialize, Serialize};

/// One contiguous edit region turning a previous array into the current one.
///
/// `index` is a position in the *current* array. `removed` is a snapshot of the
/// elements that used to live there, and `added_count` is how many elements of
/// the current array starting at `index` replaced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Splice<T> {
    pub index: usize,
    pub removed: Vec<T>,
    pub added_count: usize,
}

impl<T> Splice<T> {
    pub fn new(index: usize, removed: Vec<T>, added_count: usize) -> Self {
        Self {
            index,
            removed,
            added_count,
        }
    }

    /// End of the added span in current-array coordinates.
    pub fn added_end(&self) -> usize {
        self.index + self.added_count
    }

    /// End of the removed span, measured from `index`.
    pub fn removed_end(&self) -> usize {
        self.index + self.removed.len()
    }

    /// Net change in array length caused by this splice.
    pub fn delta(&self) -> isize {
        self.added_count as isize - self.removed.len() as isize
    }
}

/// A single step of an edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// Elements are equal; nothing changes.
    Leave,
    /// The old element is replaced by the current one.
    Update,
    /// A current element is inserted.
    Add,
    /// An old element is removed.
    Delete,
}
