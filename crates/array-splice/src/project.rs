//! Projection of raw change records onto a minimal splice list.
//!
//! Records arrive as an observation API would deliver them: native splice
//! notifications plus single-property `add`/`update`/`delete` events keyed by
//! property name. Index-named property events become one-element replacements.

use serde::{Deserialize, Serialize};

use crate::calc::ArraySplice;
use crate::equality::Equals;
use crate::merge::merge_splice;
use crate::splice::Splice;

/// A single raw mutation notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChangeRecord<T> {
    Splice {
        index: usize,
        #[serde(default = "Vec::new")]
        removed: Vec<T>,
        #[serde(rename = "addedCount")]
        added_count: usize,
    },
    Add {
        name: String,
        #[serde(default, rename = "oldValue")]
        old_value: T,
    },
    Update {
        name: String,
        #[serde(default, rename = "oldValue")]
        old_value: T,
    },
    Delete {
        name: String,
        #[serde(default, rename = "oldValue")]
        old_value: T,
    },
    /// Any record type this crate does not know about.
    #[serde(other)]
    Unknown,
}

impl<T> ChangeRecord<T> {
    pub fn splice(index: usize, removed: Vec<T>, added_count: usize) -> Self {
        ChangeRecord::Splice {
            index,
            removed,
            added_count,
        }
    }

    pub fn update(name: impl Into<String>, old_value: T) -> Self {
        ChangeRecord::Update {
            name: name.into(),
            old_value,
        }
    }

    pub fn add(name: impl Into<String>, old_value: T) -> Self {
        ChangeRecord::Add {
            name: name.into(),
            old_value,
        }
    }

    pub fn delete(name: impl Into<String>, old_value: T) -> Self {
        ChangeRecord::Delete {
            name: name.into(),
            old_value,
        }
    }
}

/// Parse a property name as an array index.
///
/// Accepts non-empty all-digit names up to `2^32 - 2`, the largest index an
/// array can hold.
///
/// ```
/// use array_splice::array_index;
///
/// assert_eq!(array_index("12"), Some(12));
/// assert_eq!(array_index("length"), None);
/// assert_eq!(array_index("-1"), None);
/// assert_eq!(array_index("4294967295"), None);
/// ```
pub fn array_index(name: &str) -> Option<usize> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match name.parse::<u32>() {
        Ok(index) if index != u32::MAX => Some(index as usize),
        _ => None,
    }
}

/// Merge every record into a coarse splice list without minimising it.
pub fn create_initial_splices<T: Clone>(records: &[ChangeRecord<T>]) -> Vec<Splice<T>> {
    let mut splices = Vec::new();
    for (position, record) in records.iter().enumerate() {
        match record {
            ChangeRecord::Splice {
                index,
                removed,
                added_count,
            } => merge_splice(&mut splices, *index, removed.clone(), *added_count),
            ChangeRecord::Add { name, old_value }
            | ChangeRecord::Update { name, old_value }
            | ChangeRecord::Delete { name, old_value } => {
                if let Some(index) = array_index(name) {
                    merge_splice(&mut splices, index, vec![old_value.clone()], 1);
                }
            }
            ChangeRecord::Unknown => {
                tracing::warn!(position, "skipping change record of unknown type");
            }
        }
    }
    splices
}

impl<E> ArraySplice<E> {
    /// Minimal splices describing `records` as applied to produce `array`.
    ///
    /// Merged one-for-one replacements whose old value equals the live value
    /// are dropped; every other merged splice is re-diffed against the live
    /// array.
    pub fn project_array_splices<T>(&self, array: &[T], records: &[ChangeRecord<T>]) -> Vec<Splice<T>>
    where
        T: Clone,
        E: Equals<T>,
    {
        let mut splices = Vec::new();
        for splice in create_initial_splices(records) {
            if splice.added_count == 1 && splice.removed.len() == 1 {
                let unchanged = array
                    .get(splice.index)
                    .is_some_and(|value| self.equals().equals(value, &splice.removed[0]));
                if unchanged {
                    tracing::debug!(index = splice.index, "dropping same-value replacement");
                } else {
                    splices.push(splice);
                }
                continue;
            }
            let removed_len = splice.removed.len();
            splices.extend(self.calc_splices(
                array,
                splice.index..splice.added_end(),
                &splice.removed,
                0..removed_len,
            ));
        }
        splices
    }
}

/// [`ArraySplice::project_array_splices`] with [`PartialEq`] comparison.
///
/// ```
/// use array_splice::{project_array_splices, ChangeRecord};
///
/// // index 2 went "x" -> "y" -> "x"
/// let array = vec!["a", "b", "x"];
/// let records = vec![ChangeRecord::update("2", "x"), ChangeRecord::update("2", "y")];
/// assert!(project_array_splices(&array, &records).is_empty());
/// ```
pub fn project_array_splices<T: Clone + PartialEq>(
    array: &[T],
    records: &[ChangeRecord<T>],
) -> Vec<Splice<T>> {
    ArraySplice::new().project_array_splices(array, records)
}
