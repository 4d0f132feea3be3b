//! Replaying a splice list onto a copy of the previous array.

use thiserror::Error;

use crate::splice::Splice;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplyError {
    #[error("splice at {index} removes {count} elements but only {len} remain")]
    RemovedOutOfBounds { index: usize, count: usize, len: usize },
    #[error("splice at {index} adds {count} elements but the current array has {len}")]
    AddedOutOfBounds { index: usize, count: usize, len: usize },
}

/// Apply `splices` in order to `previous`, pulling added elements from
/// `current`.
///
/// When the splices were computed from `previous` to `current`, `previous`
/// ends up equal to `current`. Each splice is validated before it is applied;
/// on error the splices before it have already been applied.
///
/// ```
/// use array_splice::{apply_splices, calculate_splices};
///
/// let old = vec![1, 2, 3, 4, 5];
/// let current = vec![0, 1, 9, 4];
/// let splices = calculate_splices(&current, &old);
///
/// let mut patched = old.clone();
/// apply_splices(&mut patched, &current, &splices).unwrap();
/// assert_eq!(patched, current);
/// ```
pub fn apply_splices<T: Clone>(
    previous: &mut Vec<T>,
    current: &[T],
    splices: &[Splice<T>],
) -> Result<(), ApplyError> {
    for splice in splices {
        let Some(removed_end) = span_end(splice.index, splice.removed.len(), previous.len()) else {
            return Err(ApplyError::RemovedOutOfBounds {
                index: splice.index,
                count: splice.removed.len(),
                len: previous.len(),
            });
        };
        let Some(added_end) = span_end(splice.index, splice.added_count, current.len()) else {
            return Err(ApplyError::AddedOutOfBounds {
                index: splice.index,
                count: splice.added_count,
                len: current.len(),
            });
        };
        previous.splice(
            splice.index..removed_end,
            current[splice.index..added_end].iter().cloned(),
        );
    }
    Ok(())
}

/// End of `[index, index + count)` when it fits inside `len`.
fn span_end(index: usize, count: usize, len: usize) -> Option<usize> {
    index.checked_add(count).filter(|&end| end <= len)
}
