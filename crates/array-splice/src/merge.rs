//! Incremental merging of raw splices into an accumulated splice list.

use crate::splice::Splice;

/// Overlap between the half-open spans `[start1, end1)` and `[start2, end2)`.
///
/// Returns `None` when a gap separates them, `Some(0)` when they touch, and
/// the overlap length otherwise.
///
/// ```
/// use array_splice::intersect;
///
/// assert_eq!(intersect(0, 2, 3, 5), None);
/// assert_eq!(intersect(0, 3, 3, 5), Some(0));
/// assert_eq!(intersect(0, 4, 3, 5), Some(1));
/// assert_eq!(intersect(3, 4, 2, 8), Some(1));
/// ```
pub fn intersect(start1: usize, end1: usize, start2: usize, end2: usize) -> Option<usize> {
    if end1 < start2 || end2 < start1 {
        return None;
    }
    if end1 == start2 || end2 == start1 {
        return Some(0);
    }
    if start1 < start2 {
        Some(end1.min(end2) - start2)
    } else {
        Some(end1.min(end2) - start1)
    }
}

fn shift(index: usize, offset: isize) -> usize {
    match index.checked_add_signed(offset) {
        Some(shifted) => shifted,
        None => panic!("splice index {index} shifted by {offset} falls below zero"),
    }
}

/// Fold the raw splice `(index, removed, added_count)` into `splices`.
///
/// `splices` must be ordered and non-overlapping in current-array coordinates;
/// it stays that way. Entries overlapping or touching the new splice are
/// absorbed into it, entries after it have their index shifted by its net
/// length change, and a merge that cancels out entirely leaves nothing behind.
///
/// ```
/// use array_splice::{merge_splice, Splice};
///
/// let mut splices = Vec::new();
/// merge_splice(&mut splices, 3, vec![], 1);   // insert one element at 3
/// merge_splice(&mut splices, 0, vec![], 2);   // insert two at the front
/// assert_eq!(splices, vec![Splice::new(0, vec![], 2), Splice::new(5, vec![], 1)]);
///
/// merge_splice(&mut splices, 5, vec!["x"], 0); // delete what was inserted
/// assert_eq!(splices, vec![Splice::new(0, vec![], 2)]);
/// ```
pub fn merge_splice<T: Clone>(
    splices: &mut Vec<Splice<T>>,
    index: usize,
    removed: Vec<T>,
    added_count: usize,
) {
    // `None` once the candidate has been placed or cancelled out.
    let mut pending = Some(Splice::new(index, removed, added_count));
    let mut insertion_offset: isize = 0;

    let mut i = 0;
    while i < splices.len() {
        let current = &mut splices[i];
        current.index = shift(current.index, insertion_offset);

        let Some(splice) = pending.as_mut() else {
            i += 1;
            continue;
        };

        let overlap = intersect(
            splice.index,
            splice.removed_end(),
            current.index,
            current.added_end(),
        );

        if let Some(intersect_count) = overlap {
            let current = splices.remove(i);
            insertion_offset -= current.delta();

            splice.added_count += current.added_count - intersect_count;
            let delete_count = splice.removed.len() + current.removed.len() - intersect_count;

            if splice.added_count == 0 && delete_count == 0 {
                pending = None;
            } else {
                let mut removed = Vec::with_capacity(delete_count);
                if splice.index < current.index {
                    removed.extend_from_slice(&splice.removed[..current.index - splice.index]);
                }
                let current_index = current.index;
                let current_added_end = current.added_end();
                removed.extend(current.removed);
                if splice.removed_end() > current_added_end {
                    removed.extend_from_slice(&splice.removed[current_added_end - splice.index..]);
                }
                splice.removed = removed;
                splice.index = splice.index.min(current_index);
            }
            // the next entry has moved into slot `i`
            continue;
        }

        if splice.index < current.index {
            let offset = splice.delta();
            current.index = shift(current.index, offset);
            insertion_offset += offset;
            if let Some(splice) = pending.take() {
                splices.insert(i, splice);
            }
            i += 2;
            continue;
        }

        i += 1;
    }

    if let Some(splice) = pending {
        splices.push(splice);
    }
}
