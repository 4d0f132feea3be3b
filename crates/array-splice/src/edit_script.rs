//! Edit script extraction from a filled [`DistanceMatrix`].

use crate::edit_distance::DistanceMatrix;
use crate::splice::EditOp;

/// Walk the matrix from the bottom-right corner back to the origin and return
/// the edit script in forward order.
///
/// Ties are broken the same way every time: `west` wins over `north` only when
/// strictly smaller, and the diagonal wins whenever it matches the minimum.
/// Two runs over the same matrix always produce the same script.
pub fn splice_operations_from_edit_distances(distances: &DistanceMatrix) -> Vec<EditOp> {
    if distances.row_count() == 0 || distances.column_count() == 0 {
        return Vec::new();
    }
    let mut i = distances.row_count() - 1;
    let mut j = distances.column_count() - 1;
    let mut current = distances.get(i, j);
    let mut edits = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        if i == 0 {
            edits.push(EditOp::Add);
            j -= 1;
            continue;
        }
        if j == 0 {
            edits.push(EditOp::Delete);
            i -= 1;
            continue;
        }

        let north_west = distances.get(i - 1, j - 1);
        let west = distances.get(i - 1, j);
        let north = distances.get(i, j - 1);

        let min = if west < north {
            if west < north_west { west } else { north_west }
        } else if north < north_west {
            north
        } else {
            north_west
        };

        if min == north_west {
            if north_west == current {
                edits.push(EditOp::Leave);
            } else {
                edits.push(EditOp::Update);
                current = north_west;
            }
            i -= 1;
            j -= 1;
        } else if min == west {
            edits.push(EditOp::Delete);
            i -= 1;
            current = west;
        } else {
            edits.push(EditOp::Add);
            j -= 1;
            current = north;
        }
    }

    edits.reverse();
    edits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit_distance::calc_edit_distances;
    use crate::equality::DefaultEquals;
    use EditOp::*;

    fn script<T: PartialEq>(current: &[T], old: &[T]) -> Vec<EditOp> {
        let m = calc_edit_distances(&DefaultEquals, current, 0..current.len(), old, 0..old.len());
        splice_operations_from_edit_distances(&m)
    }

    #[test]
    fn test_empty_matrix() {
        let m = DistanceMatrix::new(1, 1);
        assert!(splice_operations_from_edit_distances(&m).is_empty());
    }

    #[test]
    fn test_only_adds() {
        assert_eq!(script(&[1, 2], &[]), vec![Add, Add]);
    }

    #[test]
    fn test_only_deletes() {
        assert_eq!(script(&[], &[1, 2, 3]), vec![Delete, Delete, Delete]);
    }

    #[test]
    fn test_equal_is_all_leave() {
        assert_eq!(script(&["a", "b"], &["a", "b"]), vec![Leave, Leave]);
    }

    #[test]
    fn test_replacements_become_updates() {
        assert_eq!(script(&[9, 9], &[2, 3]), vec![Update, Update]);
    }

    #[test]
    fn test_swap_prefers_add_then_delete() {
        assert_eq!(script(&[2, 1], &[1, 2]), vec![Add, Leave, Delete]);
    }

    #[test]
    fn test_insert_after_equal() {
        assert_eq!(script(&[2, 9], &[2]), vec![Leave, Add]);
    }
}
