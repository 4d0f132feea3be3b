//! Snapshot-based dirty checking of an array.

use crate::calc::ArraySplice;
use crate::equality::{DefaultEquals, Equals};
use crate::splice::Splice;

/// Keeps a copy of the last seen array and reports splices against it.
///
/// ```
/// use array_splice::{ArrayObserver, Splice};
///
/// let mut items = vec!["a", "b"];
/// let mut observer = ArrayObserver::new(&items);
///
/// items.push("c");
/// assert_eq!(observer.check(&items), vec![Splice::new(2, vec![], 1)]);
/// assert!(observer.check(&items).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ArrayObserver<T, E = DefaultEquals> {
    snapshot: Vec<T>,
    differ: ArraySplice<E>,
}

impl<T: Clone + PartialEq> ArrayObserver<T, DefaultEquals> {
    pub fn new(initial: &[T]) -> Self {
        Self::with_equals(initial, DefaultEquals)
    }
}

impl<T: Clone, E: Equals<T>> ArrayObserver<T, E> {
    pub fn with_equals(initial: &[T], equals: E) -> Self {
        Self {
            snapshot: initial.to_vec(),
            differ: ArraySplice::with_equals(equals),
        }
    }

    /// The last snapshot taken.
    pub fn value(&self) -> &[T] {
        &self.snapshot
    }

    /// Splices from the snapshot to `current`; `current` becomes the new
    /// snapshot.
    pub fn check(&mut self, current: &[T]) -> Vec<Splice<T>> {
        let splices = self.differ.calculate_splices(current, &self.snapshot);
        self.discard_changes(current);
        splices
    }

    /// Take a new snapshot without reporting anything.
    pub fn discard_changes(&mut self, current: &[T]) {
        self.snapshot.clear();
        self.snapshot.extend_from_slice(current);
    }

    /// Run `callback` with the pending splices, if there are any.
    ///
    /// Returns whether the callback ran.
    pub fn deliver<F>(&mut self, current: &[T], callback: F) -> bool
    where
        F: FnOnce(&[Splice<T>]),
    {
        let splices = self.check(current);
        if splices.is_empty() {
            return false;
        }
        callback(&splices);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reports_and_resets() {
        let mut observer = ArrayObserver::new(&[1, 2, 3]);
        assert_eq!(observer.check(&[1, 3]), vec![Splice::new(1, vec![2], 0)]);
        assert_eq!(observer.value(), &[1, 3]);
        assert!(observer.check(&[1, 3]).is_empty());
    }

    #[test]
    fn test_discard_changes() {
        let mut observer = ArrayObserver::new(&["a"]);
        observer.discard_changes(&["b", "c"]);
        assert!(observer.check(&["b", "c"]).is_empty());
    }

    #[test]
    fn test_deliver_only_when_changed() {
        let mut observer = ArrayObserver::new(&[1]);
        let mut seen = Vec::new();
        assert!(!observer.deliver(&[1], |s| seen.extend_from_slice(s)));
        assert!(observer.deliver(&[1, 2], |s| seen.extend_from_slice(s)));
        assert_eq!(seen, vec![Splice::new(1, vec![], 1)]);
    }

    #[test]
    fn test_with_equals() {
        let mut observer =
            ArrayObserver::with_equals(&[1.0_f64, 2.0], |a: &f64, b: &f64| (a - b).abs() < 0.5);
        assert!(observer.check(&[1.1, 2.2]).is_empty());
        assert_eq!(observer.check(&[5.0, 2.2]), vec![Splice::new(0, vec![1.1], 1)]);
    }
}
