//! Element equality used when comparing old and current arrays.

/// Decides whether an element of the current array matches an element of the
/// previous array.
///
/// Implemented for [`DefaultEquals`] and for every `Fn(&T, &T) -> bool`, so a
/// closure can be passed wherever a custom comparison is wanted.
///
/// # Examples
///
/// ```
/// use array_splice::{ArraySplice, Equals};
///
/// let case_insensitive = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
/// assert!(case_insensitive.equals(&"Ab", &"aB"));
///
/// let differ = ArraySplice::with_equals(case_insensitive);
/// assert!(differ.calculate_splices(&["A", "b"], &["a", "B"]).is_empty());
/// ```
pub trait Equals<T: ?Sized> {
    fn equals(&self, current: &T, old: &T) -> bool;
}

/// Equality through [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEquals;

impl<T: PartialEq + ?Sized> Equals<T> for DefaultEquals {
    fn equals(&self, current: &T, old: &T) -> bool {
        current == old
    }
}

impl<T: ?Sized, F> Equals<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, current: &T, old: &T) -> bool {
        self(current, old)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_equals() {
        assert!(DefaultEquals.equals(&1, &1));
        assert!(!DefaultEquals.equals(&1, &2));
    }

    #[test]
    fn test_default_equals_nan() {
        assert!(!DefaultEquals.equals(&f64::NAN, &f64::NAN));
    }

    #[test]
    fn test_closure_equals() {
        let same_parity = |a: &i32, b: &i32| a % 2 == b % 2;
        assert!(same_parity.equals(&1, &3));
        assert!(!same_parity.equals(&1, &4));
    }
}
