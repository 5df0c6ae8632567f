//! Equality, search and de-duplication over slices.
//!
//! Elements are compared through [`compare`], so floats use tolerance
//! equality, NaN equals NaN, and nested containers compare by identity unless
//! stated otherwise.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::compare::{compare, ComparisonSet, Operator};
use crate::value::{IntoValue, Value};

/// Returns `true` when both slices have the same length and pairwise equal
/// elements.
///
/// Elements that are themselves sequences are compared element by element,
/// recursively, rather than by identity.
///
/// ```rust
/// use collecta::functional::same;
///
/// assert!(same(&[0.1 + 0.2, 1.0], &[0.3, 1.0]));
/// assert!(same(&[vec![1, 2], vec![3]], &[vec![1, 2], vec![3]]));
/// assert!(!same(&[1, 2], &[1, 2, 3]));
/// ```
#[must_use]
pub fn same<T: IntoValue>(items: &[T], target: &[T]) -> bool {
    items.len() == target.len()
        && items
            .iter()
            .zip(target)
            .all(|(left, right)| deep_equal(&left.to_value(), &right.to_value()))
}

fn deep_equal(left: &Value, right: &Value) -> bool {
    match (left.as_sequence(), right.as_sequence()) {
        (Some(a), Some(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        _ => compare(left, Operator::Eq, right),
    }
}

/// Returns the position of the first element equal to `target`.
///
/// ```rust
/// use collecta::functional::index_of;
///
/// assert_eq!(index_of(&["a", "b", "c"], &"b"), Some(1));
/// assert_eq!(index_of(&[1.5, f64::NAN], &f64::NAN), Some(1));
/// assert_eq!(index_of(&[1, 2], &3), None);
/// ```
#[must_use]
pub fn index_of<T: IntoValue>(items: &[T], target: &T) -> Option<usize> {
    let target = target.to_value();
    items
        .iter()
        .position(|item| compare(&item.to_value(), Operator::Eq, &target))
}

/// Returns `true` when some element equals `target`.
#[inline]
#[must_use]
pub fn contains<T: IntoValue>(items: &[T], target: &T) -> bool {
    index_of(items, target).is_some()
}

/// Returns the elements of `items` that do not occur in `target`.
///
/// ```rust
/// use collecta::functional::diff;
///
/// assert_eq!(diff(&[1, 2, 3, 4], &[2, 4]), [1, 3]);
/// ```
#[must_use]
pub fn diff<T: IntoValue + Clone>(items: &[T], target: &[T]) -> Vec<T> {
    items
        .iter()
        .filter(|item| !contains(target, item))
        .cloned()
        .collect()
}

/// Returns the first occurrence of every distinct element, in order.
///
/// Distinctness is decided by a loose-number [`ComparisonSet`]: integers of
/// different widths collide when their values are equal, floats stay apart
/// from integers.
///
/// ```rust
/// use collecta::functional::unique;
/// use collecta::value::Value;
///
/// assert_eq!(unique(&["a", "b", "a"]), ["a", "b"]);
/// assert_eq!(unique(&[Value::from(1i32), Value::from(1i64)]).len(), 1);
/// ```
#[must_use]
pub fn unique<T: IntoValue + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = ComparisonSet::new(true);
    items
        .iter()
        .filter(|item| seen.add(&item.to_value()))
        .cloned()
        .collect()
}

/// Returns every repeated element keyed by its position.
///
/// The first occurrence of a value is not included; each later occurrence is.
/// Values are matched as in [`unique`].
///
/// ```rust
/// use collecta::functional::duplicates;
///
/// let repeated = duplicates(&["a", "b", "a", "c", "b"]);
/// assert_eq!(repeated.into_iter().collect::<Vec<_>>(), [(2, "a"), (4, "b")]);
/// ```
#[must_use]
pub fn duplicates<T: IntoValue + Clone>(items: &[T]) -> BTreeMap<usize, T> {
    let mut seen = ComparisonSet::new(true);
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !seen.add(&item.to_value()))
        .map(|(index, item)| (index, item.clone()))
        .collect()
}

/// Counts the occurrences of every distinct element.
///
/// ```rust
/// use collecta::functional::count;
///
/// let counts = count(&["a", "b", "a"]);
/// assert_eq!(counts["a"], 2);
/// assert_eq!(counts["b"], 1);
/// ```
#[must_use]
pub fn count<T: Eq + Hash + Clone>(items: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[1.0, 2.0], &[1.0, 2.0 + 1e-12], true)]
    #[case(&[1.0, f64::NAN], &[1.0, f64::NAN], true)]
    #[case(&[1.0, 2.0], &[1.0, 2.1], false)]
    #[case(&[], &[], true)]
    fn test_same_floats(#[case] items: &[f64], #[case] target: &[f64], #[case] expected: bool) {
        assert_eq!(same(items, target), expected);
    }

    #[rstest]
    fn test_same_nested_sequences_are_deep() {
        let left = vec![vec![1, 2], vec![]];
        let right = vec![vec![1, 2], vec![]];
        assert!(same(&left, &right));
        assert!(!same(&left, &[vec![1, 2], vec![3]]));
    }

    #[rstest]
    fn test_index_of_nested_sequence_uses_identity() {
        let rows = vec![Value::sequence([1]), Value::sequence([2])];
        assert_eq!(index_of(&rows, &rows[1].clone()), Some(1));
        assert_eq!(index_of(&rows, &Value::sequence([2])), None);
    }

    #[rstest]
    fn test_diff_and_contains() {
        assert!(contains(&["x", "y"], &"y"));
        assert!(!contains::<&str>(&[], &"y"));
        assert_eq!(diff(&["x", "y", "z"], &["y"]), ["x", "z"]);
        assert!(diff(&[1, 2], &[1, 2]).is_empty());
    }

    #[rstest]
    fn test_unique_keeps_first_occurrence() {
        assert_eq!(unique(&[3, 1, 3, 2, 1]), [3, 1, 2]);
        assert_eq!(unique(&[f64::NAN, f64::NAN, 0.0, -0.0]).len(), 2);
    }

    #[rstest]
    fn test_unique_collapses_integer_widths() {
        let items = [Value::from(1i32), Value::from(1i64), Value::from(1u8), Value::from(1.0)];
        assert_eq!(unique(&items).len(), 2);
        assert_eq!(duplicates(&items).keys().copied().collect::<Vec<_>>(), [1, 2]);
    }

    #[rstest]
    fn test_duplicates_reports_later_positions() {
        let repeated = duplicates(&[1, 1, 2, 1]);
        assert_eq!(repeated.keys().copied().collect::<Vec<_>>(), [1, 3]);
        assert!(duplicates(&[1, 2, 3]).is_empty());
    }

    #[rstest]
    fn test_count() {
        let counts = count(&[1, 2, 2, 3, 3, 3]);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[&3], 3);
    }
}
