//! Sorting.
//!
//! Elements only need [`PartialOrd`]. Incomparable elements (NaN for floats)
//! are ordered as if they were smaller than everything else and equal to each
//! other, which puts them first in ascending order and last in descending
//! order. All sorts are stable.

use std::cmp::Ordering;

/// The direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Orders `left` against `right` in this direction.
    #[must_use]
    pub fn order<T: PartialOrd + ?Sized>(self, left: &T, right: &T) -> Ordering {
        let ascending = ascending(left, right);
        match self {
            Self::Ascending => ascending,
            Self::Descending => ascending.reverse(),
        }
    }
}

fn is_incomparable<T: PartialOrd + ?Sized>(value: &T) -> bool {
    value.partial_cmp(value).is_none()
}

fn ascending<T: PartialOrd + ?Sized>(left: &T, right: &T) -> Ordering {
    left.partial_cmp(right).unwrap_or_else(|| {
        match (is_incomparable(left), is_incomparable(right)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    })
}

/// Returns the elements in ascending order.
///
/// ```rust
/// use collecta::functional::sort;
///
/// let sorted = sort(&[3.0, f64::NAN, 1.0]);
/// assert!(sorted[0].is_nan());
/// assert_eq!(&sorted[1..], [1.0, 3.0]);
/// ```
#[must_use]
pub fn sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    sorted(items, SortOrder::Ascending)
}

/// Returns the elements in descending order.
///
/// ```rust
/// use collecta::functional::sort_desc;
///
/// let sorted = sort_desc(&[3.0, f64::NAN, 1.0]);
/// assert_eq!(&sorted[..2], [3.0, 1.0]);
/// assert!(sorted[2].is_nan());
/// ```
#[must_use]
pub fn sort_desc<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    sorted(items, SortOrder::Descending)
}

fn sorted<T: PartialOrd + Clone>(items: &[T], order: SortOrder) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|left, right| order.order(left, right));
    sorted
}

/// Sorts by a key an extractor derives from `(item, index)`.
///
/// The extractor runs exactly once per element, in order, before any
/// comparison is made.
///
/// ```rust
/// use collecta::functional::{sort_by_key_with, SortOrder};
///
/// let words = ["ccc", "a", "bb"];
/// let sorted = sort_by_key_with(&words, SortOrder::Descending, |word, _| word.len());
/// assert_eq!(sorted, ["ccc", "bb", "a"]);
/// ```
pub fn sort_by_key_with<T, K, F>(items: &[T], order: SortOrder, mut extractor: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T, usize) -> K,
{
    let mut keyed: Vec<(K, &T)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (extractor(item, index), item))
        .collect();
    keyed.sort_by(|(left, _), (right, _)| order.order(left, right));
    keyed.into_iter().map(|(_, item)| item.clone()).collect()
}
