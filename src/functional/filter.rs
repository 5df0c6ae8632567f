//! `where`-style filters.
//!
//! The plain variants test each element itself; the `_field` variants first
//! read a field, index or key from each element with [`get`]. Elements whose
//! field cannot be read never pass a field filter.
//!
//! Membership filters hash the candidate values into a loose-number
//! [`ComparisonSet`], so `1u8` matches `1i64` but never `1.0`.

use crate::access::{get, AccessKey};
use crate::compare::{compare, ComparisonSet, Operator};
use crate::value::{IntoValue, Value};

/// Keeps the elements for which `element <operator> target` holds.
///
/// ```rust
/// use collecta::compare::Operator;
/// use collecta::functional::filter_where;
///
/// assert_eq!(filter_where(&[1, 2, 3, 4], Operator::Lt, &3), [1, 2]);
/// assert_eq!(filter_where(&["a", "b"], Operator::Ne, &"a"), ["b"]);
/// ```
#[must_use]
pub fn filter_where<T, U>(items: &[T], operator: Operator, target: &U) -> Vec<T>
where
    T: IntoValue + Clone,
    U: IntoValue + ?Sized,
{
    let target = target.to_value();
    items
        .iter()
        .filter(|item| compare(&item.to_value(), operator, &target))
        .cloned()
        .collect()
}

/// Keeps the elements whose field `key` satisfies `field <operator> target`.
///
/// ```rust
/// use collecta::compare::Operator;
/// use collecta::functional::filter_where_field;
/// use collecta::value::Record;
///
/// let users = [
///     Record::new("User").with_field("Age", 40),
///     Record::new("User").with_field("Age", 25),
///     Record::new("User"),
/// ];
/// assert_eq!(filter_where_field(&users, "Age", Operator::Gt, &30).len(), 1);
/// ```
#[must_use]
pub fn filter_where_field<T, U>(
    items: &[T],
    key: impl Into<AccessKey>,
    operator: Operator,
    target: &U,
) -> Vec<T>
where
    T: IntoValue + Clone,
    U: IntoValue + ?Sized,
{
    let key = key.into();
    let target = target.to_value();
    items
        .iter()
        .filter(|item| field_of(*item, &key).is_some_and(|field| compare(&field, operator, &target)))
        .cloned()
        .collect()
}

/// Keeps the elements that occur in `candidates`.
///
/// ```rust
/// use collecta::functional::filter_where_in;
///
/// assert_eq!(filter_where_in(&[1, 2, 3], &[3u8, 1u8]), [1, 3]);
/// assert!(filter_where_in(&[1, 2, 3], &[1.0, 2.0]).is_empty());
/// ```
#[must_use]
pub fn filter_where_in<T, U>(items: &[T], candidates: &[U]) -> Vec<T>
where
    T: IntoValue + Clone,
    U: IntoValue,
{
    retain_by_membership(items, candidates, true, |item| Some(item.to_value()))
}

/// Keeps the elements that do not occur in `candidates`.
///
/// ```rust
/// use collecta::functional::filter_where_not_in;
///
/// assert_eq!(filter_where_not_in(&[1, 2, 3], &[2]), [1, 3]);
/// assert_eq!(filter_where_not_in(&[1, 2, 3], &[1.0, 2.0, 3.14]), [1, 2, 3]);
/// ```
#[must_use]
pub fn filter_where_not_in<T, U>(items: &[T], candidates: &[U]) -> Vec<T>
where
    T: IntoValue + Clone,
    U: IntoValue,
{
    retain_by_membership(items, candidates, false, |item| Some(item.to_value()))
}

/// Keeps the elements whose field `key` occurs in `candidates`.
#[must_use]
pub fn filter_where_field_in<T, U>(
    items: &[T],
    key: impl Into<AccessKey>,
    candidates: &[U],
) -> Vec<T>
where
    T: IntoValue + Clone,
    U: IntoValue,
{
    let key = key.into();
    retain_by_membership(items, candidates, true, |item| field_of(item, &key))
}

/// Keeps the elements whose field `key` can be read and does not occur in
/// `candidates`.
#[must_use]
pub fn filter_where_field_not_in<T, U>(
    items: &[T],
    key: impl Into<AccessKey>,
    candidates: &[U],
) -> Vec<T>
where
    T: IntoValue + Clone,
    U: IntoValue,
{
    let key = key.into();
    retain_by_membership(items, candidates, false, |item| field_of(item, &key))
}

fn field_of<T: IntoValue>(item: &T, key: &AccessKey) -> Option<Value> {
    get(&item.to_value(), key).ok()
}

fn retain_by_membership<T, U, F>(
    items: &[T],
    candidates: &[U],
    keep_members: bool,
    mut probe: F,
) -> Vec<T>
where
    T: Clone,
    U: IntoValue,
    F: FnMut(&T) -> Option<Value>,
{
    let set: ComparisonSet = candidates.iter().map(IntoValue::to_value).collect();
    items
        .iter()
        .filter(|item| probe(item).is_some_and(|value| set.has(&value) == keep_members))
        .cloned()
        .collect()
}
