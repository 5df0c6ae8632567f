//! Batch extraction built on [`any_get`](super::any_get).
//!
//! None of these helpers abort part way through a batch. An item whose key
//! cannot be read is either given `V::default()` ([`pluck`]) or left out
//! ([`key_by`], [`group_by`]). With the `tracing` feature enabled every such
//! item is reported as a `trace` event.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::{get, AccessError, AccessKey};
use crate::value::{FromValue, IntoValue};

#[cfg(feature = "tracing")]
fn skipped(operation: &'static str, index: usize, error: &AccessError) {
    tracing::trace!(operation, index, error = %error, "skipping item");
}

#[cfg(not(feature = "tracing"))]
const fn skipped(_operation: &'static str, _index: usize, _error: &AccessError) {}

fn extract<V, I>(item: &I, key: &AccessKey) -> Result<V, AccessError>
where
    V: FromValue,
    I: IntoValue,
{
    get(&item.to_value(), key).and_then(V::from_value)
}

// =============================================================================
// Keyed by AccessKey
// =============================================================================

/// Reads `key` from every item, substituting `V::default()` on failure.
///
/// The result always has one entry per item.
///
/// # Examples
///
/// ```rust
/// use collecta::access::pluck;
/// use collecta::value::Record;
///
/// let users = [
///     Record::new("User").with_field("Name", "Lucy"),
///     Record::new("User"),
/// ];
/// assert_eq!(pluck::<String, _>(&users, "Name"), ["Lucy", ""]);
/// ```
#[must_use]
pub fn pluck<V, I>(items: &[I], key: impl Into<AccessKey>) -> Vec<V>
where
    V: FromValue + Default,
    I: IntoValue,
{
    let key = key.into();
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            extract(item, &key).unwrap_or_else(|error| {
                skipped("pluck", index, &error);
                V::default()
            })
        })
        .collect()
}

/// Indexes items by the value read from `key`.
///
/// Later items overwrite earlier ones with the same extracted key. Items whose
/// key cannot be read are left out.
///
/// # Examples
///
/// ```rust
/// use collecta::access::key_by;
/// use collecta::value::{Record, Value};
///
/// let users = [
///     Record::new("User").with_field("ID", 193).with_field("Name", "Peter"),
///     Record::new("User").with_field("ID", 194).with_field("Name", "Peter"),
/// ];
/// let by_name = key_by::<String, _>(&users, "Name");
/// assert_eq!(by_name.len(), 1);
/// assert_eq!(by_name["Peter"].field("ID"), Some(&Value::from(194)));
/// ```
#[must_use]
pub fn key_by<V, I>(items: &[I], key: impl Into<AccessKey>) -> HashMap<V, I>
where
    V: FromValue + Eq + Hash,
    I: IntoValue + Clone,
{
    let key = key.into();
    let mut result = HashMap::new();
    for (index, item) in items.iter().enumerate() {
        match extract(item, &key) {
            Ok(extracted) => {
                result.insert(extracted, item.clone());
            }
            Err(error) => skipped("key_by", index, &error),
        }
    }
    result
}

/// Buckets items by the value read from `key`.
///
/// Each bucket keeps its items in their original order. Items whose key
/// cannot be read are left out.
///
/// # Examples
///
/// ```rust
/// use collecta::access::group_by;
/// use collecta::value::{Record, Value};
///
/// let users = [
///     Record::new("User").with_field("ID", 33).with_field("Age", 40),
///     Record::new("User").with_field("ID", 193).with_field("Age", 25),
///     Record::new("User").with_field("ID", 194).with_field("Age", 25),
/// ];
/// let by_age = group_by::<i32, _>(&users, "Age");
/// assert_eq!(by_age[&40].len(), 1);
/// assert_eq!(by_age[&25][1].field("ID"), Some(&Value::from(194)));
/// ```
#[must_use]
pub fn group_by<V, I>(items: &[I], key: impl Into<AccessKey>) -> HashMap<V, Vec<I>>
where
    V: FromValue + Eq + Hash,
    I: IntoValue + Clone,
{
    let key = key.into();
    let mut result: HashMap<V, Vec<I>> = HashMap::new();
    for (index, item) in items.iter().enumerate() {
        match extract(item, &key) {
            Ok(extracted) => result.entry(extracted).or_default().push(item.clone()),
            Err(error) => skipped("group_by", index, &error),
        }
    }
    result
}

// =============================================================================
// Keyed by extractor
// =============================================================================

/// Indexes items by the value an extractor derives from `(item, index)`.
///
/// The extractor runs exactly once per item, in order. Later items overwrite
/// earlier ones with the same key.
///
/// ```rust
/// use collecta::access::key_by_with;
///
/// let words = ["apple", "avocado", "banana"];
/// let by_initial = key_by_with(&words, |word, _| word.chars().next());
/// assert_eq!(by_initial[&Some('a')], "avocado");
/// ```
pub fn key_by_with<V, I, F>(items: &[I], mut extractor: F) -> HashMap<V, I>
where
    V: Eq + Hash,
    I: Clone,
    F: FnMut(&I, usize) -> V,
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| (extractor(item, index), item.clone()))
        .collect()
}

/// Buckets items by the value an extractor derives from `(item, index)`.
///
/// The extractor runs exactly once per item, in order. Each bucket keeps its
/// items in their original order.
///
/// ```rust
/// use collecta::access::group_by_with;
///
/// let numbers = [1, 2, 3, 4, 5];
/// let by_parity = group_by_with(&numbers, |number, _| number % 2 == 0);
/// assert_eq!(by_parity[&false], [1, 3, 5]);
/// assert_eq!(by_parity[&true], [2, 4]);
/// ```
pub fn group_by_with<V, I, F>(items: &[I], mut extractor: F) -> HashMap<V, Vec<I>>
where
    V: Eq + Hash,
    I: Clone,
    F: FnMut(&I, usize) -> V,
{
    let mut result: HashMap<V, Vec<I>> = HashMap::new();
    for (index, item) in items.iter().enumerate() {
        result
            .entry(extractor(item, index))
            .or_default()
            .push(item.clone());
    }
    result
}

// =============================================================================
// Map items
// =============================================================================

fn map_value<K, V, S, Q>(item: &HashMap<K, V, S>, key: &Q) -> V
where
    K: Eq + Hash + Borrow<Q>,
    V: Clone + Default,
    S: BuildHasher,
    Q: Eq + Hash + ?Sized,
{
    item.get(key).cloned().unwrap_or_default()
}

/// Reads `key` from every map, substituting `V::default()` when it is absent.
///
/// ```rust
/// use std::collections::HashMap;
/// use collecta::access::map_pluck;
///
/// let rows: Vec<HashMap<&str, i32>> = vec![
///     HashMap::from([("age", 40)]),
///     HashMap::from([("id", 7)]),
/// ];
/// assert_eq!(map_pluck(&rows, "age"), [40, 0]);
/// ```
#[must_use]
pub fn map_pluck<K, V, S, Q>(items: &[HashMap<K, V, S>], key: &Q) -> Vec<V>
where
    K: Eq + Hash + Borrow<Q>,
    V: Clone + Default,
    S: BuildHasher,
    Q: Eq + Hash + ?Sized,
{
    items.iter().map(|item| map_value(item, key)).collect()
}

/// Indexes maps by the value under `key`; absent keys index under
/// `V::default()`. Later maps overwrite earlier ones.
#[must_use]
pub fn map_key_by<K, V, S, Q>(
    items: &[HashMap<K, V, S>],
    key: &Q,
) -> HashMap<V, HashMap<K, V, S>>
where
    K: Eq + Hash + Borrow<Q>,
    V: Clone + Default + Eq + Hash,
    S: BuildHasher,
    HashMap<K, V, S>: Clone,
    Q: Eq + Hash + ?Sized,
{
    items
        .iter()
        .map(|item| (map_value(item, key), item.clone()))
        .collect()
}

/// Buckets maps by the value under `key`; absent keys bucket under
/// `V::default()`. Each bucket keeps its maps in their original order.
#[must_use]
pub fn map_group_by<K, V, S, Q>(
    items: &[HashMap<K, V, S>],
    key: &Q,
) -> HashMap<V, Vec<HashMap<K, V, S>>>
where
    K: Eq + Hash + Borrow<Q>,
    V: Clone + Default + Eq + Hash,
    S: BuildHasher,
    HashMap<K, V, S>: Clone,
    Q: Eq + Hash + ?Sized,
{
    let mut result: HashMap<V, Vec<HashMap<K, V, S>>> = HashMap::new();
    for item in items {
        result
            .entry(map_value(item, key))
            .or_default()
            .push(item.clone());
    }
    result
}
