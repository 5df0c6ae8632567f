//! Key selection over `HashMap`s.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns a map holding exactly `keys`.
///
/// A key absent from `items` is mapped to `V::default()`.
///
/// ```rust
/// use std::collections::HashMap;
/// use collecta::functional::only;
///
/// let ages = HashMap::from([("Hugo", 40), ("Lisa", 25), ("Iris", 31)]);
/// let picked = only(&ages, &["Hugo", "Mona"]);
/// assert_eq!(picked, HashMap::from([("Hugo", 40), ("Mona", 0)]));
/// ```
#[must_use]
pub fn only<K, V, S>(items: &HashMap<K, V, S>, keys: &[K]) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone + Default,
    S: BuildHasher + Default,
{
    keys.iter()
        .map(|key| (key.clone(), items.get(key).cloned().unwrap_or_default()))
        .collect()
}

/// Returns a copy of `items` without `keys`.
///
/// ```rust
/// use std::collections::HashMap;
/// use collecta::functional::except;
///
/// let ages = HashMap::from([("Hugo", 40), ("Lisa", 25)]);
/// assert_eq!(except(&ages, &["Hugo"]), HashMap::from([("Lisa", 25)]));
/// ```
#[must_use]
pub fn except<K, V, S>(items: &HashMap<K, V, S>, keys: &[K]) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    let mut remaining = items.clone();
    for key in keys {
        remaining.remove(key);
    }
    remaining
}

/// Returns the keys in iteration order.
#[must_use]
pub fn keys<K: Clone, V, S>(items: &HashMap<K, V, S>) -> Vec<K> {
    items.keys().cloned().collect()
}

/// Returns the entries of `items` whose key is absent from `target`.
///
/// ```rust
/// use std::collections::HashMap;
/// use collecta::functional::diff_keys;
///
/// let left = HashMap::from([("a", 1), ("b", 2)]);
/// let right = HashMap::from([("b", "x")]);
/// assert_eq!(diff_keys(&left, &right), HashMap::from([("a", 1)]));
/// ```
#[must_use]
pub fn diff_keys<K, V, W, S, T>(items: &HashMap<K, V, S>, target: &HashMap<K, W, T>) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Default,
    T: BuildHasher,
{
    items
        .iter()
        .filter(|(key, _)| !target.contains_key(*key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
