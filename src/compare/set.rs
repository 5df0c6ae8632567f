//! Hashed membership over runtime values.
//!
//! [`ComparisonSet`] answers "has an equal value been seen?" in O(1) average
//! time. Values are first reduced to a [`NormalizedValue`]; the set then maps
//! each normalized value to the kinds it was recorded under.
//!
//! # Loose-number mode
//!
//! With `loose_number` set, every number is recorded under its canonical kind
//! (`i64`, `u64` or `f64`), so `1i32` and `1u8` collide. Integers and floats
//! stay apart: `1` and `1.0` never collide.
//!
//! With `loose_number` unset, the declared kind must match as well, so `1i32`
//! and `1i64` are different members.
//!
//! ```rust
//! use collecta::compare::ComparisonSet;
//! use collecta::value::Value;
//!
//! let mut loose = ComparisonSet::new(true);
//! loose.add(&Value::from(1i32));
//! assert!(loose.has(&Value::from(1i64)));
//!
//! let mut strict = ComparisonSet::new(false);
//! strict.add(&Value::from(1i32));
//! assert!(!strict.has(&Value::from(1i64)));
//! ```

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::value::{Canonical, Identity, Kind, Value};

#[cfg(feature = "fxhash")]
type EntryHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type EntryHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type EntryHasher = std::collections::hash_map::RandomState;

// =============================================================================
// NormalizedValue
// =============================================================================

/// A hashable reduction of a [`Value`].
///
/// Reference-like kinds reduce to their identity token, numbers to one of
/// three 64-bit forms, floats to their bit pattern with every NaN and both
/// zeroes folded together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NormalizedValue {
    /// Nil.
    Nil,
    /// A boolean.
    Bool(bool),
    /// An integer that fits `i64`.
    Signed(i64),
    /// An integer above `i64::MAX`.
    Unsigned(u64),
    /// The bit pattern of a canonicalized float.
    Float(u64),
    /// Text.
    Text(String),
    /// The identity token of a sequence, mapping, reference or callable.
    Identity(Identity),
    /// A record, field by field.
    Record {
        /// The record's type name.
        type_name: String,
        /// Normalized fields in declaration order.
        fields: Vec<(String, NormalizedValue)>,
    },
}

impl NormalizedValue {
    /// Normalizes `value`.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Nil => Self::Nil,
            Value::Bool(flag) => Self::Bool(*flag),
            Value::Number(number) => Self::from(number.canonical()),
            Value::Text(text) => Self::Text(text.clone()),
            Value::Record(record) => Self::Record {
                type_name: record.type_name().to_owned(),
                fields: record
                    .fields()
                    .map(|(name, field)| (name.to_owned(), Self::of(field)))
                    .collect(),
            },
            Value::Sequence(_) | Value::Mapping(_) | Value::Reference(_) | Value::Callable(_) => {
                Self::Identity(value.identity().cloned().unwrap_or(Identity::NIL))
            }
        }
    }

    /// Returns `true` when `value` normalizes to `self`, without allocating.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Nil, Value::Nil) => true,
            (Self::Bool(flag), Value::Bool(other)) => flag == other,
            (Self::Text(text), Value::Text(other)) => text == other,
            (_, Value::Number(number)) => *self == Self::from(number.canonical()),
            (Self::Identity(identity), other) => other.identity() == Some(identity),
            (Self::Record { type_name, fields }, Value::Record(record)) => {
                type_name == record.type_name()
                    && fields.len() == record.len()
                    && fields
                        .iter()
                        .zip(record.fields())
                        .all(|((name, field), (other_name, other))| {
                            name == other_name && field.matches(other)
                        })
            }
            _ => false,
        }
    }
}

impl From<Canonical> for NormalizedValue {
    fn from(canonical: Canonical) -> Self {
        match canonical {
            Canonical::Signed(value) => Self::Signed(value),
            Canonical::Unsigned(value) => Self::Unsigned(value),
            Canonical::Float(value) => Self::Float(float_bits(value)),
        }
    }
}

fn float_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

// =============================================================================
// ComparisonSet
// =============================================================================

/// A set of runtime values keyed by their normalized form.
///
/// Created per operation; nothing outlives the call that builds it.
#[derive(Debug, Clone)]
pub struct ComparisonSet {
    loose_number: bool,
    entries: HashMap<NormalizedValue, SmallVec<[Kind; 2]>, EntryHasher>,
}

impl ComparisonSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new(loose_number: bool) -> Self {
        Self {
            loose_number,
            entries: HashMap::with_hasher(EntryHasher::default()),
        }
    }

    /// Returns whether numbers of different widths collide.
    #[inline]
    #[must_use]
    pub const fn is_loose_number(&self) -> bool {
        self.loose_number
    }

    /// Reduces `value` to the kind and normalized value it is recorded under.
    #[must_use]
    pub fn normalize(&self, value: &Value) -> (Kind, NormalizedValue) {
        let kind = match value {
            Value::Number(number) if self.loose_number => number.canonical().kind(),
            other => other.kind(),
        };
        (kind, NormalizedValue::of(value))
    }

    /// Records `value`. Returns `true` when it was not already present.
    pub fn add(&mut self, value: &Value) -> bool {
        let (kind, normalized) = self.normalize(value);
        let kinds = self.entries.entry(normalized).or_default();
        if kinds.contains(&kind) {
            false
        } else {
            kinds.push(kind);
            true
        }
    }

    /// Returns `true` when an equal value has been recorded.
    #[must_use]
    pub fn has(&self, value: &Value) -> bool {
        let (kind, normalized) = self.normalize(value);
        self.entries
            .get(&normalized)
            .is_some_and(|kinds| kinds.contains(&kind))
    }

    /// Returns the number of distinct members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(SmallVec::len).sum()
    }

    /// Returns `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<Value> for ComparisonSet {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, values: I) {
        for value in values {
            self.add(&value);
        }
    }
}

impl<'a> Extend<&'a Value> for ComparisonSet {
    fn extend<I: IntoIterator<Item = &'a Value>>(&mut self, values: I) {
        for value in values {
            self.add(value);
        }
    }
}

impl FromIterator<Value> for ComparisonSet {
    /// Collects into a loose-number set.
    fn from_iter<I: IntoIterator<Item = Value>>(values: I) -> Self {
        let mut set = Self::new(true);
        set.extend(values);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;
    use rstest::rstest;

    #[rstest]
    #[case(true, true)]
    #[case(false, false)]
    fn test_widths_collide_only_when_loose(#[case] loose: bool, #[case] expected: bool) {
        let mut set = ComparisonSet::new(loose);
        set.add(&Value::from(1i32));
        assert_eq!(set.has(&Value::from(1i64)), expected);
        assert!(set.has(&Value::from(1i32)));
    }

    #[rstest]
    fn test_integers_and_floats_stay_apart() {
        let mut set = ComparisonSet::new(true);
        set.add(&Value::from(1));
        assert!(!set.has(&Value::from(1.0)));
    }

    #[rstest]
    fn test_nan_and_signed_zero_fold() {
        let mut set = ComparisonSet::new(true);
        set.add(&Value::from(f64::NAN));
        set.add(&Value::from(-0.0));
        assert!(set.has(&Value::from(f64::NAN)));
        assert!(set.has(&Value::from(0.0f32)));
    }

    #[rstest]
    fn test_sequences_are_keyed_by_identity() {
        let first = Value::sequence([1, 2]);
        let mut set = ComparisonSet::new(true);
        set.add(&first);
        assert!(set.has(&first.clone()));
        assert!(!set.has(&Value::sequence([1, 2])));
    }

    #[rstest]
    fn test_dropped_members_are_never_confused_with_new_sequences() {
        let mut set = ComparisonSet::new(true);
        set.add(&Value::sequence([1, 2]));
        assert!(!set.has(&Value::sequence([7, 8])));
        assert!(!set.has(&Value::sequence([1, 2])));
    }

    #[rstest]
    #[case(Value::Nil)]
    #[case(Value::from(true))]
    #[case(Value::from(7u8))]
    #[case(Value::from(f64::NAN))]
    #[case(Value::from("Lucy"))]
    #[case(Value::sequence([1]))]
    #[case(Value::from(Record::new("User").with_field("id", 1u32)))]
    fn test_matches_agrees_with_normalization(#[case] value: Value) {
        let normalized = NormalizedValue::of(&value);
        assert!(normalized.matches(&value));
        assert!(normalized.matches(&value.clone()));
        assert!(!normalized.matches(&Value::from("other")));
    }

    #[rstest]
    fn test_matches_is_loose_on_numbers() {
        assert!(NormalizedValue::of(&Value::from(7i64)).matches(&Value::from(7u16)));
        assert!(!NormalizedValue::of(&Value::from(7i64)).matches(&Value::from(7.0)));
        let point = NormalizedValue::of(&Value::from(Record::new("Point").with_field("x", 1u8)));
        assert!(point.matches(&Value::from(Record::new("Point").with_field("x", 1i64))));
        assert!(!point.matches(&Value::from(Record::new("Point"))));
    }

    #[rstest]
    fn test_records_are_keyed_by_value() {
        let user = Value::from(Record::new("User").with_field("id", 1u32));
        let mut set = ComparisonSet::new(true);
        set.add(&user);
        assert!(set.has(&Value::from(Record::new("User").with_field("id", 1u32))));
        assert!(!set.has(&Value::from(Record::new("User").with_field("id", 2u32))));
    }

    #[rstest]
    fn test_add_reports_novelty_and_len_counts_kinds() {
        let mut set = ComparisonSet::new(false);
        assert!(set.add(&Value::from(1i32)));
        assert!(!set.add(&Value::from(1i32)));
        assert!(set.add(&Value::from(1i64)));
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_repeated_queries_are_idempotent() {
        let set: ComparisonSet = [Value::from("a"), Value::from(2u8)].into_iter().collect();
        for _ in 0..3 {
            assert!(set.has(&Value::from("a")));
            assert!(set.has(&Value::from(2i64)));
            assert!(!set.has(&Value::from("b")));
        }
    }
}
