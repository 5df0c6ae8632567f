//! Loose comparison of runtime values.
//!
//! This module provides the universal comparator [`compare`], the numeric
//! comparators it delegates to, and [`ComparisonSet`] for hashed membership.
//!
//! # Totality
//!
//! `compare` never fails. Every combination of kinds and operators yields a
//! boolean, so callers can filter with it without checking anything:
//!
//! | Left / Right               | `=`                 | `!=`      | orderings | `in` / `not in`        |
//! |----------------------------|---------------------|-----------|-----------|------------------------|
//! | nil / nil                  | `true`              | `false`   | `false`   | `false`                |
//! | nil / non-nil (either way) | `false`             | `true`    | `false`   | `false` / `true`       |
//! | number / number            | widened comparison  |           |           | element scan           |
//! | number / non-number        | `false`             | `true`    | `false`   | element scan           |
//! | different kinds            | `false`             | `true`    | `false`   | element scan           |
//! | bool, text, record         | value equality      |           | `false`   | element scan           |
//! | sequence, mapping, ...     | identity equality   |           | `false`   | element scan           |
//!
//! # Examples
//!
//! ```rust
//! use collecta::compare::{compare, Operator};
//! use collecta::value::Value;
//!
//! assert!(compare(&Value::Nil, Operator::Eq, &Value::Nil));
//! assert!(compare(&Value::from(2u8), Operator::Lt, &Value::from(3i64)));
//! assert!(compare(&Value::from(2), Operator::In, &Value::sequence([1, 2, 3])));
//! assert!(!compare(&Value::from("a"), Operator::Lt, &Value::from("b")));
//! ```

mod number;
mod set;

pub use number::{any_number_compare, compare_mixed, compare_numbers, Numeric, FLOAT_TOLERANCE};
pub use set::{ComparisonSet, NormalizedValue};

use std::fmt;
use std::str::FromStr;

use crate::value::Value;

// =============================================================================
// Operator
// =============================================================================

/// A relational operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `in`
    In,
    /// `not in`
    NotIn,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Eq,
        Self::Ne,
        Self::Lt,
        Self::Lte,
        Self::Gt,
        Self::Gte,
        Self::In,
        Self::NotIn,
    ];

    /// Returns the textual symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::In => "in",
            Self::NotIn => "not in",
        }
    }

    /// Returns `true` for `<`, `<=`, `>` and `>=`.
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(self, Self::Lt | Self::Lte | Self::Gt | Self::Gte)
    }

    /// Returns `true` for `in` and `not in`.
    #[must_use]
    pub const fn is_membership(self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }

    /// Returns `true` for the positive arms `=` and `in`.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Eq | Self::In)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.symbol())
    }
}

/// Returned when parsing an operator symbol that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator `{symbol}`")]
pub struct UnknownOperator {
    /// The rejected symbol.
    pub symbol: String,
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|operator| operator.symbol() == symbol)
            .ok_or_else(|| UnknownOperator {
                symbol: symbol.to_owned(),
            })
    }
}

// =============================================================================
// Universal comparator
// =============================================================================

/// Compares two values under `operator`. Never fails.
///
/// See the [module documentation](self) for the full decision table.
#[must_use]
pub fn compare(left: &Value, operator: Operator, right: &Value) -> bool {
    match (left.is_nil(), right.is_nil()) {
        (true, true) => return operator == Operator::Eq,
        (true, false) | (false, true) => {
            return matches!(operator, Operator::Ne | Operator::NotIn);
        }
        (false, false) => {}
    }

    if operator.is_membership() {
        return contains_member(left, right) == operator.is_positive();
    }

    if left.is_number() || right.is_number() {
        return any_number_compare(left, operator, right);
    }

    if operator.is_ordering() {
        return false;
    }

    let equal = same_kind_equal(left, right);
    match operator {
        Operator::Eq => equal,
        _ => !equal,
    }
}

/// Compares two values under an operator given by its symbol.
///
/// An unrecognised symbol yields `false`, like every other nonsensical input.
///
/// ```rust
/// use collecta::compare::compare_str;
/// use collecta::value::Value;
///
/// assert!(compare_str(&Value::from(1), ">=", &Value::from(1)));
/// assert!(!compare_str(&Value::from(1), "==", &Value::from(1)));
/// ```
#[must_use]
pub fn compare_str(left: &Value, symbol: &str, right: &Value) -> bool {
    symbol
        .parse::<Operator>()
        .is_ok_and(|operator| compare(left, operator, right))
}

fn contains_member(needle: &Value, haystack: &Value) -> bool {
    haystack.as_sequence().is_some_and(|sequence| {
        sequence
            .iter()
            .any(|element| compare(needle, Operator::Eq, element))
    })
}

fn same_kind_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Record(a), Value::Record(b)) => {
            a.type_name() == b.type_name()
                && a.len() == b.len()
                && a.fields().zip(b.fields()).all(|((name_a, value_a), (name_b, value_b))| {
                    name_a == name_b && compare(value_a, Operator::Eq, value_b)
                })
        }
        (Value::Sequence(a), Value::Sequence(b)) => a.identity() == b.identity(),
        (Value::Mapping(a), Value::Mapping(b)) => a.identity() == b.identity(),
        (Value::Reference(a), Value::Reference(b)) => a.identity() == b.identity(),
        (Value::Callable(a), Value::Callable(b)) => a.identity() == b.identity(),
        _ => false,
    }
}

// =============================================================================
// Tests
// =============================================================================
