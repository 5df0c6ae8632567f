//! Numeric comparison.
//!
//! [`compare_numbers`] compares two operands of the same representation;
//! [`compare_mixed`] first reconciles two [`Number`]s of possibly different
//! widths; [`any_number_compare`] lifts that to arbitrary [`Value`]s.
//!
//! Float equality is tolerance based: two floats are equal when both are NaN or
//! when they differ by at most [`FLOAT_TOLERANCE`]. The tolerance is absolute,
//! so it stops being meaningful for magnitudes far above `1.0`.

use super::Operator;
use crate::value::{reconcile, Number, Value, Widened};

/// Absolute tolerance used by float equality.
pub const FLOAT_TOLERANCE: f64 = 1e-9;

/// A primitive number that can be compared under an [`Operator`].
pub trait Numeric: Copy + PartialOrd {
    /// Equality as used by `=` and `!=`.
    fn numeric_eq(self, other: Self) -> bool;
}

macro_rules! impl_numeric_exact {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl Numeric for $primitive {
                #[inline]
                fn numeric_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_numeric_exact!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_numeric_tolerant {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl Numeric for $primitive {
                #[inline]
                #[allow(clippy::float_cmp)]
                fn numeric_eq(self, other: Self) -> bool {
                    if self.is_nan() || other.is_nan() {
                        return self.is_nan() && other.is_nan();
                    }
                    self == other
                        || (f64::from(self) - f64::from(other)).abs() <= FLOAT_TOLERANCE
                }
            }
        )*
    };
}

impl_numeric_tolerant!(f32, f64);

/// Compares two numbers of the same representation.
///
/// Membership operators are not numeric relations and always yield `false`.
///
/// # Examples
///
/// ```rust
/// use collecta::compare::{compare_numbers, Operator};
///
/// assert!(compare_numbers(f64::NAN, Operator::Eq, f64::NAN));
/// assert!(compare_numbers(0.1 + 0.2, Operator::Eq, 0.3));
/// assert!(!compare_numbers(f64::NAN, Operator::Lte, f64::NAN));
/// assert!(compare_numbers(2u8, Operator::Gt, 1u8));
/// ```
#[must_use]
pub fn compare_numbers<N: Numeric>(left: N, operator: Operator, right: N) -> bool {
    match operator {
        Operator::Eq => left.numeric_eq(right),
        Operator::Ne => !left.numeric_eq(right),
        Operator::Lt => left < right,
        Operator::Lte => left <= right,
        Operator::Gt => left > right,
        Operator::Gte => left >= right,
        Operator::In | Operator::NotIn => false,
    }
}

/// Compares two numbers after widening them to a shared representation.
///
/// Operands without a shared representation are never equal and never
/// ordered: only `!=` holds for them.
#[must_use]
pub fn compare_mixed(left: Number, operator: Operator, right: Number) -> bool {
    match reconcile(left, right) {
        Some(Widened::Signed(a, b)) => compare_numbers(a, operator, b),
        Some(Widened::Unsigned(a, b)) => compare_numbers(a, operator, b),
        Some(Widened::Float(a, b)) => compare_numbers(a, operator, b),
        None => operator == Operator::Ne,
    }
}

/// Compares two values of which at least one is expected to be numeric.
///
/// When only one side is a number the operands are of different kinds, so
/// only `!=` holds. When neither is, the result is `false`.
///
/// # Examples
///
/// ```rust
/// use collecta::compare::{any_number_compare, Operator};
/// use collecta::value::Value;
///
/// assert!(any_number_compare(&Value::from(3i8), Operator::Eq, &Value::from(3u64)));
/// assert!(any_number_compare(&Value::from(10.0), Operator::Ne, &Value::from(10)));
/// assert!(any_number_compare(&Value::from(1), Operator::Ne, &Value::from("1")));
/// assert!(!any_number_compare(&Value::from(1), Operator::Lt, &Value::from("2")));
/// ```
#[must_use]
pub fn any_number_compare(left: &Value, operator: Operator, right: &Value) -> bool {
    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => compare_mixed(a, operator, b),
        (Some(_), None) | (None, Some(_)) => operator == Operator::Ne,
        (None, None) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10.3, 10.3, true)]
    #[case(1.0, 1.0 + 5e-10, true)]
    #[case(1.0, 1.0 + 5e-9, false)]
    #[case(f64::NAN, f64::NAN, true)]
    #[case(f64::NAN, 0.0, false)]
    #[case(f64::INFINITY, f64::INFINITY, true)]
    #[case(f64::INFINITY, f64::NEG_INFINITY, false)]
    fn test_float_equality(#[case] left: f64, #[case] right: f64, #[case] expected: bool) {
        assert_eq!(compare_numbers(left, Operator::Eq, right), expected);
        assert_eq!(compare_numbers(left, Operator::Ne, right), !expected);
    }

    #[rstest]
    #[case(Operator::Lt)]
    #[case(Operator::Lte)]
    #[case(Operator::Gt)]
    #[case(Operator::Gte)]
    fn test_nan_never_ordered(#[case] operator: Operator) {
        assert!(!compare_numbers(f64::NAN, operator, 1.0));
        assert!(!compare_numbers(1.0, operator, f64::NAN));
    }

    #[rstest]
    fn test_f32_nan_equality() {
        assert!(compare_numbers(f32::NAN, Operator::Eq, f32::NAN));
    }

    #[rstest]
    #[case(Operator::Lt, true)]
    #[case(Operator::Lte, true)]
    #[case(Operator::Gt, false)]
    #[case(Operator::Gte, false)]
    #[case(Operator::In, false)]
    #[case(Operator::NotIn, false)]
    fn test_integer_relations(#[case] operator: Operator, #[case] expected: bool) {
        assert_eq!(compare_numbers(1i64, operator, 2i64), expected);
    }

    #[rstest]
    fn test_mixed_without_shared_capability() {
        let float = Number::from(10.0f64);
        let integer = Number::from(10i32);
        assert!(!compare_mixed(float, Operator::Eq, integer));
        assert!(compare_mixed(float, Operator::Ne, integer));
        assert!(!compare_mixed(float, Operator::Gte, integer));
    }

    #[rstest]
    fn test_mixed_unsigned_path() {
        assert!(compare_mixed(
            Number::from(u64::MAX),
            Operator::Gt,
            Number::from(1u8)
        ));
    }
}
