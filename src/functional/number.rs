//! Numeric aggregation.
//!
//! All four functions return zero for an empty slice. `sum` and `avg` add in
//! the element type, so integer overflow follows that type's arithmetic: it
//! panics in debug builds and wraps in release builds.

use num_traits::{Num, NumCast, Zero};

/// Returns the sum of the elements.
///
/// ```rust
/// use collecta::functional::sum;
///
/// assert_eq!(sum(&[1, 2, 3]), 6);
/// assert_eq!(sum::<f64>(&[]), 0.0);
/// ```
///
/// # Panics
///
/// Panics in debug builds when an integer sum overflows the element type.
#[must_use]
pub fn sum<T: Num + Copy>(items: &[T]) -> T {
    items.iter().fold(T::zero(), |total, &value| total + value)
}

/// Returns the mean of the elements in the element type.
///
/// Integer means truncate. A length that the element type cannot represent
/// yields zero.
///
/// ```rust
/// use collecta::functional::avg;
///
/// assert_eq!(avg(&[1, 2, 4]), 2);
/// assert_eq!(avg(&[1.0, 2.0, 4.0]), 7.0 / 3.0);
/// ```
///
/// # Panics
///
/// Panics in debug builds when the integer sum overflows the element type,
/// even if the mean itself would fit; widen the elements first in that case.
#[must_use]
pub fn avg<T: Num + NumCast + Copy>(items: &[T]) -> T {
    if items.is_empty() {
        return T::zero();
    }
    <T as NumCast>::from(items.len()).map_or_else(T::zero, |length| sum(items) / length)
}

/// Returns the smallest element.
///
/// ```rust
/// use collecta::functional::min;
///
/// assert_eq!(min(&[3, -1, 2]), -1);
/// assert_eq!(min::<u8>(&[]), 0);
/// ```
#[must_use]
pub fn min<T: Zero + PartialOrd + Copy>(items: &[T]) -> T {
    extreme(items, |candidate, current| candidate < current)
}

/// Returns the largest element.
///
/// ```rust
/// use collecta::functional::max;
///
/// assert_eq!(max(&[3, -1, 2]), 3);
/// ```
#[must_use]
pub fn max<T: Zero + PartialOrd + Copy>(items: &[T]) -> T {
    extreme(items, |candidate, current| candidate > current)
}

fn extreme<T, F>(items: &[T], replaces: F) -> T
where
    T: Zero + Copy,
    F: Fn(&T, &T) -> bool,
{
    let Some((&first, rest)) = items.split_first() else {
        return T::zero();
    };
    rest.iter().fold(first, |current, candidate| {
        if replaces(candidate, &current) {
            *candidate
        } else {
            current
        }
    })
}
