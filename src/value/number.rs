//! Numeric scalars that remember their declared width.
//!
//! A [`Number`] keeps the width it was created with so that strict-kind
//! comparisons can tell an `i32` from an `i64`. Mixed-width arithmetic is never
//! performed here; instead each number reports which canonical representations
//! it can be widened to without loss, and [`reconcile`] picks the first one two
//! operands share.
//!
//! # Capabilities
//!
//! | Variant group | signed-capable | unsigned-capable | float-capable |
//! |---------------|----------------|------------------|---------------|
//! | `I*`          | always         | when `>= 0`      | never         |
//! | `U*`          | when `<= i64::MAX` | always       | never         |
//! | `F*`          | never          | never            | always        |
//!
//! Integers are deliberately not float-capable: `10i32` and `10.0f64` never
//! share a representation and so never compare equal.

use std::fmt;

use super::Kind;

// =============================================================================
// Number
// =============================================================================

/// A numeric scalar tagged with its declared width.
///
/// # Examples
///
/// ```rust
/// use collecta::value::{Kind, Number};
///
/// let number = Number::from(7u8);
/// assert_eq!(number.kind(), Kind::U8);
/// assert_eq!(number.as_signed(), Some(7));
/// assert_eq!(number.as_float(), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// `i8`
    I8(i8),
    /// `i16`
    I16(i16),
    /// `i32`
    I32(i32),
    /// `i64`
    I64(i64),
    /// `isize`
    Isize(isize),
    /// `u8`
    U8(u8),
    /// `u16`
    U16(u16),
    /// `u32`
    U32(u32),
    /// `u64`
    U64(u64),
    /// `usize`
    Usize(usize),
    /// `f32`
    F32(f32),
    /// `f64`
    F64(f64),
}

impl Number {
    /// Returns the [`Kind`] matching this number's declared width.
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Self::I8(_) => Kind::I8,
            Self::I16(_) => Kind::I16,
            Self::I32(_) => Kind::I32,
            Self::I64(_) => Kind::I64,
            Self::Isize(_) => Kind::Isize,
            Self::U8(_) => Kind::U8,
            Self::U16(_) => Kind::U16,
            Self::U32(_) => Kind::U32,
            Self::U64(_) => Kind::U64,
            Self::Usize(_) => Kind::Usize,
            Self::F32(_) => Kind::F32,
            Self::F64(_) => Kind::F64,
        }
    }

    /// Returns `true` for `F32` and `F64`.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32(_) | Self::F64(_))
    }

    /// Widens to `i64` when the value is signed-capable.
    #[must_use]
    pub fn as_signed(self) -> Option<i64> {
        match self {
            Self::I8(value) => Some(i64::from(value)),
            Self::I16(value) => Some(i64::from(value)),
            Self::I32(value) => Some(i64::from(value)),
            Self::I64(value) => Some(value),
            Self::Isize(value) => i64::try_from(value).ok(),
            Self::U8(value) => Some(i64::from(value)),
            Self::U16(value) => Some(i64::from(value)),
            Self::U32(value) => Some(i64::from(value)),
            Self::U64(value) => i64::try_from(value).ok(),
            Self::Usize(value) => i64::try_from(value).ok(),
            Self::F32(_) | Self::F64(_) => None,
        }
    }

    /// Widens to `u64` when the value is unsigned-capable.
    #[must_use]
    pub fn as_unsigned(self) -> Option<u64> {
        match self {
            Self::I8(value) => u64::try_from(value).ok(),
            Self::I16(value) => u64::try_from(value).ok(),
            Self::I32(value) => u64::try_from(value).ok(),
            Self::I64(value) => u64::try_from(value).ok(),
            Self::Isize(value) => u64::try_from(value).ok(),
            Self::U8(value) => Some(u64::from(value)),
            Self::U16(value) => Some(u64::from(value)),
            Self::U32(value) => Some(u64::from(value)),
            Self::U64(value) => Some(value),
            Self::Usize(value) => u64::try_from(value).ok(),
            Self::F32(_) | Self::F64(_) => None,
        }
    }

    /// Widens to `f64` when the value is float-capable.
    #[must_use]
    pub fn as_float(self) -> Option<f64> {
        match self {
            Self::F32(value) => Some(f64::from(value)),
            Self::F64(value) => Some(value),
            _ => None,
        }
    }

    /// Collapses the number to its canonical 64-bit representation.
    ///
    /// The priority is signed, then unsigned, then float, so every integer
    /// that fits `i64` lands on [`Canonical::Signed`] regardless of the width
    /// or signedness it was declared with.
    #[must_use]
    pub fn canonical(self) -> Canonical {
        match self {
            Self::F32(value) => Canonical::Float(f64::from(value)),
            Self::F64(value) => Canonical::Float(value),
            integer => match (integer.as_signed(), integer.as_unsigned()) {
                (Some(signed), _) => Canonical::Signed(signed),
                (None, Some(unsigned)) => Canonical::Unsigned(unsigned),
                // Every integer width fits one of the two 64-bit forms; the
                // only way to reach this arm is a >64-bit isize/usize target.
                (None, None) => Canonical::Float(integer.lossy_float()),
            },
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn lossy_float(self) -> f64 {
        match self {
            Self::I8(value) => value as f64,
            Self::I16(value) => value as f64,
            Self::I32(value) => value as f64,
            Self::I64(value) => value as f64,
            Self::Isize(value) => value as f64,
            Self::U8(value) => value as f64,
            Self::U16(value) => value as f64,
            Self::U32(value) => value as f64,
            Self::U64(value) => value as f64,
            Self::Usize(value) => value as f64,
            Self::F32(value) => value as f64,
            Self::F64(value) => value,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I8(value) => write!(formatter, "{value}"),
            Self::I16(value) => write!(formatter, "{value}"),
            Self::I32(value) => write!(formatter, "{value}"),
            Self::I64(value) => write!(formatter, "{value}"),
            Self::Isize(value) => write!(formatter, "{value}"),
            Self::U8(value) => write!(formatter, "{value}"),
            Self::U16(value) => write!(formatter, "{value}"),
            Self::U32(value) => write!(formatter, "{value}"),
            Self::U64(value) => write!(formatter, "{value}"),
            Self::Usize(value) => write!(formatter, "{value}"),
            Self::F32(value) => write!(formatter, "{value}"),
            Self::F64(value) => write!(formatter, "{value}"),
        }
    }
}

macro_rules! impl_number_from {
    ($($primitive:ident),* $(,)?) => {
        paste::paste! {
            $(
                impl From<$primitive> for Number {
                    #[inline]
                    fn from(value: $primitive) -> Self {
                        Self::[<$primitive:camel>](value)
                    }
                }
            )*
        }
    };
}

impl_number_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

// =============================================================================
// Canonical / Widened
// =============================================================================

/// A number collapsed to one of the three 64-bit representations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Canonical {
    /// Signed 64-bit integer.
    Signed(i64),
    /// Unsigned 64-bit integer that does not fit `i64`.
    Unsigned(u64),
    /// 64-bit float.
    Float(f64),
}

impl Canonical {
    /// Returns the canonical numeric [`Kind`] of this representation.
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Self::Signed(_) => Kind::I64,
            Self::Unsigned(_) => Kind::U64,
            Self::Float(_) => Kind::F64,
        }
    }
}

/// Two numbers widened to a shared representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Widened {
    /// Both operands are signed-capable.
    Signed(i64, i64),
    /// Both operands are unsigned-capable but not both signed-capable.
    Unsigned(u64, u64),
    /// Both operands are floats.
    Float(f64, f64),
}

/// Picks the narrowest representation both operands can be widened to.
///
/// Returns `None` when the operands share no capability, e.g. an integer
/// against a float, or a negative integer against a `u64` above `i64::MAX`.
///
/// # Examples
///
/// ```rust
/// use collecta::value::{reconcile, Number, Widened};
///
/// assert_eq!(
///     reconcile(Number::from(3i8), Number::from(3u64)),
///     Some(Widened::Signed(3, 3))
/// );
/// assert_eq!(reconcile(Number::from(10i32), Number::from(10.0f64)), None);
/// ```
#[must_use]
pub fn reconcile(left: Number, right: Number) -> Option<Widened> {
    if let (Some(a), Some(b)) = (left.as_signed(), right.as_signed()) {
        return Some(Widened::Signed(a, b));
    }
    if let (Some(a), Some(b)) = (left.as_unsigned(), right.as_unsigned()) {
        return Some(Widened::Unsigned(a, b));
    }
    if let (Some(a), Some(b)) = (left.as_float(), right.as_float()) {
        return Some(Widened::Float(a, b));
    }
    None
}
