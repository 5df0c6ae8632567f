//! Conversions between native Rust data and [`Value`].
//!
//! [`IntoValue`] borrows native data and produces a [`Value`]; [`FromValue`]
//! consumes a [`Value`] and rebuilds a native type, failing with
//! [`AccessError::TypeMismatch`] when the shapes disagree.
//!
//! Numeric conversions out of a value are exact: an `I32` only converts to
//! `i32`. Widening belongs to the comparator, not to extraction.
//!
//! # Indirection
//!
//! `Box<T>`, `Rc<T>`, `Arc<T>` and `Option<T>` convert to a [`Reference`].
//! References from `Rc<T>` and `Arc<T>` are named after the shared allocation
//! and keep it alive, so clones of one pointer convert to equal references.
//! Borrowed data (slices, `Vec`, maps, `Box`, `Option`) gets a fresh
//! [`Identity`] on every conversion. A plain borrow `&T` is transparent and
//! converts exactly like `T`.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use super::{Callable, Identity, Mapping, Number, Record, Reference, Sequence, Value};
use crate::access::AccessError;

// =============================================================================
// Traits
// =============================================================================

/// Types that can be viewed as a [`Value`].
///
/// Implemented for primitives, text, standard containers, smart pointers and
/// every struct deriving `Record`.
pub trait IntoValue {
    /// Produces the runtime view of `self`.
    fn to_value(&self) -> Value;
}

/// Types that can be rebuilt from a [`Value`].
pub trait FromValue: Sized {
    /// Rebuilds `Self`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::TypeMismatch`] when the value has a different
    /// shape, or the error of a nested conversion.
    fn from_value(value: Value) -> Result<Self, AccessError>;
}

#[inline]
fn mismatch<T>(found: &Value) -> AccessError {
    AccessError::TypeMismatch {
        expected: std::any::type_name::<T>(),
        found: found.kind(),
    }
}

// =============================================================================
// Primitives
// =============================================================================

macro_rules! impl_numeric_conversions {
    ($($primitive:ident),* $(,)?) => {
        paste::paste! {
            $(
                impl IntoValue for $primitive {
                    #[inline]
                    fn to_value(&self) -> Value {
                        Value::Number(Number::[<$primitive:camel>](*self))
                    }
                }

                impl FromValue for $primitive {
                    fn from_value(value: Value) -> Result<Self, AccessError> {
                        match value {
                            Value::Number(Number::[<$primitive:camel>](number)) => Ok(number),
                            other => Err(mismatch::<Self>(&other)),
                        }
                    }
                }
            )*
        }
    };
}

impl_numeric_conversions!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl IntoValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, AccessError> {
        match value {
            Value::Bool(flag) => Ok(flag),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl IntoValue for () {
    fn to_value(&self) -> Value {
        Value::Nil
    }
}

impl IntoValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_owned())
    }
}

impl IntoValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, AccessError> {
        match value {
            Value::Text(text) => Ok(text),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

// =============================================================================
// Value and its parts
// =============================================================================

impl IntoValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, AccessError> {
        Ok(value)
    }
}

macro_rules! impl_part_conversions {
    ($($part:ident),* $(,)?) => {
        $(
            impl IntoValue for $part {
                fn to_value(&self) -> Value {
                    Value::$part(self.clone())
                }
            }

            impl FromValue for $part {
                fn from_value(value: Value) -> Result<Self, AccessError> {
                    match value {
                        Value::$part(part) => Ok(part),
                        other => Err(mismatch::<Self>(&other)),
                    }
                }
            }
        )*
    };
}

impl_part_conversions!(Number, Sequence, Mapping, Record, Reference, Callable);

// =============================================================================
// Sequences
// =============================================================================

impl<T: IntoValue> IntoValue for [T] {
    fn to_value(&self) -> Value {
        Value::Sequence(Sequence::new(self.iter().map(IntoValue::to_value)))
    }
}

impl<T: IntoValue, const N: usize> IntoValue for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, AccessError> {
        match value {
            Value::Sequence(sequence) => sequence.iter().cloned().map(T::from_value).collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

// =============================================================================
// Mappings
// =============================================================================

impl<K: IntoValue, V: IntoValue, S> IntoValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Mapping(Mapping::new(
            self.iter().map(|(key, value)| (key.to_value(), value.to_value())),
        ))
    }
}

impl<K, V, S> FromValue for HashMap<K, V, S>
where
    K: FromValue + Eq + Hash,
    V: FromValue,
    S: BuildHasher + Default,
{
    fn from_value(value: Value) -> Result<Self, AccessError> {
        match value {
            Value::Mapping(mapping) => mapping
                .iter()
                .map(|(key, value)| Ok((K::from_value(key.clone())?, V::from_value(value.clone())?)))
                .collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<K: IntoValue, V: IntoValue> IntoValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Mapping(Mapping::new(
            self.iter().map(|(key, value)| (key.to_value(), value.to_value())),
        ))
    }
}

impl<K, V> FromValue for BTreeMap<K, V>
where
    K: FromValue + Ord,
    V: FromValue,
{
    fn from_value(value: Value) -> Result<Self, AccessError> {
        match value {
            Value::Mapping(mapping) => mapping
                .iter()
                .map(|(key, value)| Ok((K::from_value(key.clone())?, V::from_value(value.clone())?)))
                .collect(),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

// =============================================================================
// Indirection
// =============================================================================

impl<T: IntoValue + ?Sized> IntoValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: IntoValue + ?Sized> IntoValue for Box<T> {
    fn to_value(&self) -> Value {
        Value::Reference(Reference::to((**self).to_value()))
    }
}

impl<T: IntoValue + ?Sized + 'static> IntoValue for Rc<T> {
    fn to_value(&self) -> Value {
        Value::Reference(Reference::with_identity(
            Identity::of_rc(self),
            (**self).to_value(),
        ))
    }
}

impl<T: IntoValue + ?Sized + 'static> IntoValue for Arc<T> {
    fn to_value(&self) -> Value {
        Value::Reference(Reference::with_identity(
            Identity::of_arc(self),
            (**self).to_value(),
        ))
    }
}

macro_rules! impl_pointer_from_value {
    ($($pointer:ident),* $(,)?) => {
        $(
            impl<T: FromValue> FromValue for $pointer<T> {
                fn from_value(value: Value) -> Result<Self, AccessError> {
                    match value {
                        Value::Reference(reference) => match reference.target() {
                            Some(target) => T::from_value(target.clone()).map($pointer::new),
                            None => Err(AccessError::NilReference),
                        },
                        other => T::from_value(other).map($pointer::new),
                    }
                }
            }
        )*
    };
}

impl_pointer_from_value!(Box, Rc, Arc);

impl<T: IntoValue> IntoValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(target) => Value::Reference(Reference::to(target.to_value())),
            None => Value::Reference(Reference::nil()),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, AccessError> {
        match value {
            Value::Nil => Ok(None),
            Value::Reference(reference) => match reference.target() {
                Some(target) => T::from_value(target.clone()).map(Some),
                None => Ok(None),
            },
            other => Err(mismatch::<Self>(&other)),
        }
    }
}
