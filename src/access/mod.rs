//! Dynamic field access.
//!
//! [`any_get`] reaches into any value that converts to a [`Value`] by map key,
//! sequence index or record field name, and converts the addressed sub-value to
//! the requested type. The batch helpers [`pluck`], [`key_by`] and
//! [`group_by`] are built on it.
//!
//! # Dispatch
//!
//! | Item kind   | Key                                   | Failure                              |
//! |-------------|---------------------------------------|--------------------------------------|
//! | mapping     | any value, numbers matched loosely    | [`AccessError::InvalidKey`]          |
//! | sequence    | integer or text holding an integer    | `BadIndex` / `IndexOverflow`         |
//! | record      | field name                            | [`AccessError::NoSuchField`]         |
//! | reference   | dereferenced once, then retried       | `NilReference` / `Unsupported`       |
//! | anything else |                                     | [`AccessError::Unsupported`]         |
//!
//! Only one level of indirection is followed per call; a reference to a
//! reference is rejected rather than chased.
//!
//! # Type mismatch
//!
//! [`any_get`] reports a mismatch between the addressed value and the
//! requested type as [`AccessError::TypeMismatch`]. [`any_get_or_default`] is
//! the separate, explicitly lossy variant that maps every failure to
//! `V::default()`.
//!
//! # Examples
//!
//! ```rust
//! use collecta::access::{any_get, AccessError};
//! use collecta::value::Record;
//!
//! let user = Record::new("User").with_field("Name", "Lucy");
//! assert_eq!(any_get::<String, _>(&user, "Name"), Ok("Lucy".to_owned()));
//! assert_eq!(any_get::<i32, _>(&[1, 2, 3], 2), Ok(3));
//! assert!(matches!(
//!     any_get::<i32, _>(&[1, 2, 3], 10),
//!     Err(AccessError::IndexOverflow { .. })
//! ));
//! ```

mod error;
mod extract;

pub use error::AccessError;
pub use extract::{
    group_by, group_by_with, key_by, key_by_with, map_group_by, map_key_by, map_pluck, pluck,
};

use crate::value::{FromValue, IntoValue, Number, Value};

// =============================================================================
// AccessKey
// =============================================================================

/// A field name, a sequence index, or a map key.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessKey(Value);

impl AccessKey {
    /// Returns the key as a value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.0
    }

    /// Returns the key as a field name, if it is text.
    #[inline]
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Interprets the key as a sequence index.
    ///
    /// Integers are taken as they are, text is parsed as a base-10 integer.
    /// Negative results are returned so that the caller can report them as
    /// out of range.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::BadIndex`] for floats, unparseable text and
    /// non-scalar keys.
    pub fn as_index(&self) -> Result<i128, AccessError> {
        let parsed = match &self.0 {
            Value::Number(number) if !number.is_float() => integer_index(*number),
            Value::Text(text) => text.parse::<i128>().ok(),
            _ => None,
        };
        parsed.ok_or_else(|| AccessError::BadIndex {
            key: self.0.to_string(),
        })
    }
}

fn integer_index(number: Number) -> Option<i128> {
    number
        .as_signed()
        .map(i128::from)
        .or_else(|| number.as_unsigned().map(i128::from))
}

impl From<Value> for AccessKey {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&str> for AccessKey {
    fn from(name: &str) -> Self {
        Self(Value::from(name))
    }
}

impl From<String> for AccessKey {
    fn from(name: String) -> Self {
        Self(Value::from(name))
    }
}

impl From<&String> for AccessKey {
    fn from(name: &String) -> Self {
        Self(Value::from(name.as_str()))
    }
}

macro_rules! impl_access_key_from_integer {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl From<$primitive> for AccessKey {
                #[inline]
                fn from(index: $primitive) -> Self {
                    Self(Value::from(index))
                }
            }
        )*
    };
}

impl_access_key_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// =============================================================================
// Accessors
// =============================================================================

/// Returns the raw sub-value of `item` addressed by `key`.
///
/// # Errors
///
/// Returns the [`AccessError`] describing why the key does not address
/// anything; see the [module documentation](self) for the dispatch table.
pub fn get(item: &Value, key: &AccessKey) -> Result<Value, AccessError> {
    lookup(item, key, true)
}

fn lookup(item: &Value, key: &AccessKey, may_dereference: bool) -> Result<Value, AccessError> {
    match item {
        Value::Mapping(mapping) => {
            mapping
                .get(key.value())
                .cloned()
                .ok_or_else(|| AccessError::InvalidKey {
                    key: key.value().to_string(),
                })
        }
        Value::Sequence(sequence) => {
            let index = key.as_index()?;
            usize::try_from(index)
                .ok()
                .and_then(|position| sequence.get(position))
                .cloned()
                .ok_or(AccessError::IndexOverflow {
                    index,
                    length: sequence.len(),
                })
        }
        Value::Record(record) => key
            .as_name()
            .and_then(|name| record.field(name))
            .cloned()
            .ok_or_else(|| AccessError::NoSuchField {
                type_name: record.type_name().to_owned(),
                field: key.value().to_string(),
            }),
        Value::Reference(reference) if may_dereference => match reference.target() {
            Some(target) => lookup(target, key, false),
            None => Err(AccessError::NilReference),
        },
        other => Err(AccessError::Unsupported { kind: other.kind() }),
    }
}

/// Reads the sub-value of `item` addressed by `key` and converts it to `V`.
///
/// # Errors
///
/// Returns the lookup error from [`get`], or [`AccessError::TypeMismatch`]
/// when the addressed value is not a `V`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use collecta::access::{any_get, AccessError};
///
/// let greetings: HashMap<i32, String> = [(0, "Hello".to_owned())].into_iter().collect();
/// assert_eq!(any_get::<String, _>(&greetings, 0), Ok("Hello".to_owned()));
/// assert!(matches!(
///     any_get::<String, _>(&greetings, 1),
///     Err(AccessError::InvalidKey { .. })
/// ));
/// assert!(matches!(
///     any_get::<i64, _>(&greetings, 0),
///     Err(AccessError::TypeMismatch { .. })
/// ));
/// ```
pub fn any_get<V, I>(item: &I, key: impl Into<AccessKey>) -> Result<V, AccessError>
where
    V: FromValue,
    I: IntoValue + ?Sized,
{
    let raw = get(&item.to_value(), &key.into())?;
    V::from_value(raw)
}

/// Like [`any_get`], but maps every failure to `V::default()`.
///
/// ```rust
/// use collecta::access::any_get_or_default;
///
/// assert_eq!(any_get_or_default::<i32, _>(&[1, 2, 3], 1), 2);
/// assert_eq!(any_get_or_default::<i32, _>(&[1, 2, 3], 9), 0);
/// assert_eq!(any_get_or_default::<String, _>(&[1, 2, 3], 1), String::new());
/// ```
#[must_use]
pub fn any_get_or_default<V, I>(item: &I, key: impl Into<AccessKey>) -> V
where
    V: FromValue + Default,
    I: IntoValue + ?Sized,
{
    any_get(item, key).unwrap_or_default()
}

// =============================================================================
// Tests
// =============================================================================
