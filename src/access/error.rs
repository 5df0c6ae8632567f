//! Errors raised by the dynamic field accessor.

use crate::value::Kind;

/// Why a field, index or key could not be read.
///
/// Batch helpers such as [`pluck`](super::pluck) swallow these per item; the
/// single-item accessors hand them to the caller.
///
/// # Examples
///
/// ```rust
/// use collecta::access::{any_get, AccessError};
///
/// let error = any_get::<i32, _>(&vec![1, 2, 3], 10).unwrap_err();
/// assert_eq!(error, AccessError::IndexOverflow { index: 10, length: 3 });
/// assert_eq!(error.to_string(), "index 10 is out of range for length 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// The mapping has no entry under the key.
    #[error("no entry for key `{key}`")]
    InvalidKey {
        /// The rendered key.
        key: String,
    },
    /// The key does not parse as a sequence index.
    #[error("`{key}` is not a sequence index")]
    BadIndex {
        /// The rendered key.
        key: String,
    },
    /// The index lies outside `[0, length)`.
    #[error("index {index} is out of range for length {length}")]
    IndexOverflow {
        /// The requested index.
        index: i128,
        /// The sequence length.
        length: usize,
    },
    /// The record has no field of that name.
    #[error("`{type_name}` has no field `{field}`")]
    NoSuchField {
        /// The record's type name.
        type_name: String,
        /// The requested field.
        field: String,
    },
    /// The addressed value has a different shape than requested.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// The requested type.
        expected: &'static str,
        /// The kind actually found.
        found: Kind,
    },
    /// The value cannot be addressed by key at all.
    #[error("cannot address into a {kind} value")]
    Unsupported {
        /// The kind of the value.
        kind: Kind,
    },
    /// The value is a reference without a target.
    #[error("cannot address through a nil reference")]
    NilReference,
}

impl AccessError {
    /// Returns a short, stable name for the variant.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } => "invalid_key",
            Self::BadIndex { .. } => "bad_index",
            Self::IndexOverflow { .. } => "index_overflow",
            Self::NoSuchField { .. } => "no_such_field",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::Unsupported { .. } => "unsupported",
            Self::NilReference => "nil_reference",
        }
    }
}
