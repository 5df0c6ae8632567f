//! Derive macro for collecta's runtime records.
//!
//! # Available Derive Macros
//!
//! - [`Record`]: exposes a named struct to dynamic field access
//!
//! # Example
//!
//! ```rust,ignore
//! use collecta::Record;
//! use collecta::access::any_get;
//!
//! #[derive(Record)]
//! struct User {
//!     #[record(rename = "ID")]
//!     id: u32,
//!     #[record(rename = "Name")]
//!     name: String,
//! }
//!
//! let lucy = User { id: 33, name: "Lucy".to_owned() };
//! assert_eq!(any_get::<u32, _>(&lucy, "ID"), Ok(33));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod record;

use proc_macro::TokenStream;

/// Derive macro implementing `IntoValue` and `FromValue` for a named struct.
///
/// # Requirements
///
/// - The type must be a struct with named fields
/// - Every field type must implement `IntoValue` and `FromValue`, except
///   skipped fields, which must implement `Default`
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::collecta::value::IntoValue for User {
///     fn to_value(&self) -> ::collecta::value::Value {
///         // Record::new("User").with_field("ID", ...).with_field("Name", ...)
///     }
/// }
///
/// impl ::collecta::value::FromValue for User {
///     fn from_value(value: ::collecta::value::Value) -> Result<Self, ::collecta::access::AccessError> {
///         // checks the type name, then reads every field by name
///     }
/// }
/// ```
///
/// # Attributes
///
/// - `#[record(rename = "...")]` on the struct changes the record's type name
/// - `#[record(rename = "...")]` on a field changes the field's name
/// - `#[record(skip)]` on a field leaves it out; it is rebuilt with
///   `Default::default()`
///
/// # Generics
///
/// Every type parameter receives an `IntoValue` bound on the first impl and a
/// `FromValue` bound on the second.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
