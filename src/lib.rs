//! # collecta
//!
//! Loose comparison and dynamic field access for Rust collections.
//!
//! ## Overview
//!
//! The library works on a runtime view of ordinary Rust data, [`Value`](value::Value),
//! and provides:
//!
//! - **Comparator**: a total `compare(left, operator, right)` spanning mixed
//!   numeric widths, NaN, tolerance-based float equality and identity equality
//!   for containers
//! - **Comparison Set**: hashed membership over runtime values with an optional
//!   loose-number mode
//! - **Field Accessor**: `any_get` reaches into maps, sequences, records and
//!   single-level references by key, index or field name
//! - **Extraction Helpers**: `pluck`, `key_by` and `group_by` over batches
//! - **Functional Helpers**: `where`-style filters, de-duplication, sorting and
//!   aggregation built on the above
//!
//! ## Feature Flags
//!
//! - `derive`: `#[derive(Record)]` for named structs
//! - `functional`: slice and map helpers
//! - `serde`: `Serialize` for runtime values
//! - `tracing`: trace events for items skipped by batch helpers
//! - `fxhash` / `ahash`: alternative hashers for the comparison set
//! - `full`: every feature above except the hashers
//!
//! ## Example
//!
//! ```rust
//! use collecta::prelude::*;
//!
//! let users = [
//!     Record::new("User").with_field("ID", 33).with_field("Name", "Lucy"),
//!     Record::new("User").with_field("ID", 193).with_field("Name", "Peter"),
//! ];
//!
//! assert_eq!(pluck::<String, _>(&users, "Name"), ["Lucy", "Peter"]);
//! assert!(compare(&Value::from(33u8), Operator::In, &Value::sequence([1, 33])));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

extern crate self as collecta;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use collecta::prelude::*;
/// ```
pub mod prelude {
    pub use crate::access::*;
    pub use crate::compare::*;
    pub use crate::value::*;

    #[cfg(feature = "functional")]
    pub use crate::functional::*;

    #[cfg(feature = "derive")]
    pub use collecta_derive::Record;
}

pub mod access;
pub mod compare;
pub mod value;

#[cfg(feature = "functional")]
pub mod functional;

/// Derives [`IntoValue`](value::IntoValue) and [`FromValue`](value::FromValue)
/// for a struct with named fields.
///
/// The runtime view is a [`Record`](value::Record) named after the struct whose
/// fields are the struct's fields in declaration order.
///
/// # Attributes
///
/// - `#[record(rename = "Name")]` on a field changes its runtime name
/// - `#[record(skip)]` on a field leaves it out of the runtime view; it is
///   rebuilt with `Default::default()`
///
/// # Example
///
/// ```rust
/// use collecta::access::any_get;
/// use collecta::value::{FromValue, IntoValue};
/// use collecta::Record;
///
/// #[derive(Record, Debug, Clone, PartialEq)]
/// struct User {
///     #[record(rename = "ID")]
///     id: u32,
///     #[record(rename = "Name")]
///     name: String,
/// }
///
/// let lucy = User { id: 33, name: "Lucy".to_owned() };
/// assert_eq!(any_get::<String, _>(&lucy, "Name"), Ok("Lucy".to_owned()));
/// assert_eq!(User::from_value(lucy.to_value()), Ok(lucy));
/// ```
#[cfg(feature = "derive")]
pub use collecta_derive::Record;
