//! Collection helpers built on the comparator, the comparison set and the
//! field accessor.
//!
//! Every helper is a free function over a slice or a `HashMap` and returns a
//! fresh collection; inputs are never modified.
//!
//! - [`slice`]: equality, search, difference, de-duplication and counting
//! - [`filter`]: `where`-style filters driven by an [`Operator`](crate::compare::Operator)
//! - [`sort`]: NaN-aware sorting and sorting by an extracted key
//! - [`random`]: shuffling and sampling with a caller-supplied generator
//! - [`number`]: sum, average, minimum and maximum
//! - [`map`]: key selection and key difference over `HashMap`s
//!
//! # Examples
//!
//! ```rust
//! use collecta::compare::Operator;
//! use collecta::functional::{filter_where, unique};
//!
//! let numbers = [1, 2, 2, 3, 3, 3];
//! assert_eq!(unique(&numbers), [1, 2, 3]);
//! assert_eq!(filter_where(&numbers, Operator::Gte, &3), [3, 3, 3]);
//! ```

pub mod filter;
pub mod map;
pub mod number;
pub mod random;
pub mod slice;
pub mod sort;

pub use filter::{
    filter_where, filter_where_field, filter_where_field_in, filter_where_field_not_in,
    filter_where_in, filter_where_not_in,
};
pub use map::{diff_keys, except, keys, only};
pub use number::{avg, max, min, sum};
pub use random::{random, shuffle};
pub use slice::{contains, count, diff, duplicates, index_of, same, unique};
pub use sort::{sort, sort_by_key_with, sort_desc, SortOrder};
