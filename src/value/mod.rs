//! Runtime-typed values.
//!
//! This module provides [`Value`], a closed sum type over every shape the
//! comparator and the field accessor understand, together with the conversion
//! traits [`IntoValue`] and [`FromValue`] that move native Rust data in and out
//! of it.
//!
//! # Identity
//!
//! Sequences, mappings, callables and references are compared by identity,
//! never by content. Each of them carries an [`Identity`] token:
//!
//! - containers built through [`Value::sequence`], [`Value::mapping`],
//!   [`Callable::new`] or [`Reference::to`] get a fresh token, and clones
//!   share it;
//! - `Rc<T>` and `Arc<T>` convert to references named after the shared
//!   allocation, so every clone of the pointer converts to an equal value;
//! - borrowed native data (`Vec`, slices, maps, `Box`, `Option`) gets a fresh
//!   token on every conversion. Convert once and clone the [`Value`] to keep
//!   comparing against the same container.
//!
//! A token keeps its allocation alive, so a token is never confused with a
//! later allocation at the same address. Two containers with equal contents
//! but separate storage are unequal.
//!
//! ```rust
//! use collecta::compare::{compare, Operator};
//! use collecta::value::Value;
//!
//! let first = Value::sequence([1, 2, 3]);
//! let second = Value::sequence([1, 2, 3]);
//!
//! assert!(compare(&first, Operator::Ne, &second));
//! assert!(compare(&first, Operator::Eq, &first.clone()));
//! ```

mod convert;
mod number;
#[cfg(feature = "serde")]
mod serialize;

pub use convert::{FromValue, IntoValue};
pub use number::{reconcile, Canonical, Number, Widened};

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

use crate::access::AccessError;
use crate::compare::{compare, NormalizedValue, Operator};

// =============================================================================
// Kind
// =============================================================================

/// The runtime category of a [`Value`].
///
/// Numeric kinds keep their declared width; every other kind is a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// [`Value::Nil`]
    Nil,
    /// [`Value::Bool`]
    Bool,
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `isize`
    Isize,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `usize`
    Usize,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// [`Value::Text`]
    Text,
    /// [`Value::Sequence`]
    Sequence,
    /// [`Value::Mapping`]
    Mapping,
    /// [`Value::Record`]
    Record,
    /// [`Value::Reference`]
    Reference,
    /// [`Value::Callable`]
    Callable,
}

impl Kind {
    /// Returns `true` for every numeric width.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::Isize
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::Usize
                | Self::F32
                | Self::F64
        )
    }

    /// Returns `true` for kinds compared by identity rather than by value.
    #[must_use]
    pub const fn is_reference_like(self) -> bool {
        matches!(
            self,
            Self::Sequence | Self::Mapping | Self::Reference | Self::Callable
        )
    }

    /// Returns the lowercase name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Text => "text",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Record => "record",
            Self::Reference => "reference",
            Self::Callable => "callable",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

// =============================================================================
// Identity
// =============================================================================

/// A token standing in for storage identity.
///
/// Every token other than [`Identity::NIL`] owns an anchor that keeps the
/// identified allocation alive, so an address is never reused while a token
/// naming it exists. Two tokens are equal exactly when they name the same
/// allocation.
#[derive(Clone)]
pub struct Identity {
    address: usize,
    anchor: Option<Rc<dyn Any>>,
}

impl Identity {
    /// The token shared by every nil reference.
    pub const NIL: Self = Self {
        address: 0,
        anchor: None,
    };

    /// Allocates a token no other live token is equal to.
    #[must_use]
    pub fn fresh() -> Self {
        let anchor: Rc<dyn Any> = Rc::new(());
        Self {
            address: Rc::as_ptr(&anchor).cast::<u8>().addr(),
            anchor: Some(anchor),
        }
    }

    /// Names the allocation behind `shared`, keeping it alive.
    ///
    /// Every clone of the same `Rc` yields an equal token.
    #[must_use]
    pub fn of_rc<T: ?Sized + 'static>(shared: &Rc<T>) -> Self {
        let anchor: Rc<dyn Any> = Rc::new(Rc::clone(shared));
        Self {
            address: Rc::as_ptr(shared).cast::<u8>().addr(),
            anchor: Some(anchor),
        }
    }

    /// Names the allocation behind `shared`, keeping it alive.
    #[must_use]
    pub fn of_arc<T: ?Sized + 'static>(shared: &Arc<T>) -> Self {
        let anchor: Rc<dyn Any> = Rc::new(Arc::clone(shared));
        Self {
            address: Arc::as_ptr(shared).cast::<u8>().addr(),
            anchor: Some(anchor),
        }
    }

    /// Returns the address of the named allocation, `0` for [`Identity::NIL`].
    #[inline]
    #[must_use]
    pub const fn address(&self) -> usize {
        self.address
    }

    /// Returns `true` for [`Identity::NIL`].
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.anchor.is_none()
    }
}

impl PartialEq for Identity {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for Identity {}

impl Hash for Identity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl PartialOrd for Identity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.address.cmp(&other.address)
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({:#x})", self.address)
    }
}

// =============================================================================
// Sequence
// =============================================================================

/// An ordered, identity-compared list of values.
#[derive(Clone)]
pub struct Sequence {
    identity: Identity,
    items: Rc<[Value]>,
}

impl Sequence {
    /// Creates a sequence with a fresh identity.
    #[must_use]
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let items: Rc<[Value]> = items.into_iter().map(Into::into).collect();
        Self {
            identity: Identity::fresh(),
            items,
        }
    }

    /// Returns the identity token.
    #[inline]
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Returns the number of items.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the sequence holds no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Returns the items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

// =============================================================================
// Mapping
// =============================================================================

/// An identity-compared association list of key/value pairs.
///
/// Lookups normalize keys under loose-number rules, so an `i32` key finds an
/// entry stored under a `u32` key of the same value.
#[derive(Clone)]
pub struct Mapping {
    identity: Identity,
    entries: Rc<[(Value, Value)]>,
}

impl Mapping {
    /// Creates a mapping with a fresh identity.
    #[must_use]
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let entries: Rc<[(Value, Value)]> = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            identity: Identity::fresh(),
            entries,
        }
    }

    /// Returns the identity token.
    #[inline]
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the mapping holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        let wanted = NormalizedValue::of(key);
        self.entries
            .iter()
            .find(|(candidate, _)| wanted.matches(candidate))
            .map(|(_, value)| value)
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Record
// =============================================================================

/// A by-value struct: a type name plus named fields in declaration order.
///
/// Records are usually produced by `#[derive(Record)]`, but can be assembled
/// by hand.
///
/// ```rust
/// use collecta::value::{Record, Value};
///
/// let user = Record::new("User").with_field("id", 33u32).with_field("name", "Lucy");
/// assert_eq!(user.field("name"), Some(&Value::from("Lucy")));
/// assert_eq!(user.field("email"), None);
/// ```
#[derive(Debug, Clone)]
pub struct Record {
    type_name: String,
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record of the given type.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field, replacing any existing field of the same name.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_field(name, value);
        self
    }

    /// Sets a field in place, replacing any existing field of the same name.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Returns the type name.
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the field called `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of fields.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when the record has no fields.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fails with [`AccessError::TypeMismatch`] unless the record is of `type_name`.
    ///
    /// # Errors
    ///
    /// Returns an error when the type names differ.
    pub fn expect_type(&self, type_name: &'static str) -> Result<(), AccessError> {
        if self.type_name == type_name {
            Ok(())
        } else {
            Err(AccessError::TypeMismatch {
                expected: type_name,
                found: Kind::Record,
            })
        }
    }

    /// Reads the field called `name` and converts it to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NoSuchField`] when the field is missing and the
    /// conversion error when it has the wrong shape.
    pub fn field_as<T: FromValue>(&self, name: &str) -> Result<T, AccessError> {
        let value = self.field(name).ok_or_else(|| AccessError::NoSuchField {
            type_name: self.type_name.clone(),
            field: name.to_owned(),
        })?;
        T::from_value(value.clone())
    }
}

// =============================================================================
// Reference
// =============================================================================

/// One level of indirection to another value, possibly nil.
#[derive(Clone)]
pub struct Reference {
    identity: Identity,
    target: Option<Rc<Value>>,
}

impl Reference {
    /// Creates a reference to a freshly allocated target.
    #[must_use]
    pub fn to(target: impl Into<Value>) -> Self {
        Self {
            identity: Identity::fresh(),
            target: Some(Rc::new(target.into())),
        }
    }

    /// Creates a nil reference.
    #[must_use]
    pub const fn nil() -> Self {
        Self {
            identity: Identity::NIL,
            target: None,
        }
    }

    /// Creates a reference carrying an existing identity.
    #[must_use]
    pub fn with_identity(identity: Identity, target: Value) -> Self {
        Self {
            identity,
            target: Some(Rc::new(target)),
        }
    }

    /// Returns the identity token.
    #[inline]
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Returns `true` when there is no target.
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.target.is_none()
    }

    /// Returns the target.
    #[inline]
    #[must_use]
    pub fn target(&self) -> Option<&Value> {
        self.target.as_deref()
    }
}

impl fmt::Debug for Reference {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target() {
            Some(target) => write!(formatter, "&{target:?}"),
            None => formatter.write_str("nil"),
        }
    }
}

// =============================================================================
// Callable
// =============================================================================

type Function = dyn Fn(&[Value]) -> Value;

/// An identity-compared function value.
#[derive(Clone)]
pub struct Callable {
    identity: Identity,
    function: Rc<Function>,
}

impl Callable {
    /// Wraps a closure.
    #[must_use]
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        let function: Rc<Function> = Rc::new(function);
        Self {
            identity: Identity::fresh(),
            function,
        }
    }

    /// Returns the identity token.
    #[inline]
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Invokes the function.
    pub fn call(&self, arguments: &[Value]) -> Value {
        (self.function)(arguments)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Callable({:#x})", self.identity.address())
    }
}

// =============================================================================
// Value
// =============================================================================

/// A runtime-typed value.
///
/// `PartialEq` follows the universal comparator's `=` rule, so it is loose on
/// numbers, tolerant on floats and identity-based on containers.
///
/// # Examples
///
/// ```rust
/// use collecta::value::{Kind, Value};
///
/// assert_eq!(Value::from(3u8).kind(), Kind::U8);
/// assert_eq!(Value::from(3u8), Value::from(3i64));
/// assert_ne!(Value::from(3i64), Value::from(3.0f64));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A number of any width.
    Number(Number),
    /// Owned text.
    Text(String),
    /// An identity-compared list.
    Sequence(Sequence),
    /// An identity-compared association list.
    Mapping(Mapping),
    /// A by-value struct.
    Record(Record),
    /// One level of indirection.
    Reference(Reference),
    /// A function.
    Callable(Callable),
}

static_assertions::assert_not_impl_any!(Value: Send, Sync);

impl Value {
    /// Builds a sequence with a fresh identity.
    #[must_use]
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Sequence(Sequence::new(items))
    }

    /// Builds a mapping with a fresh identity.
    #[must_use]
    pub fn mapping<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Self>,
        V: Into<Self>,
    {
        Self::Mapping(Mapping::new(entries))
    }

    /// Returns the runtime kind.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Number(number) => number.kind(),
            Self::Text(_) => Kind::Text,
            Self::Sequence(_) => Kind::Sequence,
            Self::Mapping(_) => Kind::Mapping,
            Self::Record(_) => Kind::Record,
            Self::Reference(_) => Kind::Reference,
            Self::Callable(_) => Kind::Callable,
        }
    }

    /// Returns `true` for [`Value::Nil`]. A nil [`Reference`] is not nil.
    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` for [`Value::Number`].
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns the number, if this is one.
    #[inline]
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the boolean, if this is one.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the text, if this is text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the sequence, if this is one.
    #[inline]
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Returns the mapping, if this is one.
    #[inline]
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns the record, if this is one.
    #[inline]
    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the reference, if this is one.
    #[inline]
    #[must_use]
    pub const fn as_reference(&self) -> Option<&Reference> {
        match self {
            Self::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Returns the identity token of a reference-like value.
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Sequence(sequence) => Some(sequence.identity()),
            Self::Mapping(mapping) => Some(mapping.identity()),
            Self::Reference(reference) => Some(reference.identity()),
            Self::Callable(callable) => Some(callable.identity()),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        compare(self, Operator::Eq, other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => formatter.write_str("nil"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => write!(formatter, "{number}"),
            Self::Text(text) => formatter.write_str(text),
            Self::Sequence(sequence) => {
                formatter.write_str("[")?;
                for (index, item) in sequence.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str("]")
            }
            Self::Mapping(mapping) => {
                formatter.write_str("{")?;
                for (index, (key, value)) in mapping.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                formatter.write_str("}")
            }
            Self::Record(record) => {
                write!(formatter, "{} {{", record.type_name())?;
                for (index, (name, value)) in record.fields().enumerate() {
                    if index > 0 {
                        formatter.write_str(",")?;
                    }
                    write!(formatter, " {name}: {value}")?;
                }
                formatter.write_str(" }")
            }
            Self::Reference(reference) => match reference.target() {
                Some(target) => write!(formatter, "&{target}"),
                None => formatter.write_str("nil"),
            },
            Self::Callable(_) => formatter.write_str("<callable>"),
        }
    }
}

// =============================================================================
// From conversions
// =============================================================================

macro_rules! impl_value_from_number {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl From<$primitive> for Value {
                #[inline]
                fn from(value: $primitive) -> Self {
                    Self::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Sequence> for Value {
    fn from(sequence: Sequence) -> Self {
        Self::Sequence(sequence)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Reference> for Value {
    fn from(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Self::Callable(callable)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_kind_of_every_variant() {
        assert_eq!(Value::Nil.kind(), Kind::Nil);
        assert_eq!(Value::from(true).kind(), Kind::Bool);
        assert_eq!(Value::from(1i16).kind(), Kind::I16);
        assert_eq!(Value::from("a").kind(), Kind::Text);
        assert_eq!(Value::sequence([1]).kind(), Kind::Sequence);
        assert_eq!(Value::mapping([("a", 1)]).kind(), Kind::Mapping);
        assert_eq!(Value::from(Record::new("User")).kind(), Kind::Record);
        assert_eq!(Value::from(Reference::nil()).kind(), Kind::Reference);
        assert_eq!(
            Value::from(Callable::new(|_| Value::Nil)).kind(),
            Kind::Callable
        );
    }

    #[rstest]
    fn test_clone_shares_identity() {
        let sequence = Value::sequence([1, 2, 3]);
        let copy = sequence.clone();
        assert_eq!(sequence.identity(), copy.identity());
        assert_ne!(sequence.identity(), Value::sequence([1, 2, 3]).identity());
    }

    #[rstest]
    fn test_fresh_identities_outlive_their_creators() {
        let tokens: Vec<Identity> = (0..64)
            .map(|_| Value::sequence([0]).identity().cloned().unwrap_or(Identity::NIL))
            .collect();
        for (index, token) in tokens.iter().enumerate() {
            assert!(!token.is_nil());
            assert!(tokens[index + 1..].iter().all(|other| other != token));
        }
    }

    #[rstest]
    fn test_rc_identity_names_the_shared_allocation() {
        let shared = Rc::new(5);
        assert_eq!(Identity::of_rc(&shared), Identity::of_rc(&Rc::clone(&shared)));
        assert_ne!(Identity::of_rc(&shared), Identity::of_rc(&Rc::new(5)));
        assert_eq!(Identity::NIL.address(), 0);
        assert!(Identity::NIL.is_nil());
    }

    #[rstest]
    fn test_mapping_lookup_is_loose_on_numbers() {
        let mapping = Mapping::new([(Value::from(0u32), Value::from("Hello"))]);
        assert_eq!(mapping.get(&Value::from(0i32)), Some(&Value::from("Hello")));
        assert_eq!(mapping.get(&Value::from(1i32)), None);
    }

    #[rstest]
    fn test_mapping_lookup_by_text_and_container_keys() {
        let key = Value::sequence([1]);
        let mapping = Mapping::new([
            (Value::from("mode"), Value::from("fast")),
            (key.clone(), Value::from(true)),
        ]);
        assert_eq!(mapping.get(&Value::from("mode")), Some(&Value::from("fast")));
        assert_eq!(mapping.get(&Value::from("Mode")), None);
        assert_eq!(mapping.get(&key), Some(&Value::from(true)));
        assert_eq!(mapping.get(&Value::sequence([1])), None);
    }

    #[rstest]
    fn test_record_set_field_replaces() {
        let mut record = Record::new("User").with_field("name", "Lucy");
        record.set_field("name", "Peter");
        assert_eq!(record.len(), 1);
        assert_eq!(record.field("name").and_then(Value::as_str), Some("Peter"));
    }

    #[rstest]
    fn test_record_expect_type() {
        let record = Record::new("User");
        assert!(record.expect_type("User").is_ok());
        assert!(record.expect_type("Order").is_err());
    }

    #[rstest]
    fn test_callable_invokes_closure() {
        let double = Callable::new(|arguments| match arguments.first().and_then(Value::as_number) {
            Some(Number::I32(value)) => Value::from(value * 2),
            _ => Value::Nil,
        });
        assert_eq!(double.call(&[Value::from(21)]), Value::from(42));
    }

    #[rstest]
    #[case(Value::Nil, "nil")]
    #[case(Value::from(1.5f64), "1.5")]
    #[case(Value::sequence([1, 2]), "[1, 2]")]
    #[case(Value::from(Record::new("User").with_field("id", 1)), "User { id: 1 }")]
    #[case(Value::from(Reference::nil()), "nil")]
    fn test_display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }
}
