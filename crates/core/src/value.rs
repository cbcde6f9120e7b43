//! Value types for nyan
//!
//! This module defines:
//! - Value: the dynamically-typed value every container stores
//! - ValueKind: the runtime kind tag of a value
//!
//! ## Type Rules
//!
//! - Different kinds are NEVER equal: `Int(1) != Float(1.0)`,
//!   `Text("a") != Object("a")`, an empty `Set` != an empty `OrderedSet`
//! - Float equality is total so floats can be set members:
//!   `NaN == NaN` and `-0.0 == 0.0`. Hashing agrees with equality.
//! - `Set` equality ignores member order, `OrderedSet` equality does not
//!
//! Containers are values themselves, so sets can be nested.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::container::{Container, OrderedSet, Set};
use crate::error::{Error, Result};

/// Runtime kind of a [`Value`]
///
/// Used for type discrimination, error reporting and as the concrete-kind
/// tag of containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// UTF-8 text
    Text,
    /// File path
    File,
    /// Reference to a nyan object by fully-qualified name
    Object,
    /// Unordered set of values
    Set,
    /// Insertion-ordered set of values
    OrderedSet,
}

impl ValueKind {
    /// All value kinds (for iteration)
    pub const ALL: [ValueKind; 8] = [
        ValueKind::Bool,
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::Text,
        ValueKind::File,
        ValueKind::Object,
        ValueKind::Set,
        ValueKind::OrderedSet,
    ];

    /// Human-readable name, as written in nyan type annotations
    pub const fn name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::File => "file",
            ValueKind::Object => "object",
            ValueKind::Set => "set",
            ValueKind::OrderedSet => "orderedset",
        }
    }

    /// Whether values of this kind implement [`Container`]
    pub const fn is_container(&self) -> bool {
        matches!(self, ValueKind::Set | ValueKind::OrderedSet)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A nyan value
///
/// Every entry of a container is a `Value`, and the built-in containers are
/// `Value`s themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(#[serde(with = "float_repr")] f64),
    /// UTF-8 text
    Text(String),
    /// File path, kept as written
    File(String),
    /// Object reference; the fully-qualified object name is its identity
    Object(String),
    /// Unordered set
    Set(Set),
    /// Insertion-ordered set
    OrderedSet(OrderedSet),
}

/// Serde form of `Value::Float`
///
/// JSON has no literal for non-finite numbers, so `NaN`, `inf` and `-inf`
/// are written as those strings. Finite floats stay plain numbers.
mod float_repr {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value.is_infinite() {
            serializer.serialize_str(if *value > 0.0 { "inf" } else { "-inf" })
        } else {
            value.serialize(serializer)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Number(f) => Ok(f),
            Repr::Text(s) => match s.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!("invalid float: {other:?}"))),
            },
        }
    }
}

/// Bit pattern used for float equality and hashing.
///
/// Collapses every NaN to one pattern and `-0.0` to `0.0`.
fn canonical_bits(f: f64) -> u64 {
    if f.is_nan() {
        f64::NAN.to_bits()
    } else if f == 0.0 {
        0
    } else {
        f.to_bits()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => canonical_bits(*a) == canonical_bits(*b),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::File(a), Value::File(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a == b,
            (Value::OrderedSet(a), Value::OrderedSet(b)) => a == b,
            // Different kinds are never equal
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(f) => canonical_bits(*f).hash(state),
            Value::Text(s) | Value::File(s) | Value::Object(s) => s.hash(state),
            Value::Set(s) => s.hash(state),
            Value::OrderedSet(s) => s.hash(state),
        }
    }
}

impl Value {
    /// Runtime kind of this value
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::File(_) => ValueKind::File,
            Value::Object(_) => ValueKind::Object,
            Value::Set(_) => ValueKind::Set,
            Value::OrderedSet(_) => ValueKind::OrderedSet,
        }
    }

    /// Get the type name as a string
    pub const fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Build an object reference value
    pub fn object(name: impl Into<String>) -> Self {
        Value::Object(name.into())
    }

    /// Build a file value
    pub fn file(path: impl Into<String>) -> Self {
        Value::File(path.into())
    }

    /// Check if this value is a container
    pub const fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as &str if this is a Text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the object name if this is an Object value
    pub fn as_object(&self) -> Option<&str> {
        match self {
            Value::Object(name) => Some(name),
            _ => None,
        }
    }

    /// Borrow this value through the container interface
    pub fn as_container(&self) -> Option<&dyn Container> {
        match self {
            Value::Set(s) => Some(s as &dyn Container),
            Value::OrderedSet(s) => Some(s as &dyn Container),
            _ => None,
        }
    }

    /// Mutably borrow this value through the container interface
    pub fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        match self {
            Value::Set(s) => Some(s as &mut dyn Container),
            Value::OrderedSet(s) => Some(s as &mut dyn Container),
            _ => None,
        }
    }

    /// Like [`Value::as_container`], but reports the actual kind on failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if this value is not a container.
    pub fn expect_container(&self) -> Result<&dyn Container> {
        let actual = self.kind();
        self.as_container().ok_or(Error::TypeMismatch {
            expected: "container",
            actual,
        })
    }

    /// Like [`Value::as_container_mut`], but reports the actual kind on failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if this value is not a container.
    pub fn expect_container_mut(&mut self) -> Result<&mut dyn Container> {
        let actual = self.kind();
        self.as_container_mut().ok_or(Error::TypeMismatch {
            expected: "container",
            actual,
        })
    }

    /// Serialize to a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a value from a JSON string produced by [`Value::to_json`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the input is not a valid encoding.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::File(path) => write!(f, "{path}"),
            Value::Object(name) => f.write_str(name),
            Value::Set(s) => write!(f, "{s}"),
            Value::OrderedSet(s) => write!(f, "{s}"),
        }
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Set> for Value {
    fn from(s: Set) -> Self {
        Value::Set(s)
    }
}

impl From<OrderedSet> for Value {
    fn from(s: OrderedSet) -> Self {
        Value::OrderedSet(s)
    }
}
