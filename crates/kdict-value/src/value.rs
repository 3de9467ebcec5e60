//! Document value model
//!
//! [`Value`] is the node type of every template and document. The canonical
//! variants mirror JSON; [`Value::Scalar`], [`Value::Array`] and
//! [`Value::Opaque`] hold host-runtime data as-is until
//! [`normalize`](crate::normalize) folds them away at the serialization boundary.

use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, TimeZone};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::array::NumericArray;
use crate::scalar::Scalar;

/// Insertion-ordered mapping node
pub type Map = IndexMap<String, Value>;

/// Nested document node
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Unset leaf
    #[default]
    Null,
    /// Boolean leaf
    Bool(bool),
    /// Signed integer leaf
    Int(i64),
    /// Double-precision float leaf
    Float(f64),
    /// UTF-8 text leaf
    String(String),
    /// Ordered sequence; always replaced wholesale on merge
    Seq(Vec<Value>),
    /// Nested mapping; merged key by key
    Map(Map),
    /// Width-tagged numeric or boolean wrapper
    Scalar(Scalar),
    /// Homogeneous n-dimensional numeric array
    Array(NumericArray),
    /// Any other value, kept with its string representation
    Opaque(Opaque),
}

impl Value {
    /// Empty mapping node
    #[inline]
    #[must_use]
    pub fn map() -> Self {
        Self::Map(Map::new())
    }

    /// Wrap an arbitrary displayable value
    ///
    /// The value is rendered once, here; it serializes as that string.
    #[inline]
    #[must_use]
    pub fn opaque<T: Display + ?Sized>(value: &T) -> Self {
        Self::Opaque(Opaque::new(value))
    }

    /// Check for an unset leaf
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check for a mapping node
    #[inline]
    #[must_use]
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Check for a sequence node
    #[inline]
    #[must_use]
    pub fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    /// Boolean view, including boolean wrappers
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) | Self::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Integer view of an `Int` node
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Float view of a numeric node (integers widen)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            Self::Scalar(Scalar::F32(f)) => Some(f64::from(*f)),
            Self::Scalar(Scalar::F64(f)) => Some(*f),
            _ => None,
        }
    }

    /// Borrow the text of a `String` node
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the items of a sequence
    #[inline]
    #[must_use]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow a mapping node
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Mutably borrow a mapping node
    #[inline]
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Short name of the node kind, for diagnostics
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Seq(_) => "sequence",
            Self::Map(_) => "mapping",
            Self::Scalar(_) => "scalar",
            Self::Array(_) => "array",
            Self::Opaque(_) => "opaque",
        }
    }
}

/// Value of a type the document model does not know
///
/// Captures the originating type name and the value's `Display` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opaque {
    type_name: &'static str,
    repr: String,
}

impl Opaque {
    /// Render `value` and remember its type name
    #[must_use]
    pub fn new<T: Display + ?Sized>(value: &T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            repr: value.to_string(),
        }
    }

    /// Rust type name of the wrapped value
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// String representation used on serialization
    #[inline]
    #[must_use]
    pub fn repr(&self) -> &str {
        &self.repr
    }
}

impl Display for Opaque {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

macro_rules! from_lossless_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Scalar(Scalar::U64(value)), Self::Int)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on supported targets
        Self::from(value as u64)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Scalar(Scalar::F32(value))
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Value {
    #[inline]
    fn from(map: Map) -> Self {
        Self::Map(map)
    }
}

impl From<Scalar> for Value {
    #[inline]
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<NumericArray> for Value {
    #[inline]
    fn from(array: NumericArray) -> Self {
        Self::Array(array)
    }
}

impl From<Opaque> for Value {
    #[inline]
    fn from(opaque: Opaque) -> Self {
        Self::Opaque(opaque)
    }
}

impl<Tz> From<DateTime<Tz>> for Value
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn from(timestamp: DateTime<Tz>) -> Self {
        Self::opaque(&timestamp)
    }
}

/// Lift parsed JSON/YAML data into the document model
///
/// Integers that fit `i64` become [`Value::Int`]; larger unsigned integers
/// stay tagged as [`Scalar::U64`].
impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Scalar(Scalar::U64(u))
                } else {
                    n.as_f64().map_or(Self::Null, Self::Float)
                }
            }
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::Seq(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(map) => {
                Self::Map(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
