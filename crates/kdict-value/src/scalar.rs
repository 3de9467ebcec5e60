//! Width-specific scalar wrappers
//!
//! Provides [`Scalar`] for numeric values whose host type is narrower or wider
//! than the canonical `i64`/`f64`, and [`Element`] for the primitive types a
//! [`NumericArray`](crate::NumericArray) may hold.

use std::fmt::{self, Display, Formatter};

/// Element type of a scalar or array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dtype {
    /// Boolean
    Bool,
    /// 8-bit signed integer
    I8,
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 8-bit unsigned integer
    U8,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
    /// Single-precision float
    F32,
    /// Double-precision float
    F64,
}

impl Dtype {
    /// Check if this is a floating-point type
    #[inline]
    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Check if this is a signed or unsigned integer type
    #[inline]
    #[must_use]
    pub fn is_integer(self) -> bool {
        !self.is_float() && self != Self::Bool
    }

    /// Conventional name (`float32`, `uint8`, ...)
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "int8",
            Self::I16 => "int16",
            Self::I32 => "int32",
            Self::I64 => "int64",
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::U32 => "uint32",
            Self::U64 => "uint64",
            Self::F32 => "float32",
            Self::F64 => "float64",
        }
    }
}

impl Display for Dtype {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric or boolean scalar tagged with its host width
///
/// Normalizes to a plain boolean, integer or float. Booleans stay booleans:
/// `Scalar::Bool(true)` never becomes `1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// `bool` value
    Bool(bool),
    /// `i8` value
    I8(i8),
    /// `i16` value
    I16(i16),
    /// `i32` value
    I32(i32),
    /// `i64` value
    I64(i64),
    /// `u8` value
    U8(u8),
    /// `u16` value
    U16(u16),
    /// `u32` value
    U32(u32),
    /// `u64` value
    U64(u64),
    /// `f32` value
    F32(f32),
    /// `f64` value
    F64(f64),
}

impl Scalar {
    /// Element type of this scalar
    #[must_use]
    pub fn dtype(self) -> Dtype {
        match self {
            Self::Bool(_) => Dtype::Bool,
            Self::I8(_) => Dtype::I8,
            Self::I16(_) => Dtype::I16,
            Self::I32(_) => Dtype::I32,
            Self::I64(_) => Dtype::I64,
            Self::U8(_) => Dtype::U8,
            Self::U16(_) => Dtype::U16,
            Self::U32(_) => Dtype::U32,
            Self::U64(_) => Dtype::U64,
            Self::F32(_) => Dtype::F32,
            Self::F64(_) => Dtype::F64,
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
        }
    }
}

/// Primitive type that can be stored in a [`NumericArray`](crate::NumericArray)
pub trait Element: Copy + Into<Scalar> {
    /// Element type tag
    const DTYPE: Dtype;
}

macro_rules! impl_element {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl Element for $ty {
                const DTYPE: Dtype = Dtype::$variant;
            }
        )*
    };
}

impl_element! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}
