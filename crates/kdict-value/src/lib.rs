//! kdict Values
//!
//! The tagged value model behind knowledge dictionaries.
//!
//! # Core Concepts
//!
//! - [`Value`]: Nested document node (`Null | Bool | Int | Float | String | Seq | Map`)
//!   plus the host-runtime variants that only exist until serialization
//! - [`Scalar`]: Width-specific numeric or boolean wrapper (`f32`, `u8`, ...)
//! - [`NumericArray`]: Homogeneous n-dimensional numeric array with a shape
//! - [`normalize`]: Folds a [`Value`] into a canonical [`serde_json::Value`]
//!
//! # Example
//!
//! ```
//! use kdict_value::{normalize, NumericArray, Value};
//! use serde_json::json;
//!
//! let rotation = NumericArray::from_rows(&[[1.0_f32, 0.0], [0.0, 1.0]]);
//! let value = Value::from(rotation);
//!
//! assert_eq!(normalize(&value), json!([[1.0, 0.0], [0.0, 1.0]]));
//! ```

#![warn(unreachable_pub)]

mod array;
mod normalize;
mod scalar;
mod value;

pub use array::{NumericArray, ValueError};
pub use normalize::{normalize, normalize_map};
pub use scalar::{Dtype, Element, Scalar};
pub use value::{Map, Opaque, Value};

/// Canonical serializable value produced by [`normalize`]
pub type JsonValue = serde_json::Value;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
