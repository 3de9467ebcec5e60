//! Serialization-boundary normalization
//!
//! Folds host-runtime variants into canonical JSON. Never fails: values that
//! have no JSON form degrade to their string representation.

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::scalar::Scalar;
use crate::value::{Map, Value};

/// Normalize a value into its canonical serializable form
///
/// Rules, first match wins:
/// 1. mappings recurse, keeping key order
/// 2. sequences recurse
/// 3. numeric arrays become nested sequences following their shape
/// 4. float wrappers become plain floats
/// 5. integer wrappers become plain integers
/// 6. boolean wrappers become plain booleans
/// 7. null, strings, floats and integers pass through
/// 8. anything else becomes its string representation
///
/// # Examples
/// ```
/// # use kdict_value::{normalize, Scalar, Value};
/// # use serde_json::json;
/// assert_eq!(normalize(&Value::Scalar(Scalar::Bool(true))), json!(true));
/// assert_eq!(normalize(&Value::Scalar(Scalar::U8(7))), json!(7));
/// ```
#[must_use]
pub fn normalize(value: &Value) -> JsonValue {
    match value {
        Value::Map(map) => JsonValue::Object(normalize_map(map)),
        Value::Seq(items) => JsonValue::Array(items.iter().map(normalize).collect()),
        Value::Array(array) => nest(array.shape(), array.data()),
        Value::Scalar(scalar) => normalize_scalar(*scalar),
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(i) => JsonValue::from(*i),
        Value::Float(f) => float(*f),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Opaque(opaque) => JsonValue::String(opaque.repr().to_owned()),
    }
}

/// Normalize every value of a mapping, keeping key order
#[must_use]
pub fn normalize_map(map: &Map) -> JsonMap<String, JsonValue> {
    map.iter().map(|(k, v)| (k.clone(), normalize(v))).collect()
}

fn normalize_scalar(scalar: Scalar) -> JsonValue {
    match scalar {
        Scalar::F32(v) => float(f64::from(v)),
        Scalar::F64(v) => float(v),
        Scalar::I8(v) => JsonValue::from(v),
        Scalar::I16(v) => JsonValue::from(v),
        Scalar::I32(v) => JsonValue::from(v),
        Scalar::I64(v) => JsonValue::from(v),
        Scalar::U8(v) => JsonValue::from(v),
        Scalar::U16(v) => JsonValue::from(v),
        Scalar::U32(v) => JsonValue::from(v),
        Scalar::U64(v) => JsonValue::from(v),
        Scalar::Bool(v) => JsonValue::Bool(v),
    }
}

/// NaN and infinities have no JSON number form
fn float(value: f64) -> JsonValue {
    Number::from_f64(value).map_or_else(
        || {
            tracing::warn!(value = %value, "non-finite float serialized as string");
            JsonValue::String(value.to_string())
        },
        JsonValue::Number,
    )
}

/// Rebuild row-major data as nested sequences
fn nest(shape: &[usize], data: &[Scalar]) -> JsonValue {
    match shape.split_first() {
        None => data.first().copied().map_or(JsonValue::Null, normalize_scalar),
        Some((&outer, inner)) => {
            let stride: usize = inner.iter().product();
            JsonValue::Array(
                (0..outer)
                    .map(|i| nest(inner, &data[i * stride..(i + 1) * stride]))
                    .collect(),
            )
        }
    }
}
