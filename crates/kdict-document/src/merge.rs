//! Deep merge of partial updates
//!
//! Mappings merge key by key; every other value, sequences included, replaces
//! the target wholesale.

use kdict_value::{Map, Value};

/// Merge `source` into `target` in place
///
/// For each key of `source`: if both sides hold a mapping, recurse; otherwise
/// the source value overwrites the target (or is inserted). Keys already in
/// `target` keep their position.
///
/// # Examples
/// ```
/// # use kdict_document::deep_merge;
/// # use kdict_document::Value;
/// # use serde_json::json;
/// let mut target = match Value::from(json!({"cell": {"a": 1, "b": 2}, "tags": [1, 2]})) {
///     Value::Map(map) => map,
///     _ => unreachable!(),
/// };
/// let source = match Value::from(json!({"cell": {"b": 3}, "tags": [9]})) {
///     Value::Map(map) => map,
///     _ => unreachable!(),
/// };
///
/// deep_merge(&mut target, source);
/// assert_eq!(Value::Map(target), Value::from(json!({"cell": {"a": 1, "b": 3}, "tags": [9]})));
/// ```
pub fn deep_merge(target: &mut Map, source: Map) {
    for (key, incoming) in source {
        match incoming {
            Value::Map(incoming) => {
                if let Some(Value::Map(existing)) = target.get_mut(&key) {
                    deep_merge(existing, incoming);
                    continue;
                }
                target.insert(key, Value::Map(incoming));
            }
            other => {
                target.insert(key, other);
            }
        }
    }
}
