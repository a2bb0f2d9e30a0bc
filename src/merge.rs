//! Merging heterogeneous JSON values into a single object.

use indexmap::IndexMap;
use serde_json::Value;

/// Merge an ordered sequence of JSON values into a single object.
///
/// Elements that are not objects (numbers, strings, booleans, nulls,
/// arrays) are skipped. Later objects overwrite keys set by earlier
/// ones, so the merged value for a key comes from the last object in
/// the sequence that defines it. Key order follows first insertion.
///
/// An empty input yields an empty map.
pub fn merge_values(values: &[Value]) -> IndexMap<String, Value> {
    let mut merged = IndexMap::new();

    for value in values {
        if let Value::Object(fields) = value {
            for (key, field) in fields {
                merged.insert(key.clone(), field.clone());
            }
        }
    }

    merged
}

/// Merge like [`merge_values`] but return the result as a JSON object.
///
/// Convenient for callers feeding the merged result back into JSON
/// plumbing (serialization, further merging).
pub fn merge_values_json(values: &[Value]) -> Value {
    Value::Object(merge_values(values).into_iter().collect())
}
