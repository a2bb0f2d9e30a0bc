//! Form payload encoding with per-field transform pipelines.
//!
//! [`encode_form`] turns a JSON object into an ordered list of form parts
//! suitable for multipart submission, applying any transforms registered
//! for a field before the part is written. Actually submitting the payload
//! is the caller's concern.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// A value-to-value transform applied to a field before encoding.
pub type TransformFn = Box<dyn Fn(Value) -> Value>;

/// Transform specification for a single field: one function or an
/// ordered pipeline applied left-to-right.
pub enum Transform {
    /// A single transform function
    Single(TransformFn),
    /// An ordered sequence of transform functions, each fed the
    /// previous one's output
    Pipeline(Vec<TransformFn>),
}

impl Transform {
    /// Apply the transform to a value.
    pub fn apply(&self, value: Value) -> Value {
        match self {
            Transform::Single(f) => f(value),
            Transform::Pipeline(fs) => fs.iter().fold(value, |value, f| f(value)),
        }
    }
}

/// Per-field transform registry keyed by field name.
///
/// Fields without a registered transform are encoded unchanged.
#[derive(Default)]
pub struct Transforms {
    by_field: HashMap<String, Transform>,
}

impl Transforms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single transform for a field.
    pub fn single<F>(mut self, field: impl Into<String>, f: F) -> Self
    where
        F: Fn(Value) -> Value + 'static,
    {
        self.by_field.insert(field.into(), Transform::Single(Box::new(f)));
        self
    }

    /// Register an ordered transform pipeline for a field.
    pub fn pipeline(mut self, field: impl Into<String>, fs: Vec<TransformFn>) -> Self {
        self.by_field.insert(field.into(), Transform::Pipeline(fs));
        self
    }

    /// Look up the transform registered for a field, if any.
    pub fn get(&self, field: &str) -> Option<&Transform> {
        self.by_field.get(field)
    }

    pub fn len(&self) -> usize {
        self.by_field.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }
}

/// An ordered multipart-style form payload.
///
/// Parts keep the order they were first set in. Serializes as a JSON
/// object for logging and snapshots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormPayload {
    parts: Vec<(String, Value)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a part, replacing an existing part with the same name in place.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        if let Some((_, existing)) = self.parts.iter_mut().find(|(n, _)| *n == name) {
            *existing = value;
        } else {
            self.parts.push((name, value));
        }
    }

    /// Get a part's value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.parts.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterate parts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.parts.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Render all parts as (name, text) pairs for a multipart builder.
    ///
    /// String values are emitted verbatim; everything else is rendered
    /// as compact JSON.
    pub fn text_parts(&self) -> Vec<(String, String)> {
        self.parts.iter().map(|(n, v)| (n.clone(), part_text(v))).collect()
    }
}

impl IntoIterator for FormPayload {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}

impl Serialize for FormPayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.parts.len()))?;
        for (name, value) in &self.parts {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

fn part_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Encode a JSON object into a form payload.
///
/// One part is written per source key, in source iteration order. When a
/// transform is registered for a key it is applied first; pipelines run
/// left-to-right with each function fed the previous output. The source
/// object is not mutated. A panicking transform propagates to the caller.
pub fn encode_form(source: &Map<String, Value>, transforms: Option<&Transforms>) -> FormPayload {
    let mut payload = FormPayload::new();

    for (key, value) in source {
        let value = match transforms.and_then(|t| t.get(key)) {
            Some(transform) => transform.apply(value.clone()),
            None => value.clone(),
        };
        payload.set(key.clone(), value);
    }

    payload
}
