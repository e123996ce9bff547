// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Setter value transforms.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::observability::messages::property::SetterTransformed;
use crate::observability::messages::StructuredLog;

/// A deterministic, field-wise rewrite of a value on its way into a setter.
///
/// Transforms never fail; anything thrown by the underlying storage path
/// propagates to the assigning caller unmodified.
pub trait SetterTransform: Send + Sync {
    fn apply(&self, value: Map<String, Value>) -> Map<String, Value>;

    fn name(&self) -> &'static str;
}

/// Adds a constant to every numeric field of the assigned object.
///
/// The amount is captured at creation time and shared by every invocation;
/// it is never mutated afterwards. Fields absent from the input stay absent
/// from the output, integer fields stay integers, and non-numeric fields
/// pass through untouched.
#[derive(Debug, Clone)]
pub struct AddOffset {
    amount: i64,
}

impl AddOffset {
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }

    fn offset(&self, value: Value) -> Value {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::from(i + self.amount)
                } else if let Some(f) = n.as_f64() {
                    Value::from(f + self.amount as f64)
                } else {
                    Value::Number(n)
                }
            }
            other => other,
        }
    }
}

impl SetterTransform for AddOffset {
    fn apply(&self, value: Map<String, Value>) -> Map<String, Value> {
        value
            .into_iter()
            .map(|(key, field)| (key, self.offset(field)))
            .collect()
    }

    fn name(&self) -> &'static str {
        "add_offset"
    }
}

/// Factory: an [`AddOffset`] transform ready for registration.
pub fn add_offset(amount: i64) -> Arc<dyn SetterTransform> {
    Arc::new(AddOffset::new(amount))
}

/// A property whose setter routes through registered transforms before the
/// value is committed.
///
/// Transforms apply in registration order, then the final value is stored.
/// The getter is unaffected: reading returns exactly what the transformed
/// setter stored, and never re-applies the transforms.
///
/// # Example
/// ```
/// use interpose::property::{add_offset, TransformedProperty};
/// use serde_json::json;
///
/// let mut point = TransformedProperty::new("point");
/// point.register(add_offset(2));
///
/// point.set(json!({"x": 1, "y": 1}).as_object().unwrap().clone());
/// assert_eq!(json!(point.get().clone()), json!({"x": 3, "y": 3}));
/// ```
pub struct TransformedProperty {
    name: String,
    transforms: Vec<Arc<dyn SetterTransform>>,
    stored: Map<String, Value>,
}

impl TransformedProperty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transforms: Vec::new(),
            stored: Map::new(),
        }
    }

    /// Register a transform. The first registered applies first.
    pub fn register(&mut self, transform: Arc<dyn SetterTransform>) {
        self.transforms.push(transform);
    }

    /// Assign a value: apply every transform in registration order, then
    /// commit the result.
    pub fn set(&mut self, value: Map<String, Value>) {
        let transformed = self
            .transforms
            .iter()
            .fold(value, |value, transform| transform.apply(value));

        SetterTransformed {
            property: &self.name,
            transform_count: self.transforms.len(),
        }
        .log();

        self.stored = transformed;
    }

    /// Read the committed (already transformed) value.
    pub fn get(&self) -> &Map<String, Value> {
        &self.stored
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
