//! Core identifier and style types.
//!
//! This module defines the fundamental data types for the animation driver:
//! - `ElementId`: Opaque handle for a host-owned visual element
//! - `StyleValue`: Numeric or textual style property value
//! - `StyleMap`: Named set of style property assignments

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Opaque handle identifying a visual element owned by the host surface.
///
/// The driver never dereferences elements itself; every style write and
/// event subscription is routed through the host traits keyed by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// A style property value, either numeric or textual.
///
/// Values are passed through to the styling surface untouched; the driver
/// performs no unit handling or validation of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Numeric value (opacity, width, etc.)
    Number(f64),
    /// Textual value (colors, transforms, keywords).
    Text(String),
}

impl StyleValue {
    /// Try to extract a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Try to extract a textual value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Named set of style property assignments representing one visual state.
///
/// Keys are unique; insertion order is irrelevant since a map is always
/// applied as a whole. Used both for the starting ("from") and the target
/// ("to") state of an animation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    values: BTreeMap<String, StyleValue>,
}

impl StyleMap {
    /// Create a new empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property value, replacing any previous value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<StyleValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Set a property value, chaining style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a property value.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.values.get(name)
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the number of properties in the map.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate over all property-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleValue)> {
        self.values.iter()
    }
}

impl FromIterator<(String, StyleValue)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
