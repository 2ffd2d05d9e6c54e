//! Render-context data carriers.
//!
//! - [`Contribution`]: what one widget hands back during composition
//! - [`SharedContext`]: page-wide data, mutated as each widget is composed
//! - [`RenderContext`]: the queryable result handed to the page template engine
//! - [`ContextBuilder`]: the seam turning contributions into a render context

use serde_json::{Map, Value};

/// Ordered key/value pairs contributed by one widget.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contribution {
    entries: Vec<(String, Value)>,
}

impl Contribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// A contribution holding a single entry.
    pub fn single(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            entries: vec![(key.into(), value.into())],
        }
    }

    /// Add an entry; an existing entry with the same key is replaced in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Contribution {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut contribution = Self::new();
        for (key, value) in iter {
            contribution.insert(key, value);
        }
        contribution
    }
}

/// Accumulating page-wide data. Merges are last-writer-wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedContext {
    values: Map<String, Value>,
}

impl SharedContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// The boolean stored under `key`; `None` when absent or not a boolean.
    pub fn flag(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(Value::as_bool)
    }

    /// Copy every entry of `contribution` in, overwriting existing keys.
    pub fn merge(&mut self, contribution: &Contribution) {
        for (key, value) in contribution.entries() {
            self.values.insert(key.clone(), value.clone());
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.values
    }
}

impl From<Map<String, Value>> for SharedContext {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

/// Layered, queryable context for full-page rendering.
///
/// Lookups search from the most recently added layer backwards, so a key present
/// in several layers resolves to the last one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    layers: Vec<Contribution>,
}

impl RenderContext {
    pub fn from_layers(layers: Vec<Contribution>) -> Self {
        Self { layers }
    }

    /// A single-layer context from a JSON object; any other value yields an empty context.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self {
                layers: vec![map.into_iter().collect()],
            },
            _ => Self::default(),
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.layers.iter().rev().find_map(|layer| layer.get(key))
    }

    pub fn layers(&self) -> &[Contribution] {
        &self.layers
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(Contribution::is_empty)
    }

    /// Flatten every layer, in order, into one JSON object.
    pub fn flatten(&self) -> Map<String, Value> {
        let mut merged = Map::new();
        for layer in &self.layers {
            for (key, value) in layer.entries() {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }

    /// A Tera context for rendering a page template against this context.
    pub fn to_tera_context(&self) -> tera::Context {
        let mut context = tera::Context::new();
        for (key, value) in self.flatten() {
            context.insert(key, &value);
        }
        context
    }
}

/// Builds the final render context from the ordered per-widget contributions.
pub trait ContextBuilder {
    type Output;

    fn build(&self, contributions: Vec<Contribution>) -> Self::Output;
}

/// Default builder: every contribution becomes one [`RenderContext`] layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayeredContextBuilder;

impl ContextBuilder for LayeredContextBuilder {
    type Output = RenderContext;

    fn build(&self, contributions: Vec<Contribution>) -> RenderContext {
        RenderContext::from_layers(contributions)
    }
}
