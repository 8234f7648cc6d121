use crate::Result as CoreErrorResult;

use serde::Serialize;
use serde_json::{Map, Value};

/// Context key holding the resolved template id
pub const MODEL_TEMPLATE_KEY: &str = "model_template";
/// Context key holding the triggering record under its generic name
pub const OBJECT_KEY: &str = "object";

/// Template variables handed to the renderer alongside a broadcast
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BroadcastContext(Map<String, Value>);

impl BroadcastContext {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Serialize `value` and store it under `key`
    pub fn insert_serialized<T: Serialize + ?Sized>(
        &mut self,
        key: impl Into<String>,
        value: &T,
    ) -> CoreErrorResult<()> {
        self.0.insert(key.into(), serde_json::to_value(value)?);
        Ok(())
    }

    /// Merge `other` into this context; keys from `other` win
    pub fn merge(&mut self, other: BroadcastContext) {
        self.0.extend(other.0);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
