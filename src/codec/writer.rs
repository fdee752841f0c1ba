//! JSON object builder used by model encoders.

use serde_json::{Map, Value};

use super::{JsonModel, WireEnum};

/// Accumulates the wire fields of one record.
///
/// `put*` always writes; `put_opt*` writes only when the value is present, so
/// unset optional fields never show up as `null`.
#[derive(Debug, Default)]
pub struct ObjectWriter {
    object: Map<String, Value>,
}

impl ObjectWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.object.insert(key.to_string(), value.into());
        self
    }

    pub fn put_opt<V>(&mut self, key: &str, value: &Option<V>) -> &mut Self
    where
        V: Clone + Into<Value>,
    {
        if let Some(value) = value {
            self.put(key, value.clone());
        }
        self
    }

    pub fn put_variant<T: WireEnum>(&mut self, key: &str, value: T) -> &mut Self {
        self.put(key, value.as_wire())
    }

    pub fn put_opt_variant<T: WireEnum>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.put_variant(key, value);
        }
        self
    }

    pub fn put_model<T: JsonModel>(&mut self, key: &str, value: &T) -> &mut Self {
        self.put(key, value.to_json())
    }

    pub fn put_opt_model<T: JsonModel>(&mut self, key: &str, value: &Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.put_model(key, value);
        }
        self
    }

    pub fn put_models<T: JsonModel>(&mut self, key: &str, values: &[T]) -> &mut Self {
        let items: Vec<Value> = values.iter().map(T::to_json).collect();
        self.put(key, items)
    }

    pub fn put_opt_models<T: JsonModel>(
        &mut self,
        key: &str,
        values: &Option<Vec<T>>,
    ) -> &mut Self {
        if let Some(values) = values {
            self.put_models(key, values);
        }
        self
    }

    pub fn finish(self) -> Value {
        Value::Object(self.object)
    }
}
