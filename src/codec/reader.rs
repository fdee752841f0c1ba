//! Field-level access to a JSON object being decoded.

use serde_json::{Map, Value};
use tracing::debug;

use super::error::{DecodeError, DecodeErrorKind};
use super::options::{ArrayPolicy, DecodeOptions};
use super::{JsonModel, Metadata, WireEnum};

/// Typed view over the fields of one JSON object.
///
/// The plain accessors (`string`, `bool`, `model`, ...) are for required
/// fields and fail on a missing or mistyped key. The `opt_*` accessors are for
/// optional fields and turn every failure into `None`.
pub struct ObjectReader<'a> {
    object: &'a Map<String, Value>,
    options: &'a DecodeOptions,
}

impl<'a> ObjectReader<'a> {
    pub fn new(value: &'a Value, options: &'a DecodeOptions) -> Result<Self, DecodeError> {
        match value {
            Value::Object(object) => Ok(Self { object, options }),
            _ => Err(DecodeError::not_an_object()),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.object.contains_key(key)
    }

    fn lookup(&self, key: &str) -> Result<&'a Value, DecodeError> {
        self.object.get(key).ok_or_else(|| DecodeError::missing(key))
    }

    fn convert<T>(
        &self,
        key: &str,
        expected: &'static str,
        convert: impl FnOnce(&'a Value) -> Option<T>,
    ) -> Result<T, DecodeError> {
        let value = self.lookup(key)?;
        convert(value).ok_or_else(|| DecodeError::invalid_type(key, expected))
    }

    /// Swallow a failed optional field, logging when the key was present.
    fn optional<T>(&self, key: &str, result: Result<T, DecodeError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                if self.contains(key) {
                    debug!(key, error = %err, "discarding malformed optional field");
                }
                None
            }
        }
    }

    pub fn string(&self, key: &str) -> Result<String, DecodeError> {
        self.convert(key, "string", |v| v.as_str().map(str::to_owned))
    }

    pub fn opt_string(&self, key: &str) -> Option<String> {
        self.optional(key, self.string(key))
    }

    pub fn bool(&self, key: &str) -> Result<bool, DecodeError> {
        self.convert(key, "boolean", Value::as_bool)
    }

    pub fn opt_bool(&self, key: &str) -> Option<bool> {
        self.optional(key, self.bool(key))
    }

    /// Integers only; floats and numeric strings are rejected.
    pub fn integer(&self, key: &str) -> Result<i64, DecodeError> {
        self.convert(key, "integer", Value::as_i64)
    }

    pub fn opt_integer(&self, key: &str) -> Option<i64> {
        self.optional(key, self.integer(key))
    }

    /// Open metadata object, taken as-is.
    pub fn object(&self, key: &str) -> Result<Metadata, DecodeError> {
        self.convert(key, "object", |v| v.as_object().cloned())
    }

    pub fn opt_object(&self, key: &str) -> Option<Metadata> {
        self.optional(key, self.object(key))
    }

    pub fn strings(&self, key: &str) -> Result<Vec<String>, DecodeError> {
        let items = self.convert(key, "array", Value::as_array)?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str().map(str::to_owned).ok_or_else(|| {
                    DecodeError::new(DecodeErrorKind::InvalidType { expected: "string" })
                        .at_index(i)
                        .at_key(key)
                })
            })
            .collect()
    }

    pub fn opt_strings(&self, key: &str) -> Option<Vec<String>> {
        self.optional(key, self.strings(key))
    }

    pub fn model<T: JsonModel>(&self, key: &str) -> Result<T, DecodeError> {
        let value = self.lookup(key)?;
        T::from_json_with(value, self.options).map_err(|e| e.at_key(key))
    }

    pub fn opt_model<T: JsonModel>(&self, key: &str) -> Option<T> {
        self.optional(key, self.model(key))
    }

    /// Required record array; any bad element fails the whole field.
    pub fn models<T: JsonModel>(&self, key: &str) -> Result<Vec<T>, DecodeError> {
        let items = self.convert(key, "array", Value::as_array)?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                T::from_json_with(item, self.options).map_err(|e| e.at_index(i).at_key(key))
            })
            .collect()
    }

    /// Optional record array, handled according to the configured
    /// [`ArrayPolicy`].
    pub fn opt_models<T: JsonModel>(&self, key: &str) -> Option<Vec<T>> {
        match self.options.array_policy {
            ArrayPolicy::AllOrNothing => self.optional(key, self.models(key)),
            ArrayPolicy::SkipInvalid => {
                let items = self.optional(key, self.convert(key, "array", Value::as_array))?;
                let kept = items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| match T::from_json_with(item, self.options) {
                        Ok(model) => Some(model),
                        Err(err) => {
                            debug!(
                                key,
                                index = i,
                                error = %err,
                                "skipping malformed array element"
                            );
                            None
                        }
                    })
                    .collect();
                Some(kept)
            }
        }
    }

    pub fn variant<T: WireEnum>(&self, key: &str) -> Result<T, DecodeError> {
        let raw = self.convert(key, "string", Value::as_str)?;
        parse_variant(key, raw)
    }

    /// Optional enumeration field.
    ///
    /// Absent, `null` and non-string values yield `Ok(None)`, but a string
    /// outside the known set is still an error.
    pub fn opt_variant<T: WireEnum>(&self, key: &str) -> Result<Option<T>, DecodeError> {
        match self.object.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) => parse_variant(key, raw).map(Some),
            Some(_) => {
                debug!(key, "discarding non-string enumeration field");
                Ok(None)
            }
        }
    }
}

fn parse_variant<T: WireEnum>(key: &str, raw: &str) -> Result<T, DecodeError> {
    T::from_wire(raw).ok_or_else(|| DecodeError::unknown_variant(key, raw, &T::wire_values()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_non_object() {
        let opts = DecodeOptions::default();
        let value = json!(["not", "an", "object"]);
        let err = ObjectReader::new(&value, &opts).err().unwrap();
        assert_eq!(err.kind, DecodeErrorKind::NotAnObject);
    }

    #[test]
    fn test_required_string() {
        let opts = DecodeOptions::default();
        let value = json!({"name": "demo", "count": 3, "nothing": null});
        let fields = ObjectReader::new(&value, &opts).unwrap();

        assert_eq!(fields.string("name").unwrap(), "demo");
        assert_eq!(
            fields.string("missing").unwrap_err().kind,
            DecodeErrorKind::MissingField
        );
        assert_eq!(
            fields.string("count").unwrap_err().kind,
            DecodeErrorKind::InvalidType { expected: "string" }
        );
        assert_eq!(fields.string("nothing").unwrap_err().key(), Some("nothing"));
    }

    #[test]
    fn test_optional_accessors_swallow_errors() {
        let opts = DecodeOptions::default();
        let value = json!({"flag": "yes", "count": 3.5, "meta": [1, 2]});
        let fields = ObjectReader::new(&value, &opts).unwrap();

        assert_eq!(fields.opt_bool("flag"), None);
        assert_eq!(fields.opt_integer("count"), None);
        assert_eq!(fields.opt_object("meta"), None);
        assert_eq!(fields.opt_string("absent"), None);
    }

    #[test]
    fn test_integer_does_not_coerce_strings() {
        let opts = DecodeOptions::default();
        let value = json!({"total": "12", "matched": 4});
        let fields = ObjectReader::new(&value, &opts).unwrap();

        assert!(fields.integer("total").is_err());
        assert_eq!(fields.integer("matched").unwrap(), 4);
    }

    #[test]
    fn test_strings_reports_bad_index() {
        let opts = DecodeOptions::default();
        let value = json!({"synonyms": ["a", 2, "c"]});
        let fields = ObjectReader::new(&value, &opts).unwrap();

        let err = fields.strings("synonyms").unwrap_err();
        assert_eq!(err.path_string(), "synonyms[1]");
        assert_eq!(fields.opt_strings("synonyms"), None);
    }
}
