//! Shared assertions for model contract tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::fmt::Debug;
use watson_models::codec::{DecodeErrorKind, JsonModel};

/// A value no field in the models accepts: not a string, bool, integer or
/// object, and an array whose element is none of those either.
pub fn poison() -> Value {
    json!([12345])
}

pub fn without(fixture: &Value, key: &str) -> Value {
    let mut value = fixture.clone();
    value
        .as_object_mut()
        .expect("fixture must be an object")
        .remove(key);
    value
}

pub fn with(fixture: &Value, key: &str, replacement: Value) -> Value {
    let mut value = fixture.clone();
    value
        .as_object_mut()
        .expect("fixture must be an object")
        .insert(key.to_string(), replacement);
    value
}

/// Decoding the full fixture and encoding it again reproduces it exactly.
pub fn assert_fixture_symmetry<T: JsonModel + Debug>(fixture: &Value) {
    let model = T::from_json(fixture).expect("fixture should decode");
    assert_eq!(&model.to_json(), fixture);
}

pub fn assert_round_trip<T: JsonModel + PartialEq + Debug>(model: &T) {
    let decoded = T::from_json(&model.to_json()).expect("encoded model should decode");
    assert_eq!(&decoded, model);
}

/// Every required key, removed or mistyped in turn, fails the decode and is
/// named by the error.
pub fn assert_required_keys<T: JsonModel + Debug>(fixture: &Value, required: &[&str]) {
    for key in required {
        let err = T::from_json(&without(fixture, key))
            .expect_err(&format!("missing '{}' should fail", key));
        assert_eq!(err.kind, DecodeErrorKind::MissingField, "key {}", key);
        assert_eq!(err.key(), Some(*key));

        let err = T::from_json(&with(fixture, key, poison()))
            .expect_err(&format!("mistyped '{}' should fail", key));
        assert_eq!(err.key(), Some(*key), "error was {}", err);

        let err = T::from_json(&with(fixture, key, Value::Null))
            .expect_err(&format!("null '{}' should fail", key));
        assert_eq!(err.key(), Some(*key), "error was {}", err);
    }
}

/// Every optional key, removed or mistyped in turn, leaves the field unset
/// while the rest of the record still decodes.
pub fn assert_optional_keys<T: JsonModel + Debug>(fixture: &Value, optional: &[&str]) {
    for key in optional {
        for input in [without(fixture, key), with(fixture, key, poison())] {
            let model = T::from_json(&input)
                .unwrap_or_else(|e| panic!("optional '{}' should not fail: {}", key, e));
            let encoded = model.to_json();
            assert!(encoded.get(key).is_none(), "'{}' should be unset", key);
            assert_eq!(&encoded, &without(fixture, key));
        }
    }
}
