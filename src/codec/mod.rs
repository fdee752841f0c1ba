//! Model codec layer.
//!
//! Every model in this crate implements [`JsonModel`]: it is decoded from a
//! generic [`serde_json::Value`] through an [`ObjectReader`] and encoded back
//! through an [`ObjectWriter`], using the service's snake_case wire keys in
//! both directions.
//!
//! ## Decode rules
//!
//! | Field kind | Absent | Wrong type | Unknown enum string |
//! |------------|--------|------------|---------------------|
//! | required | error | error | error |
//! | optional | unset | unset | error |
//!
//! Optional record arrays are all-or-nothing by default; see
//! [`ArrayPolicy`] for the alternative.
//!
//! ## Example
//!
//! ```rust
//! use watson_models::codec::JsonModel;
//! use watson_models::conversation::Intent;
//! use serde_json::json;
//!
//! let intent = Intent::from_json(&json!({
//!     "intent": "greeting",
//!     "created": "2017-05-01T10:00:00Z",
//!     "updated": "2017-05-02T10:00:00Z",
//!     "description": 42
//! }))
//! .unwrap();
//!
//! assert_eq!(intent.intent_name, "greeting");
//! assert!(intent.description.is_none());
//! ```

use serde_json::{Map, Value};
use tracing::trace;

/// Implements `serde::Serialize` / `serde::Deserialize` for models by routing
/// through [`JsonModel`].
macro_rules! serde_via_json_model {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
                where
                    S: ::serde::Serializer,
                {
                    ::serde::Serialize::serialize(
                        &$crate::codec::JsonModel::to_json(self),
                        serializer,
                    )
                }
            }

            impl<'de> ::serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    let value: ::serde_json::Value =
                        ::serde::Deserialize::deserialize(deserializer)?;
                    <$ty as $crate::codec::JsonModel>::from_json(&value)
                        .map_err(::serde::de::Error::custom)
                }
            }
        )+
    };
}

pub(crate) use serde_via_json_model;

/// Declares a closed wire enumeration. The `Variant => "wire"` table is the
/// only place the wire strings appear; [`WireEnum`], `Display` and the serde
/// impls are all derived from it.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::codec::WireEnum for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn as_wire(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::codec::WireEnum::as_wire(self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($crate::codec::WireEnum::as_wire(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw: ::std::string::String =
                    ::serde::Deserialize::deserialize(deserializer)?;
                <Self as $crate::codec::WireEnum>::from_wire(&raw).ok_or_else(|| {
                    ::serde::de::Error::custom(::std::format!(
                        "unknown value '{}', expected one of {}",
                        raw,
                        <Self as $crate::codec::WireEnum>::wire_values().join(", ")
                    ))
                })
            }
        }
    };
}

pub(crate) use wire_enum;

pub mod error;
pub mod options;
pub mod reader;
pub mod writer;

pub use error::{DecodeError, DecodeErrorKind, PathSegment};
pub use options::{ArrayPolicy, DecodeOptions};
pub use reader::ObjectReader;
pub use writer::ObjectWriter;

/// Open-ended metadata attached to workspaces, entities and values.
pub type Metadata = Map<String, Value>;

/// The decode/encode contract shared by every model.
pub trait JsonModel: Sized {
    /// Build the model from the fields of a JSON object.
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError>;

    /// Write the model's wire fields.
    fn encode(&self, out: &mut ObjectWriter);

    fn from_json(value: &Value) -> Result<Self, DecodeError> {
        Self::from_json_with(value, &DecodeOptions::default())
    }

    fn from_json_with(value: &Value, options: &DecodeOptions) -> Result<Self, DecodeError> {
        let fields = ObjectReader::new(value, options)?;
        let model = Self::decode(&fields)?;
        trace!(model = std::any::type_name::<Self>(), "decoded model");
        Ok(model)
    }

    fn to_json(&self) -> Value {
        let mut out = ObjectWriter::new();
        self.encode(&mut out);
        out.finish()
    }
}

/// A closed set of wire strings with no fallback member.
pub trait WireEnum: Copy + 'static {
    const VARIANTS: &'static [Self];

    fn as_wire(&self) -> &'static str;

    fn from_wire(raw: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_wire() == raw)
    }

    fn wire_values() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(Self::as_wire).collect()
    }
}

/// Parse JSON text and decode it with default options.
pub fn from_str<T: JsonModel>(text: &str) -> crate::Result<T> {
    from_str_with(text, &DecodeOptions::default())
}

pub fn from_str_with<T: JsonModel>(text: &str, options: &DecodeOptions) -> crate::Result<T> {
    let value: Value = serde_json::from_str(text)?;
    Ok(T::from_json_with(&value, options)?)
}

pub fn to_string<T: JsonModel>(model: &T) -> crate::Result<String> {
    Ok(serde_json::to_string(&model.to_json())?)
}

pub fn to_string_pretty<T: JsonModel>(model: &T) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(&model.to_json())?)
}
