use crate::codec::DecodeError;
use thiserror::Error;

/// Unified error type for the model layer.
///
/// Decoding a `serde_json::Value` only ever yields [`DecodeError`]; this type
/// additionally covers the text helpers in [`crate::codec`], where the input
/// may not be valid JSON at all.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Model decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// The decode failure, if that is what this error is.
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            Error::Decode(err) => Some(err),
            Error::Serialization(_) => None,
        }
    }
}
