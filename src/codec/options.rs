//! Decode configuration.

use serde::{Deserialize, Serialize};

/// How malformed elements of an optional record array are handled.
///
/// Required arrays are always all-or-nothing regardless of the policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayPolicy {
    /// A single bad element leaves the whole field unset.
    #[default]
    AllOrNothing,
    /// Bad elements are dropped, the remaining ones are kept.
    SkipInvalid,
}

/// Options threaded through a decode call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    #[serde(default)]
    pub array_policy: ArrayPolicy,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_array_policy(mut self, policy: ArrayPolicy) -> Self {
        self.array_policy = policy;
        self
    }

    /// Shorthand for `ArrayPolicy::SkipInvalid`.
    pub fn skip_invalid_elements() -> Self {
        Self::new().with_array_policy(ArrayPolicy::SkipInvalid)
    }
}
