//! Counterexamples: input marked as irrelevant to the workspace.

use crate::codec::{serde_via_json_model, DecodeError, JsonModel, ObjectReader, ObjectWriter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counterexample {
    pub text: String,
    pub created: String,
    pub updated: String,
}

impl Counterexample {
    pub fn new(
        text: impl Into<String>,
        created: impl Into<String>,
        updated: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            created: created.into(),
            updated: updated.into(),
        }
    }
}

impl JsonModel for Counterexample {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            text: fields.string("text")?,
            created: fields.string("created")?,
            updated: fields.string("updated")?,
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("text", self.text.as_str())
            .put("created", self.created.as_str())
            .put("updated", self.updated.as_str());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCounterexample {
    pub text: String,
}

impl CreateCounterexample {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl JsonModel for CreateCounterexample {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            text: fields.string("text")?,
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("text", self.text.as_str());
    }
}

serde_via_json_model!(Counterexample, CreateCounterexample);
