//! Intents and their user input examples.

use crate::codec::{serde_via_json_model, DecodeError, JsonModel, ObjectReader, ObjectWriter};

/// A user input example attached to an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// The text of the example; wire key `text`.
    pub example_text: String,
    pub created: String,
    pub updated: String,
}

impl Example {
    pub fn new(
        example_text: impl Into<String>,
        created: impl Into<String>,
        updated: impl Into<String>,
    ) -> Self {
        Self {
            example_text: example_text.into(),
            created: created.into(),
            updated: updated.into(),
        }
    }
}

impl JsonModel for Example {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            example_text: fields.string("text")?,
            created: fields.string("created")?,
            updated: fields.string("updated")?,
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("text", self.example_text.as_str())
            .put("created", self.created.as_str())
            .put("updated", self.updated.as_str());
    }
}

/// Request body for a new example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateExample {
    pub text: String,
}

impl CreateExample {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl JsonModel for CreateExample {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            text: fields.string("text")?,
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("text", self.text.as_str());
    }
}

/// An intent as listed by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    /// The name of the intent; wire key `intent`.
    pub intent_name: String,
    pub created: String,
    pub updated: String,
    pub description: Option<String>,
}

impl Intent {
    pub fn new(
        intent_name: impl Into<String>,
        created: impl Into<String>,
        updated: impl Into<String>,
    ) -> Self {
        Self {
            intent_name: intent_name.into(),
            created: created.into(),
            updated: updated.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl JsonModel for Intent {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            intent_name: fields.string("intent")?,
            created: fields.string("created")?,
            updated: fields.string("updated")?,
            description: fields.opt_string("description"),
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("intent", self.intent_name.as_str())
            .put("created", self.created.as_str())
            .put("updated", self.updated.as_str())
            .put_opt("description", &self.description);
    }
}

/// An intent with its examples, as found in a workspace export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentExport {
    pub intent_name: String,
    pub created: String,
    pub updated: String,
    pub description: Option<String>,
    /// Ordered user input examples.
    pub examples: Option<Vec<Example>>,
}

impl IntentExport {
    pub fn new(
        intent_name: impl Into<String>,
        created: impl Into<String>,
        updated: impl Into<String>,
    ) -> Self {
        Self {
            intent_name: intent_name.into(),
            created: created.into(),
            updated: updated.into(),
            description: None,
            examples: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_examples(mut self, examples: Vec<Example>) -> Self {
        self.examples = Some(examples);
        self
    }
}

impl JsonModel for IntentExport {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            intent_name: fields.string("intent")?,
            created: fields.string("created")?,
            updated: fields.string("updated")?,
            description: fields.opt_string("description"),
            examples: fields.opt_models("examples"),
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("intent", self.intent_name.as_str())
            .put("created", self.created.as_str())
            .put("updated", self.updated.as_str())
            .put_opt("description", &self.description)
            .put_opt_models("examples", &self.examples);
    }
}

/// Request body for a new intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIntent {
    pub intent: String,
    pub description: Option<String>,
    pub examples: Option<Vec<CreateExample>>,
}

impl CreateIntent {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            description: None,
            examples: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_examples(mut self, examples: Vec<CreateExample>) -> Self {
        self.examples = Some(examples);
        self
    }
}

impl JsonModel for CreateIntent {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            intent: fields.string("intent")?,
            description: fields.opt_string("description"),
            examples: fields.opt_models("examples"),
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("intent", self.intent.as_str())
            .put_opt("description", &self.description)
            .put_opt_models("examples", &self.examples);
    }
}

serde_via_json_model!(Example, CreateExample, Intent, IntentExport, CreateIntent);
