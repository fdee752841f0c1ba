//! Entities and entity values.

use crate::codec::{
    serde_via_json_model, DecodeError, JsonModel, Metadata, ObjectReader, ObjectWriter,
};

/// An entity value as returned by the value endpoints.
///
/// Unlike [`ValueExport`], the service always sends `metadata` here, so it is
/// required on decode.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueResponse {
    /// The text of the entity value; wire key `value`.
    pub value_text: String,
    pub metadata: Metadata,
    pub created: String,
    pub updated: String,
}

impl ValueResponse {
    pub fn new(
        value_text: impl Into<String>,
        metadata: Metadata,
        created: impl Into<String>,
        updated: impl Into<String>,
    ) -> Self {
        Self {
            value_text: value_text.into(),
            metadata,
            created: created.into(),
            updated: updated.into(),
        }
    }
}

impl JsonModel for ValueResponse {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            value_text: fields.string("value")?,
            metadata: fields.object("metadata")?,
            created: fields.string("created")?,
            updated: fields.string("updated")?,
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("value", self.value_text.as_str())
            .put("metadata", self.metadata.clone())
            .put("created", self.created.as_str())
            .put("updated", self.updated.as_str());
    }
}

/// An entity value inside an exported entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueExport {
    pub value_text: String,
    pub created: String,
    pub updated: String,
    pub metadata: Option<Metadata>,
    pub synonyms: Option<Vec<String>>,
}

impl ValueExport {
    pub fn new(
        value_text: impl Into<String>,
        created: impl Into<String>,
        updated: impl Into<String>,
    ) -> Self {
        Self {
            value_text: value_text.into(),
            created: created.into(),
            updated: updated.into(),
            metadata: None,
            synonyms: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = Some(synonyms.into_iter().map(Into::into).collect());
        self
    }
}

impl JsonModel for ValueExport {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            value_text: fields.string("value")?,
            created: fields.string("created")?,
            updated: fields.string("updated")?,
            metadata: fields.opt_object("metadata"),
            synonyms: fields.opt_strings("synonyms"),
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("value", self.value_text.as_str())
            .put("created", self.created.as_str())
            .put("updated", self.updated.as_str())
            .put_opt("metadata", &self.metadata)
            .put_opt("synonyms", &self.synonyms);
    }
}

/// Request body for a new entity value.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateValue {
    pub value: String,
    pub metadata: Option<Metadata>,
    pub synonyms: Option<Vec<String>>,
}

impl CreateValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            metadata: None,
            synonyms: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = Some(synonyms.into_iter().map(Into::into).collect());
        self
    }
}

impl JsonModel for CreateValue {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            value: fields.string("value")?,
            metadata: fields.opt_object("metadata"),
            synonyms: fields.opt_strings("synonyms"),
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("value", self.value.as_str())
            .put_opt("metadata", &self.metadata)
            .put_opt("synonyms", &self.synonyms);
    }
}

/// An entity with its values, as found in a workspace export.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityExport {
    /// The name of the entity; wire key `entity`.
    pub entity_name: String,
    pub created: String,
    pub updated: String,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    /// Whether fuzzy matching is used for the entity.
    pub fuzzy_match: Option<bool>,
    pub values: Option<Vec<ValueExport>>,
}

impl EntityExport {
    pub fn new(
        entity_name: impl Into<String>,
        created: impl Into<String>,
        updated: impl Into<String>,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            created: created.into(),
            updated: updated.into(),
            description: None,
            metadata: None,
            fuzzy_match: None,
            values: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_fuzzy_match(mut self, fuzzy_match: bool) -> Self {
        self.fuzzy_match = Some(fuzzy_match);
        self
    }

    pub fn with_values(mut self, values: Vec<ValueExport>) -> Self {
        self.values = Some(values);
        self
    }
}

impl JsonModel for EntityExport {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            entity_name: fields.string("entity")?,
            created: fields.string("created")?,
            updated: fields.string("updated")?,
            description: fields.opt_string("description"),
            metadata: fields.opt_object("metadata"),
            fuzzy_match: fields.opt_bool("fuzzy_match"),
            values: fields.opt_models("values"),
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("entity", self.entity_name.as_str())
            .put("created", self.created.as_str())
            .put("updated", self.updated.as_str())
            .put_opt("description", &self.description)
            .put_opt("metadata", &self.metadata)
            .put_opt("fuzzy_match", &self.fuzzy_match)
            .put_opt_models("values", &self.values);
    }
}

/// Request body for a new entity.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEntity {
    pub entity: String,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub values: Option<Vec<CreateValue>>,
    pub fuzzy_match: Option<bool>,
}

impl CreateEntity {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            description: None,
            metadata: None,
            values: None,
            fuzzy_match: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_values(mut self, values: Vec<CreateValue>) -> Self {
        self.values = Some(values);
        self
    }

    pub fn with_fuzzy_match(mut self, fuzzy_match: bool) -> Self {
        self.fuzzy_match = Some(fuzzy_match);
        self
    }
}

impl JsonModel for CreateEntity {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            entity: fields.string("entity")?,
            description: fields.opt_string("description"),
            metadata: fields.opt_object("metadata"),
            values: fields.opt_models("values"),
            fuzzy_match: fields.opt_bool("fuzzy_match"),
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("entity", self.entity.as_str())
            .put_opt("description", &self.description)
            .put_opt("metadata", &self.metadata)
            .put_opt_models("values", &self.values)
            .put_opt("fuzzy_match", &self.fuzzy_match);
    }
}

serde_via_json_model!(ValueResponse, ValueExport, CreateValue, EntityExport, CreateEntity);
