//! Translation model training status and model descriptions.

use crate::codec::{
    serde_via_json_model, wire_enum, DecodeError, JsonModel, ObjectReader, ObjectWriter,
};

wire_enum! {
    /// Training state reported while monitoring a custom model.
    pub enum TrainingStatus {
        Available => "available",
        Training => "training",
        Error => "error",
    }
}

wire_enum! {
    /// Lifecycle state of a model in the model listing.
    pub enum ModelStatus {
        Uploading => "uploading",
        Uploaded => "uploaded",
        Dispatching => "dispatching",
        Queued => "queued",
        Training => "training",
        Trained => "trained",
        Publishing => "publishing",
        Available => "available",
        Deleted => "deleted",
        Error => "error",
    }
}

impl ModelStatus {
    /// Whether the model can be used for translation.
    pub fn is_available(&self) -> bool {
        *self == Self::Available
    }
}

/// Training status of a custom translation model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorTraining {
    pub status: TrainingStatus,
    /// The base model the custom model was trained on; wire key `base_model_id`.
    pub base_model_id: String,
}

impl MonitorTraining {
    pub fn new(status: TrainingStatus, base_model_id: impl Into<String>) -> Self {
        Self {
            status,
            base_model_id: base_model_id.into(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status != TrainingStatus::Training
    }
}

impl JsonModel for MonitorTraining {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            status: fields.variant("status")?,
            base_model_id: fields.string("base_model_id")?,
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put_variant("status", self.status)
            .put("base_model_id", self.base_model_id.as_str());
    }
}

/// A translation model, either a service-provided one or a customization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationModel {
    pub model_id: String,
    pub name: Option<String>,
    /// Source language code.
    pub source: Option<String>,
    /// Target language code.
    pub target: Option<String>,
    pub base_model_id: Option<String>,
    pub domain: Option<String>,
    pub customizable: Option<bool>,
    pub default_model: Option<bool>,
    pub owner: Option<String>,
    pub status: Option<ModelStatus>,
}

impl TranslationModel {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_languages(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self.target = Some(target.into());
        self
    }

    pub fn with_base_model_id(mut self, base_model_id: impl Into<String>) -> Self {
        self.base_model_id = Some(base_model_id.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_customizable(mut self, customizable: bool) -> Self {
        self.customizable = Some(customizable);
        self
    }

    pub fn with_default_model(mut self, default_model: bool) -> Self {
        self.default_model = Some(default_model);
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_status(mut self, status: ModelStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl JsonModel for TranslationModel {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            model_id: fields.string("model_id")?,
            name: fields.opt_string("name"),
            source: fields.opt_string("source"),
            target: fields.opt_string("target"),
            base_model_id: fields.opt_string("base_model_id"),
            domain: fields.opt_string("domain"),
            customizable: fields.opt_bool("customizable"),
            default_model: fields.opt_bool("default_model"),
            owner: fields.opt_string("owner"),
            status: fields.opt_variant("status")?,
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("model_id", self.model_id.as_str())
            .put_opt("name", &self.name)
            .put_opt("source", &self.source)
            .put_opt("target", &self.target)
            .put_opt("base_model_id", &self.base_model_id)
            .put_opt("domain", &self.domain)
            .put_opt("customizable", &self.customizable)
            .put_opt("default_model", &self.default_model)
            .put_opt("owner", &self.owner)
            .put_opt_variant("status", self.status);
    }
}

/// The model listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationModels {
    pub models: Vec<TranslationModel>,
}

impl TranslationModels {
    pub fn new(models: Vec<TranslationModel>) -> Self {
        Self { models }
    }

    /// Models translating from `source` to `target`.
    pub fn for_pair<'a>(
        &'a self,
        source: &'a str,
        target: &'a str,
    ) -> impl Iterator<Item = &'a TranslationModel> + 'a {
        self.models.iter().filter(move |m| {
            m.source.as_deref() == Some(source) && m.target.as_deref() == Some(target)
        })
    }
}

impl JsonModel for TranslationModels {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            models: fields.models("models")?,
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put_models("models", &self.models);
    }
}

serde_via_json_model!(MonitorTraining, TranslationModel, TranslationModels);
