//! Workspaces: create requests, listings and full exports.

use super::counterexample::{Counterexample, CreateCounterexample};
use super::dialog_node::{CreateDialogNode, DialogNode};
use super::entity::{CreateEntity, EntityExport};
use super::intent::{CreateIntent, IntentExport};
use super::pagination::Pagination;
use crate::codec::{
    serde_via_json_model, wire_enum, DecodeError, JsonModel, Metadata, ObjectReader, ObjectWriter,
};

wire_enum! {
    /// Training state of a workspace.
    pub enum WorkspaceStatus {
        NonExistent => "Non Existent",
        Training => "Training",
        Failed => "Failed",
        Available => "Available",
        Unavailable => "Unavailable",
    }
}

/// A workspace as listed or fetched without its content.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub name: String,
    pub language: String,
    pub created: String,
    pub updated: String,
    pub workspace_id: String,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    /// `true` means the training data must not be used for general service
    /// improvements.
    pub learning_opt_out: Option<bool>,
}

impl Workspace {
    pub fn new(
        name: impl Into<String>,
        language: impl Into<String>,
        created: impl Into<String>,
        updated: impl Into<String>,
        workspace_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            created: created.into(),
            updated: updated.into(),
            workspace_id: workspace_id.into(),
            description: None,
            metadata: None,
            learning_opt_out: None,
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

    pub fn with_learning_opt_out(mut self, learning_opt_out: bool) -> Self {
        self.learning_opt_out = Some(learning_opt_out);
        self
    }
}

impl JsonModel for Workspace {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            name: fields.string("name")?,
            language: fields.string("language")?,
            created: fields.string("created")?,
            updated: fields.string("updated")?,
            workspace_id: fields.string("workspace_id")?,
            description: fields.opt_string("description"),
            metadata: fields.opt_object("metadata"),
            learning_opt_out: fields.opt_bool("learning_opt_out"),
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("name", self.name.as_str())
            .put("language", self.language.as_str())
            .put("created", self.created.as_str())
            .put("updated", self.updated.as_str())
            .put("workspace_id", self.workspace_id.as_str())
            .put_opt("description", &self.description)
            .put_opt("metadata", &self.metadata)
            .put_opt("learning_opt_out", &self.learning_opt_out);
    }
}

/// Request body for creating or updating a workspace.
///
/// Every field is optional; unset fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateWorkspace {
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub intents: Option<Vec<CreateIntent>>,
    pub entities: Option<Vec<CreateEntity>>,
    pub dialog_nodes: Option<Vec<CreateDialogNode>>,
    pub counterexamples: Option<Vec<CreateCounterexample>>,
    pub metadata: Option<Metadata>,
    pub learning_opt_out: Option<bool>,
}

impl CreateWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_intents(mut self, intents: Vec<CreateIntent>) -> Self {
        self.intents = Some(intents);
        self
    }

    pub fn with_entities(mut self, entities: Vec<CreateEntity>) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn with_dialog_nodes(mut self, dialog_nodes: Vec<CreateDialogNode>) -> Self {
        self.dialog_nodes = Some(dialog_nodes);
        self
    }

    pub fn with_counterexamples(mut self, counterexamples: Vec<CreateCounterexample>) -> Self {
        self.counterexamples = Some(counterexamples);
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_learning_opt_out(mut self, learning_opt_out: bool) -> Self {
        self.learning_opt_out = Some(learning_opt_out);
        self
    }
}

impl JsonModel for CreateWorkspace {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            name: fields.opt_string("name"),
            description: fields.opt_string("description"),
            language: fields.opt_string("language"),
            intents: fields.opt_models("intents"),
            entities: fields.opt_models("entities"),
            dialog_nodes: fields.opt_models("dialog_nodes"),
            counterexamples: fields.opt_models("counterexamples"),
            metadata: fields.opt_object("metadata"),
            learning_opt_out: fields.opt_bool("learning_opt_out"),
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put_opt("name", &self.name)
            .put_opt("description", &self.description)
            .put_opt("language", &self.language)
            .put_opt_models("intents", &self.intents)
            .put_opt_models("entities", &self.entities)
            .put_opt_models("dialog_nodes", &self.dialog_nodes)
            .put_opt_models("counterexamples", &self.counterexamples)
            .put_opt("metadata", &self.metadata)
            .put_opt("learning_opt_out", &self.learning_opt_out);
    }
}

/// Full snapshot of a workspace and its trainable content.
///
/// The export endpoint always reports `description`, `metadata` and
/// `learning_opt_out`, so unlike [`Workspace`] they are required here.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceExport {
    pub name: String,
    pub description: String,
    pub language: String,
    pub metadata: Metadata,
    pub created: String,
    pub updated: String,
    pub workspace_id: String,
    pub status: WorkspaceStatus,
    pub learning_opt_out: bool,
    pub intents: Option<Vec<IntentExport>>,
    pub entities: Option<Vec<EntityExport>>,
    pub counterexamples: Option<Vec<Counterexample>>,
    pub dialog_nodes: Option<Vec<DialogNode>>,
}

impl WorkspaceExport {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        language: impl Into<String>,
        metadata: Metadata,
        created: impl Into<String>,
        updated: impl Into<String>,
        workspace_id: impl Into<String>,
        status: WorkspaceStatus,
        learning_opt_out: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            language: language.into(),
            metadata,
            created: created.into(),
            updated: updated.into(),
            workspace_id: workspace_id.into(),
            status,
            learning_opt_out,
            intents: None,
            entities: None,
            counterexamples: None,
            dialog_nodes: None,
        }
    }

    pub fn with_intents(mut self, intents: Vec<IntentExport>) -> Self {
        self.intents = Some(intents);
        self
    }

    pub fn with_entities(mut self, entities: Vec<EntityExport>) -> Self {
        self.entities = Some(entities);
        self
    }

    pub fn with_counterexamples(mut self, counterexamples: Vec<Counterexample>) -> Self {
        self.counterexamples = Some(counterexamples);
        self
    }

    pub fn with_dialog_nodes(mut self, dialog_nodes: Vec<DialogNode>) -> Self {
        self.dialog_nodes = Some(dialog_nodes);
        self
    }

    /// The workspace header without status or content.
    pub fn workspace(&self) -> Workspace {
        Workspace {
            name: self.name.clone(),
            language: self.language.clone(),
            created: self.created.clone(),
            updated: self.updated.clone(),
            workspace_id: self.workspace_id.clone(),
            description: Some(self.description.clone()),
            metadata: Some(self.metadata.clone()),
            learning_opt_out: Some(self.learning_opt_out),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == WorkspaceStatus::Available
    }
}

impl JsonModel for WorkspaceExport {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            name: fields.string("name")?,
            description: fields.string("description")?,
            language: fields.string("language")?,
            metadata: fields.object("metadata")?,
            created: fields.string("created")?,
            updated: fields.string("updated")?,
            workspace_id: fields.string("workspace_id")?,
            status: fields.variant("status")?,
            learning_opt_out: fields.bool("learning_opt_out")?,
            intents: fields.opt_models("intents"),
            entities: fields.opt_models("entities"),
            counterexamples: fields.opt_models("counterexamples"),
            dialog_nodes: fields.opt_models("dialog_nodes"),
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("name", self.name.as_str())
            .put("description", self.description.as_str())
            .put("language", self.language.as_str())
            .put("metadata", self.metadata.clone())
            .put("created", self.created.as_str())
            .put("updated", self.updated.as_str())
            .put("workspace_id", self.workspace_id.as_str())
            .put_variant("status", self.status)
            .put("learning_opt_out", self.learning_opt_out)
            .put_opt_models("intents", &self.intents)
            .put_opt_models("entities", &self.entities)
            .put_opt_models("counterexamples", &self.counterexamples)
            .put_opt_models("dialog_nodes", &self.dialog_nodes);
    }
}

/// One page of the workspace listing.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceCollection {
    pub workspaces: Vec<Workspace>,
    pub pagination: Pagination,
}

impl WorkspaceCollection {
    pub fn new(workspaces: Vec<Workspace>, pagination: Pagination) -> Self {
        Self {
            workspaces,
            pagination,
        }
    }
}

impl JsonModel for WorkspaceCollection {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            workspaces: fields.models("workspaces")?,
            pagination: fields.model("pagination")?,
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put_models("workspaces", &self.workspaces)
            .put_model("pagination", &self.pagination);
    }
}

serde_via_json_model!(Workspace, CreateWorkspace, WorkspaceExport, WorkspaceCollection);
