//! Dialog nodes and their control-flow settings.

use crate::codec::{
    serde_via_json_model, wire_enum, DecodeError, JsonModel, Metadata, ObjectReader, ObjectWriter,
};

wire_enum! {
    /// What happens after a dialog node is executed.
    pub enum NextStepBehavior {
        GetUserInput => "get_user_input",
        SkipUserInput => "skip_user_input",
        JumpTo => "jump_to",
    }
}

wire_enum! {
    /// Which part of the target node a `jump_to` resumes at.
    pub enum NextStepSelector {
        Condition => "condition",
        Client => "client",
        UserInput => "user_input",
        Body => "body",
    }
}

wire_enum! {
    /// Node type; wire key `type`.
    pub enum DialogNodeType {
        Standard => "standard",
        EventHandler => "event_handler",
        Frame => "frame",
        Slot => "slot",
        ResponseCondition => "response_condition",
    }
}

/// Where the conversation goes after a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogNodeNextStep {
    pub behavior: NextStepBehavior,
    /// Target node for `jump_to`.
    pub dialog_node: Option<String>,
    pub selector: Option<NextStepSelector>,
}

impl DialogNodeNextStep {
    pub fn new(behavior: NextStepBehavior) -> Self {
        Self {
            behavior,
            dialog_node: None,
            selector: None,
        }
    }

    pub fn jump_to(dialog_node: impl Into<String>, selector: NextStepSelector) -> Self {
        Self {
            behavior: NextStepBehavior::JumpTo,
            dialog_node: Some(dialog_node.into()),
            selector: Some(selector),
        }
    }
}

impl JsonModel for DialogNodeNextStep {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            behavior: fields.variant("behavior")?,
            dialog_node: fields.opt_string("dialog_node"),
            selector: fields.opt_variant("selector")?,
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put_variant("behavior", self.behavior)
            .put_opt("dialog_node", &self.dialog_node)
            .put_opt_variant("selector", self.selector);
    }
}

/// Optional settings shared by [`DialogNode`] and [`CreateDialogNode`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogNodeFields {
    pub description: Option<String>,
    pub conditions: Option<String>,
    pub parent: Option<String>,
    pub previous_sibling: Option<String>,
    /// Response text and options; the shape is defined by the service.
    pub output: Option<Metadata>,
    pub context: Option<Metadata>,
    pub metadata: Option<Metadata>,
    pub next_step: Option<DialogNodeNextStep>,
    pub title: Option<String>,
    pub node_type: Option<DialogNodeType>,
    pub event_name: Option<String>,
    pub variable: Option<String>,
}

impl DialogNodeFields {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            description: fields.opt_string("description"),
            conditions: fields.opt_string("conditions"),
            parent: fields.opt_string("parent"),
            previous_sibling: fields.opt_string("previous_sibling"),
            output: fields.opt_object("output"),
            context: fields.opt_object("context"),
            metadata: fields.opt_object("metadata"),
            next_step: fields.opt_model("next_step"),
            title: fields.opt_string("title"),
            node_type: fields.opt_variant("type")?,
            event_name: fields.opt_string("event_name"),
            variable: fields.opt_string("variable"),
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put_opt("description", &self.description)
            .put_opt("conditions", &self.conditions)
            .put_opt("parent", &self.parent)
            .put_opt("previous_sibling", &self.previous_sibling)
            .put_opt("output", &self.output)
            .put_opt("context", &self.context)
            .put_opt("metadata", &self.metadata)
            .put_opt_model("next_step", &self.next_step)
            .put_opt("title", &self.title)
            .put_opt_variant("type", self.node_type)
            .put_opt("event_name", &self.event_name)
            .put_opt("variable", &self.variable);
    }
}

/// A dialog node as exported by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogNode {
    /// The node ID; wire key `dialog_node`.
    pub dialog_node_id: String,
    pub created: String,
    pub updated: Option<String>,
    pub fields: DialogNodeFields,
}

impl DialogNode {
    pub fn new(dialog_node_id: impl Into<String>, created: impl Into<String>) -> Self {
        Self {
            dialog_node_id: dialog_node_id.into(),
            created: created.into(),
            updated: None,
            fields: DialogNodeFields::default(),
        }
    }

    pub fn with_updated(mut self, updated: impl Into<String>) -> Self {
        self.updated = Some(updated.into());
        self
    }

    pub fn with_fields(mut self, fields: DialogNodeFields) -> Self {
        self.fields = fields;
        self
    }
}

impl JsonModel for DialogNode {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            dialog_node_id: fields.string("dialog_node")?,
            created: fields.string("created")?,
            updated: fields.opt_string("updated"),
            fields: DialogNodeFields::decode(fields)?,
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("dialog_node", self.dialog_node_id.as_str())
            .put("created", self.created.as_str())
            .put_opt("updated", &self.updated);
        self.fields.encode(out);
    }
}

/// Request body for a new dialog node.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDialogNode {
    pub dialog_node: String,
    pub fields: DialogNodeFields,
}

impl CreateDialogNode {
    pub fn new(dialog_node: impl Into<String>) -> Self {
        Self {
            dialog_node: dialog_node.into(),
            fields: DialogNodeFields::default(),
        }
    }

    pub fn with_fields(mut self, fields: DialogNodeFields) -> Self {
        self.fields = fields;
        self
    }
}

impl JsonModel for CreateDialogNode {
    fn decode(fields: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            dialog_node: fields.string("dialog_node")?,
            fields: DialogNodeFields::decode(fields)?,
        })
    }

    fn encode(&self, out: &mut ObjectWriter) {
        out.put("dialog_node", self.dialog_node.as_str());
        self.fields.encode(out);
    }
}

serde_via_json_model!(DialogNodeNextStep, DialogNode, CreateDialogNode);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::WireEnum;
    use serde_json::json;

    #[test]
    fn test_wire_strings_match_serde() {
        for v in NextStepBehavior::VARIANTS {
            assert_eq!(serde_json::to_value(v).unwrap(), json!(v.as_wire()));
        }
        for v in NextStepSelector::VARIANTS {
            assert_eq!(serde_json::to_value(v).unwrap(), json!(v.as_wire()));
        }
        for v in DialogNodeType::VARIANTS {
            assert_eq!(serde_json::to_value(v).unwrap(), json!(v.to_string()));
        }
        let selector: NextStepSelector = serde_json::from_value(json!("user_input")).unwrap();
        assert_eq!(selector, NextStepSelector::UserInput);
        assert!(serde_json::from_value::<NextStepSelector>(json!("UserInput")).is_err());
    }

    #[test]
    fn test_next_step_unknown_selector() {
        let step = json!({"behavior": "jump_to", "dialog_node": "node_2", "selector": "elsewhere"});
        let err = DialogNodeNextStep::from_json(&step).unwrap_err();
        assert_eq!(err.path_string(), "selector");

        // Inside a node the nested record is optional, so it is dropped as a whole.
        let value = json!({
            "dialog_node": "node_1",
            "created": "2017-05-01T10:00:00Z",
            "next_step": step
        });
        let node = DialogNode::from_json(&value).unwrap();
        assert!(node.fields.next_step.is_none());
    }

    #[test]
    fn test_unknown_node_type_fails_node() {
        let value = json!({
            "dialog_node": "node_1",
            "created": "2017-05-01T10:00:00Z",
            "type": "folder"
        });
        let err = DialogNode::from_json(&value).unwrap_err();
        assert_eq!(err.key(), Some("type"));
    }

    #[test]
    fn test_next_step_missing_behavior_is_dropped() {
        let value = json!({
            "dialog_node": "node_1",
            "created": "2017-05-01T10:00:00Z",
            "title": "Start",
            "next_step": {"dialog_node": "node_2"}
        });
        let node = DialogNode::from_json(&value).unwrap();
        assert!(node.fields.next_step.is_none());
        assert_eq!(node.fields.title.as_deref(), Some("Start"));
    }

    #[test]
    fn test_node_type_uses_type_key() {
        let node = CreateDialogNode::new("slot_1").with_fields(DialogNodeFields {
            node_type: Some(DialogNodeType::Slot),
            variable: Some("$city".to_string()),
            ..Default::default()
        });
        assert_eq!(
            node.to_json(),
            json!({"dialog_node": "slot_1", "type": "slot", "variable": "$city"})
        );
    }
}
