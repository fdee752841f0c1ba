//! 对话服务模型：工作区、意图、实体、对话节点。
//!
//! # Conversation Models
//!
//! Typed request and response bodies of the Conversation V1 REST service.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Workspace`] | Workspace header as listed or fetched |
//! | [`WorkspaceExport`] | Workspace with status and all trainable content |
//! | [`CreateWorkspace`] | Create/update request body, all fields optional |
//! | [`Intent`] / [`IntentExport`] | Intents, the export variant carries examples |
//! | [`EntityExport`] / [`ValueResponse`] | Entities and entity values |
//! | [`DialogNode`] | Dialog tree node |
//! | [`WorkspaceCollection`] | One page of the workspace listing |
//!
//! ## Example
//!
//! ```rust
//! use watson_models::codec::JsonModel;
//! use watson_models::conversation::{CreateIntent, CreateWorkspace};
//!
//! let body = CreateWorkspace::new()
//!     .with_name("Pizza bot")
//!     .with_language("en")
//!     .with_intents(vec![CreateIntent::new("order_pizza")]);
//!
//! let json = body.to_json();
//! assert_eq!(json["intents"][0]["intent"], "order_pizza");
//! assert!(json.get("description").is_none());
//! ```

pub mod counterexample;
pub mod dialog_node;
pub mod entity;
pub mod intent;
pub mod pagination;
pub mod workspace;

pub use counterexample::{Counterexample, CreateCounterexample};
pub use dialog_node::{
    CreateDialogNode, DialogNode, DialogNodeFields, DialogNodeNextStep, DialogNodeType,
    NextStepBehavior, NextStepSelector,
};
pub use entity::{CreateEntity, CreateValue, EntityExport, ValueExport, ValueResponse};
pub use intent::{CreateExample, CreateIntent, Example, Intent, IntentExport};
pub use pagination::Pagination;
pub use workspace::{
    CreateWorkspace, Workspace, WorkspaceCollection, WorkspaceExport, WorkspaceStatus,
};
