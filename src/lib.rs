//! # watson-models
//!
//! 对话与翻译服务的强类型 JSON 模型。
//!
//! Typed JSON models for the Conversation V1 and Language Translator V2 REST
//! services.
//!
//! ## Overview
//!
//! Every request and response body of the services is a plain Rust value that
//! can be built in code, decoded from a [`serde_json::Value`] and encoded back
//! with the service's snake_case wire keys. Transport, authentication and
//! retries are left to the HTTP client that carries these bodies.
//!
//! ## Decode contract
//!
//! - Required fields must be present and well-typed, otherwise decoding fails
//!   with a [`codec::DecodeError`] naming the offending key.
//! - Optional fields that are absent or malformed are left unset.
//! - Enumeration fields reject unknown wire strings.
//! - Encoding omits unset optional fields instead of writing `null`.
//!
//! ## Quick Start
//!
//! ```rust
//! use watson_models::codec::{self, JsonModel};
//! use watson_models::language_translator::{MonitorTraining, TrainingStatus};
//!
//! fn main() -> watson_models::Result<()> {
//!     let status: MonitorTraining =
//!         codec::from_str(r#"{"status": "training", "base_model_id": "en-es"}"#)?;
//!     assert_eq!(status.status, TrainingStatus::Training);
//!
//!     let bogus = MonitorTraining::from_json(&serde_json::json!({"status": "bogus"}));
//!     assert!(bogus.is_err());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`codec`] | Decode/encode contract, field reader and writer, options |
//! | [`conversation`] | Workspaces, intents, entities, dialog nodes |
//! | [`language_translator`] | Translation models and training status |
//! | [`error`] | Crate-level error type |

pub mod codec;
pub mod conversation;
pub mod language_translator;

/// Error type for the library
pub mod error;
pub use error::Error;

pub use codec::{DecodeError, DecodeOptions, JsonModel, Metadata};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
