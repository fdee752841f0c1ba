//! Language Translator V2 models.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`MonitorTraining`] | Training status of a custom model |
//! | [`TranslationModel`] | A base or custom translation model |
//! | [`TranslationModels`] | Model listing |
//! | [`TrainingStatus`] | `available`, `training` or `error` |
//! | [`ModelStatus`] | Lifecycle state of a listed model, `uploading` through `deleted` |

pub mod training;

pub use training::{
    ModelStatus, MonitorTraining, TrainingStatus, TranslationModel, TranslationModels,
};
