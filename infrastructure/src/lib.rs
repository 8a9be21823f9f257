//! Infrastructure layer for trivia-judge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod judge;

// Re-export commonly used types
pub use catalog::{CatalogLoadError, InMemoryQuestionCatalog};
pub use config::{
    ConfigLoader, FileCatalogConfig, FileConfig, FileJudgeConfig, FileOutputConfig,
    JudgeConfigError,
};
pub use judge::OpenAiJudge;
