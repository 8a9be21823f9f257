//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Judge response contains no JSON object")]
    NoJudgeObject,

    #[error("Judge response is not valid JSON: {0}")]
    InvalidJudgeJson(String),

    #[error("Judge verdict is ambiguous: {0}")]
    AmbiguousVerdict(String),

    #[error("Judge explanation is not a string")]
    InvalidExplanation,
}
