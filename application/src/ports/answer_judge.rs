//! Answer Judge port
//!
//! Defines the interface for asking an external AI model whether a
//! submitted answer is acceptable.

use async_trait::async_trait;
use thiserror::Error;
use trivia_domain::{DomainError, JudgeVerdict, Question};

/// Errors that can occur while consulting the judge
///
/// None of these reach the caller of the verifier; every variant triggers
/// the exact-match fallback.
#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Ambiguous verdict: {0}")]
    AmbiguousVerdict(String),

    #[error("Cancelled")]
    Cancelled,

    #[error("Other error: {0}")]
    Other(String),
}

impl From<DomainError> for JudgeError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::AmbiguousVerdict(v) => JudgeError::AmbiguousVerdict(v),
            other => JudgeError::MalformedResponse(other.to_string()),
        }
    }
}

/// The inputs a judge needs to assess one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JudgeQuery<'a> {
    pub prompt_text: &'a str,
    pub expected_answer: &'a str,
    pub user_answer: &'a str,
    pub category: Option<&'a str>,
}

impl<'a> JudgeQuery<'a> {
    /// Build the query for a catalog question
    pub fn for_question(question: &'a Question, user_answer: &'a str) -> Self {
        Self {
            prompt_text: question.prompt_text(),
            expected_answer: question.expected_answer(),
            user_answer,
            category: question.category(),
        }
    }
}

/// Judge for free-text answers
///
/// This port defines how the application layer asks for a semantic verdict.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AnswerJudge: Send + Sync {
    /// Assess whether `user_answer` is an acceptable answer.
    ///
    /// Called at most once per verification; implementations must not
    /// retry internally.
    async fn assess(&self, query: &JudgeQuery<'_>) -> Result<JudgeVerdict, JudgeError>;
}
