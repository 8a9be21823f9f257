//! Application layer for trivia-judge
//!
//! This crate contains the answer verification use case, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::VerifierParams;
pub use ports::{
    answer_judge::{AnswerJudge, JudgeError, JudgeQuery},
    question_catalog::QuestionCatalog,
};
pub use use_cases::verify_answer::{VerifyAnswerError, VerifyAnswerInput, VerifyAnswerUseCase};
