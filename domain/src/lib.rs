//! Domain layer for trivia-judge
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A catalog entry: the text shown to the player and the single canonical
//! answer it is graded against.
//!
//! ## Verdict
//!
//! Whether a submitted answer is correct, and which path decided it:
//!
//! - **AI**: an external judge assessed semantic equivalence
//! - **Exact match**: trimmed, case-insensitive comparison used when the
//!   judge is unconfigured or fails

pub mod config;
pub mod core;
pub mod prompt;
pub mod verdict;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    question::{Question, QuestionId},
};
pub use prompt::JudgePromptTemplate;
pub use verdict::{
    matching::{answers_match, normalize_answer},
    parsing::parse_judge_response,
    value_objects::{JudgeVerdict, JudgedBy, VerificationResult},
};
