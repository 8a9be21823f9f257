//! AI judge adapters
//!
//! - [`OpenAiJudge`]: any OpenAI-compatible Chat Completions endpoint

mod openai;
pub mod types;

pub use openai::OpenAiJudge;
