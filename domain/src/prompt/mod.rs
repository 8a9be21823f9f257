//! Prompt templates for the AI judge

mod template;

pub use template::JudgePromptTemplate;
