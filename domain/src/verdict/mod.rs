//! Verdicts and the rules that produce them.
//!
//! - [`value_objects`]: [`VerificationResult`](value_objects::VerificationResult),
//!   [`JudgeVerdict`](value_objects::JudgeVerdict), [`JudgedBy`](value_objects::JudgedBy)
//! - [`matching`]: the exact-match fallback rule
//! - [`parsing`]: reading a verdict out of an AI judge response

pub mod matching;
pub mod parsing;
pub mod value_objects;
