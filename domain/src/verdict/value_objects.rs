//! Verdict value objects

use crate::core::question::{Question, QuestionId};
use serde::{Deserialize, Serialize};

/// Which path produced a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JudgedBy {
    /// The AI judge returned a parseable verdict
    Ai,
    /// Trimmed, case-insensitive string comparison
    ExactMatch,
}

impl JudgedBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            JudgedBy::Ai => "ai",
            JudgedBy::ExactMatch => "exact-match",
        }
    }
}

impl std::fmt::Display for JudgedBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verdict as returned by an AI judge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeVerdict {
    pub verdict: bool,
    pub remark: String,
}

impl JudgeVerdict {
    pub fn new(verdict: bool, remark: impl Into<String>) -> Self {
        Self {
            verdict,
            remark: remark.into(),
        }
    }
}

/// Outcome of verifying one submitted answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub question_id: QuestionId,
    pub is_correct: bool,
    /// Present only when the AI judge produced the verdict
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judge_remark: Option<String>,
    pub judged_by: JudgedBy,
    pub expected_answer: String,
}

impl VerificationResult {
    /// Result carrying an AI judge verdict and its remark verbatim
    pub fn from_judge(question: &Question, judged: JudgeVerdict) -> Self {
        Self {
            question_id: question.id(),
            is_correct: judged.verdict,
            judge_remark: Some(judged.remark),
            judged_by: JudgedBy::Ai,
            expected_answer: question.expected_answer().to_string(),
        }
    }

    /// Result of the exact-match fallback
    pub fn from_exact_match(question: &Question, is_correct: bool) -> Self {
        Self {
            question_id: question.id(),
            is_correct,
            judge_remark: None,
            judged_by: JudgedBy::ExactMatch,
            expected_answer: question.expected_answer().to_string(),
        }
    }
}
