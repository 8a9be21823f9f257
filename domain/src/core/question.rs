//! Question entity

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifier of a question in the catalog (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A trivia question with its canonical answer (Entity)
///
/// Owned by the catalog. The verifier only reads it: `prompt_text` and
/// `category` feed the judge prompt, `expected_answer` is what the
/// submission is graded against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    prompt_text: String,
    expected_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    /// Game round the clue was played in, e.g. "Jeopardy!"
    #[serde(skip_serializing_if = "Option::is_none")]
    round: Option<String>,
    /// Board value as printed, e.g. "$200"
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl Question {
    /// Create a new question
    ///
    /// # Panics
    /// Panics if the prompt text is empty or only whitespace
    pub fn new(
        id: impl Into<QuestionId>,
        prompt_text: impl Into<String>,
        expected_answer: impl Into<String>,
    ) -> Self {
        match Self::try_new(id, prompt_text, expected_answer) {
            Ok(q) => q,
            Err(e) => panic!("{}", e),
        }
    }

    /// Try to create a new question, rejecting an empty prompt text
    ///
    /// The expected answer is not validated: an empty answer is a legal,
    /// if useless, catalog entry.
    pub fn try_new(
        id: impl Into<QuestionId>,
        prompt_text: impl Into<String>,
        expected_answer: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let prompt_text = prompt_text.into();
        if prompt_text.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(format!(
                "question {} has empty text",
                id
            )));
        }
        Ok(Self {
            id,
            prompt_text,
            expected_answer: expected_answer.into(),
            category: None,
            round: None,
            value: None,
        })
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category.into());
        self
    }

    pub fn with_round(mut self, round: impl Into<String>) -> Self {
        self.round = non_blank(round.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = non_blank(value.into());
        self
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    pub fn expected_answer(&self) -> &str {
        &self.expected_answer
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn round(&self) -> Option<&str> {
        self.round.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the question was played in the given round and value slot.
    ///
    /// `None` leaves that side unconstrained. Comparison is exact, so
    /// "$200" and "200" are different slots.
    pub fn is_in_slot(&self, round: Option<&str>, value: Option<&str>) -> bool {
        round.is_none_or(|r| self.round() == Some(r))
            && value.is_none_or(|v| self.value() == Some(v))
    }
}

fn non_blank(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prompt_text)
    }
}
