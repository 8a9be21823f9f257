//! In-memory question catalog
//!
//! Holds the whole question bank in a map keyed by id. The bank can be
//! loaded from a JSON array of records:
//!
//! ```json
//! [
//!   {"id": 4680, "round": "Jeopardy!", "value": "$400", "category": "ASTRONOMERS",
//!    "question": "…", "answer": "Copernicus"}
//! ]
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use trivia_application::QuestionCatalog;
use trivia_domain::{DomainError, Question, QuestionId};

/// Errors that can occur while loading a question bank
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    #[error("Failed to read question bank {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse question bank: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate question id {0}")]
    DuplicateId(QuestionId),

    #[error(transparent)]
    InvalidQuestion(#[from] DomainError),
}

/// One entry of the JSON question bank
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    id: i64,
    question: String,
    answer: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    round: Option<String>,
    #[serde(default)]
    value: Option<String>,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = DomainError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let mut question = Question::try_new(record.id, record.question, record.answer)?;
        if let Some(category) = record.category {
            question = question.with_category(category);
        }
        if let Some(round) = record.round {
            question = question.with_round(round);
        }
        if let Some(value) = record.value {
            question = question.with_value(value);
        }
        Ok(question)
    }
}

/// Catalog backed by an in-process map
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionCatalog {
    questions: BTreeMap<QuestionId, Question>,
}

impl InMemoryQuestionCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(questions: impl IntoIterator<Item = Question>) -> Result<Self, CatalogLoadError> {
        let mut map = BTreeMap::new();
        for question in questions {
            let id = question.id();
            if map.insert(id, question).is_some() {
                return Err(CatalogLoadError::DuplicateId(id));
            }
        }
        Ok(Self { questions: map })
    }

    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogLoadError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
        let questions = records
            .into_iter()
            .map(Question::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogLoadError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(
            "Loaded {} questions from {}, last id: {}",
            catalog.len(),
            path.display(),
            catalog
                .ids()
                .last()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "N/A".to_string())
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All question ids in ascending order
    pub fn ids(&self) -> Vec<QuestionId> {
        self.questions.keys().copied().collect()
    }

    /// All questions in id order
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }

    /// Questions played in the given round and value slot, in id order
    pub fn in_slot<'a>(
        &'a self,
        round: Option<&'a str>,
        value: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Question> {
        self.questions
            .values()
            .filter(move |q| q.is_in_slot(round, value))
    }
}

impl QuestionCatalog for InMemoryQuestionCatalog {
    fn resolve(&self, id: QuestionId) -> Option<Question> {
        self.questions.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BANK: &str = r#"[
  {"id": 4680, "category": "ASTRONOMERS", "question": "He put the Sun at the center", "answer": "Copernicus"},
  {"id": 2, "question": "The capital of France", "answer": "Paris", "round": "Jeopardy!", "value": "$200"},
  {"id": 9, "question": "The capital of Italy", "answer": "Rome", "round": "Double Jeopardy!", "value": "$200"}
]"#;

    #[test]
    fn test_from_json_resolves_known_ids() {
        let catalog = InMemoryQuestionCatalog::from_json(BANK).unwrap();
        assert_eq!(catalog.len(), 3);

        let q = catalog.resolve(QuestionId::new(4680)).unwrap();
        assert_eq!(q.expected_answer(), "Copernicus");
        assert_eq!(q.category(), Some("ASTRONOMERS"));

        assert!(q.round().is_none());

        let q = catalog.resolve(QuestionId::new(2)).unwrap();
        assert!(q.category().is_none());
        assert_eq!(q.round(), Some("Jeopardy!"));
        assert_eq!(q.value(), Some("$200"));
    }

    #[test]
    fn test_in_slot_filters_by_round_and_value() {
        let catalog = InMemoryQuestionCatalog::from_json(BANK).unwrap();
        let ids = |round: Option<&str>, value: Option<&str>| -> Vec<i64> {
            catalog
                .in_slot(round, value)
                .map(|q| q.id().value())
                .collect()
        };

        assert_eq!(ids(None, None), vec![2, 9, 4680]);
        assert_eq!(ids(None, Some("$200")), vec![2, 9]);
        assert_eq!(ids(Some("Jeopardy!"), Some("$200")), vec![2]);
        assert_eq!(ids(Some("Double Jeopardy!"), None), vec![9]);
        assert!(ids(Some("Final Jeopardy!"), None).is_empty());
        assert!(ids(Some("Jeopardy!"), Some("200")).is_empty());
    }

    #[test]
    fn test_unknown_id_resolves_to_none() {
        let catalog = InMemoryQuestionCatalog::from_json(BANK).unwrap();
        assert!(catalog.resolve(QuestionId::new(99999)).is_none());
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let catalog = InMemoryQuestionCatalog::from_json(BANK).unwrap();
        let first = catalog.resolve(QuestionId::new(4680));
        let second = catalog.resolve(QuestionId::new(4680));
        assert_eq!(first, second);
    }

    #[test]
    fn test_ids_sorted() {
        let catalog = InMemoryQuestionCatalog::from_json(BANK).unwrap();
        assert_eq!(
            catalog.ids(),
            vec![QuestionId::new(2), QuestionId::new(9), QuestionId::new(4680)]
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
  {"id": 7, "question": "a", "answer": "x"},
  {"id": 7, "question": "b", "answer": "y"}
]"#;
        let err = InMemoryQuestionCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogLoadError::DuplicateId(id) if id == QuestionId::new(7)));
    }

    #[test]
    fn test_empty_question_text_rejected() {
        let json = r#"[{"id": 1, "question": " ", "answer": "x"}]"#;
        assert!(matches!(
            InMemoryQuestionCatalog::from_json(json),
            Err(CatalogLoadError::InvalidQuestion(_))
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            InMemoryQuestionCatalog::from_json(r#"[{"id": "x"}]"#),
            Err(CatalogLoadError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BANK.as_bytes()).unwrap();

        let catalog = InMemoryQuestionCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = InMemoryQuestionCatalog::load(Path::new("/nonexistent/questions.json"))
            .unwrap_err();
        assert!(matches!(err, CatalogLoadError::Io { .. }));
    }
}
