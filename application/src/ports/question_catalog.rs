//! Question Catalog port
//!
//! Read-only access to the question bank.

use trivia_domain::{Question, QuestionId};

/// Source of questions and their expected answers
///
/// Resolution must be deterministic for a given id within a process
/// lifetime. How the catalog is backed is the adapter's business.
pub trait QuestionCatalog: Send + Sync {
    /// Look up a question, `None` if the id is unknown
    fn resolve(&self, id: QuestionId) -> Option<Question>;
}
