//! Exact-match fallback rule.
//!
//! Both sides are trimmed and compared case-insensitively. Nothing else is
//! normalized: punctuation, articles and inner whitespace all count.

/// Normalize an answer for comparison: trim, then Unicode lowercase.
pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Whether `user_answer` matches `expected_answer` under the fallback rule.
///
/// Empty input is not special-cased: it matches only an expected answer
/// that is itself blank.
pub fn answers_match(expected_answer: &str, user_answer: &str) -> bool {
    normalize_answer(expected_answer) == normalize_answer(user_answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_surrounding_whitespace_ignored() {
        assert!(answers_match("Copernicus", "copernicus  "));
        assert!(answers_match("Copernicus", "\tCOPERNICUS\n"));
    }

    #[test]
    fn test_different_answer_rejected() {
        assert!(!answers_match("Copernicus", "Galileo"));
    }

    #[test]
    fn test_punctuation_and_articles_count() {
        assert!(!answers_match("Copernicus", "Copernicus."));
        assert!(!answers_match("The Beatles", "Beatles"));
    }

    #[test]
    fn test_inner_whitespace_counts() {
        assert!(!answers_match("New York", "New  York"));
    }

    #[test]
    fn test_empty_answer() {
        assert!(!answers_match("Copernicus", ""));
        assert!(answers_match("", "   "));
    }

    #[test]
    fn test_non_ascii_case_folding() {
        assert!(answers_match("Ångström", "ångström"));
    }
}
