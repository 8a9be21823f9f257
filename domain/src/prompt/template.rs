//! Prompt templates for answer judging

/// Templates for the prompt sent to the AI judge
pub struct JudgePromptTemplate;

impl JudgePromptTemplate {
    /// System prompt establishing the judge role
    pub fn judge_system() -> &'static str {
        r#"You are a trivia judge. You decide whether a player's answer to a trivia question is correct.
Trivia answers may differ in wording, abbreviations, spelling or format while still being essentially correct.
Be reasonable, but do not accept an answer that names a different person, place, thing or value.
Always reply with a single JSON object and nothing else."#
    }

    /// User prompt asking for a verdict on one answer
    pub fn judge_query(
        question: &str,
        expected_answer: &str,
        user_answer: &str,
        category: Option<&str>,
    ) -> String {
        let category_context = match category {
            Some(c) if !c.trim().is_empty() => format!(" from the category '{}'", c.trim()),
            _ => String::new(),
        };

        format!(
            r#"Given the following trivia question{}, evaluate if the user's answer is correct.

Question: {}
Correct Answer: {}
User's Answer: {}

Respond with a JSON object containing:
- "is_correct": boolean (true if the answer is correct or reasonably equivalent)
- "explanation": string (brief explanation of your judgment)

Example response:
{{"is_correct": true, "explanation": "The user's answer 'Paris, France' is correct, even though the exact answer was 'Paris'."}}"#,
            category_context, question, expected_answer, user_answer
        )
    }
}
