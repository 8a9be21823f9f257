//! Console output formatter for verification results

use colored::Colorize;
use trivia_domain::{JudgedBy, Question, VerificationResult};

/// Formats verdicts and questions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a verdict for a human reader
    pub fn format(result: &VerificationResult) -> String {
        let mut output = String::new();

        let verdict = if result.is_correct {
            "CORRECT".green().bold()
        } else {
            "INCORRECT".red().bold()
        };
        output.push_str(&format!(
            "{} {}\n",
            format!("Question {}:", result.question_id).cyan().bold(),
            verdict
        ));

        if let Some(remark) = result.judge_remark.as_deref().map(str::trim)
            && !remark.is_empty()
        {
            output.push_str(&format!("{}\n", Self::indent(remark, "  ")));
        }

        if !result.is_correct {
            output.push_str(&format!(
                "{} {}\n",
                "Expected:".bold(),
                result.expected_answer
            ));
        }

        output.push_str(&format!("{}\n", Self::judged_by_label(result.judged_by).dimmed()));

        output
    }

    /// Format as JSON
    pub fn format_json(result: &VerificationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a question for the player (the answer is not shown)
    pub fn format_question(question: &Question) -> String {
        let mut output = format!("{}\n", format!("Question {}", question.id()).cyan().bold());
        if let Some(round) = question.round() {
            output.push_str(&format!("{} {}\n", "Round:".bold(), round));
        }
        if let Some(category) = question.category() {
            output.push_str(&format!("{} {}\n", "Category:".bold(), category));
        }
        if let Some(value) = question.value() {
            output.push_str(&format!("{} {}\n", "Value:".bold(), value));
        }
        output.push_str(&format!("{}\n", question.prompt_text()));
        output
    }

    /// One line per question: id, round, value and category
    pub fn format_listing<'a>(questions: impl IntoIterator<Item = &'a Question>) -> String {
        let mut output = String::new();
        for question in questions {
            output.push_str(&format!(
                "{:>8}  {:<18}  {:>6}  {}\n",
                question.id(),
                question.round().unwrap_or("-"),
                question.value().unwrap_or("-"),
                question.category().unwrap_or("-")
            ));
        }
        output
    }

    fn judged_by_label(judged_by: JudgedBy) -> &'static str {
        match judged_by {
            JudgedBy::Ai => "(judged by AI)",
            JudgedBy::ExactMatch => "(judged by exact match)",
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
