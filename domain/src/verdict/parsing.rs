//! Judge response parsing.
//!
//! Extracts a structured verdict from the free-form text an AI judge
//! returns. Pure domain logic: no I/O, just JSON extraction.
//!
//! The judge is asked for `{"is_correct": <bool>, "explanation": "<text>"}`.
//! Models wrap that object in prose or markdown fences often enough that the
//! first `{` to the last `}` is taken as the payload.
//!
//! | `is_correct` value | Verdict |
//! |--------------------|---------|
//! | `true`, `"true"`, `"yes"`, `"correct"` | correct |
//! | `false`, `"false"`, `"no"`, `"incorrect"` | incorrect |
//! | anything else, or missing | [`DomainError::AmbiguousVerdict`] |

use crate::core::error::DomainError;
use crate::verdict::value_objects::JudgeVerdict;
use serde_json::Value;

/// Parse a judge response into a [`JudgeVerdict`].
///
/// Never guesses: a response that is not clearly affirmative or negative is
/// an error, and the caller is expected to fall back.
///
/// # Examples
///
/// ```
/// use trivia_domain::verdict::parsing::parse_judge_response;
///
/// let v = parse_judge_response(r#"{"is_correct": true, "explanation": "Same person"}"#).unwrap();
/// assert!(v.verdict);
/// assert_eq!(v.remark, "Same person");
///
/// assert!(parse_judge_response(r#"{"is_correct": "maybe"}"#).is_err());
/// assert!(parse_judge_response("Looks right to me").is_err());
/// ```
pub fn parse_judge_response(response: &str) -> Result<JudgeVerdict, DomainError> {
    let object = extract_json_object(response)?;

    let verdict = match object.get("is_correct") {
        Some(value) => parse_verdict_value(value)?,
        None => {
            return Err(DomainError::AmbiguousVerdict(
                "missing is_correct".to_string(),
            ));
        }
    };

    let remark = match object.get("explanation") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(DomainError::InvalidExplanation),
    };

    Ok(JudgeVerdict::new(verdict, remark))
}

fn extract_json_object(response: &str) -> Result<serde_json::Map<String, Value>, DomainError> {
    let Some(start) = response.find('{') else {
        return Err(DomainError::NoJudgeObject);
    };
    let Some(end) = response.rfind('}').filter(|end| *end > start) else {
        return Err(DomainError::NoJudgeObject);
    };

    match serde_json::from_str::<Value>(&response[start..=end]) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DomainError::NoJudgeObject),
        Err(e) => Err(DomainError::InvalidJudgeJson(e.to_string())),
    }
}

fn parse_verdict_value(value: &Value) -> Result<bool, DomainError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "correct" => Ok(true),
            "false" | "no" | "incorrect" => Ok(false),
            _ => Err(DomainError::AmbiguousVerdict(value.to_string())),
        },
        other => Err(DomainError::AmbiguousVerdict(other.to_string())),
    }
}
