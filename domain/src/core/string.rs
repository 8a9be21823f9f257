//! String utilities for the domain layer.

/// Single-line preview of a text for log output (UTF-8 safe)
///
/// Collapses runs of whitespace (including newlines) into one space and
/// cuts the result to at most `max_chars` characters, appending `...`
/// when anything was dropped.
pub fn preview(s: &str, max_chars: usize) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let kept: String = collapsed.chars().take(max_chars).collect();
    format!("{}...", kept.trim_end())
}
