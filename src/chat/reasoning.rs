//! Splits an assistant message body into the reasoning the model
//! emitted inside `<think>...</think>` and the final answer after it.
//!
//! Both extractions read the original content independently so the
//! order they are called in doesn't matter.
use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize;

pub const THINK_START: &str = "<think>";
pub const THINK_END: &str = "</think>";

// Non-greedy so only the first block is captured. `s` lets `.` match
// newlines since reasoning is almost always multi-line.
static THINK_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "(?s){}(.*?){}",
        regex::escape(THINK_START),
        regex::escape(THINK_END)
    ))
    .expect("think block pattern is valid")
});

/// Returns the text between the first `<think>` and the next
/// `</think>`, or an empty string when there is no matched pair.
pub fn extract_reasoning(content: &str) -> String {
    THINK_BLOCK_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Returns the final answer: everything after the first `</think>`,
/// or the whole content when no closing marker exists. Unterminated
/// reasoning is passed through untouched. The result is newline
/// normalized.
pub fn extract_final(content: &str) -> String {
    match content.find(THINK_END) {
        Some(idx) => normalize(Some(&content[idx + THINK_END.len()..])),
        None => normalize(Some(content)),
    }
}
