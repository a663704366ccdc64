/// The two character escape sequence (backslash followed by `n`) the
/// history service leaves in stored message bodies.
const ESCAPED_NEWLINE: &str = "\\n";

/// Converts escaped newline literals into real line breaks. Missing
/// text is treated as empty. Other escape sequences are left as-is.
pub fn normalize(text: Option<&str>) -> String {
    match text {
        Some(s) if !s.is_empty() => s.replace(ESCAPED_NEWLINE, "\n"),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_missing_text() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
    }

    #[test]
    fn test_normalize_replaces_escaped_newlines() {
        assert_eq!(normalize(Some("line 1\\nline 2")), "line 1\nline 2");
        assert_eq!(normalize(Some("\\n\\n")), "\n\n");
        assert!(!normalize(Some("a\\nb\\nc\\n")).contains(ESCAPED_NEWLINE));
    }

    #[test]
    fn test_normalize_leaves_other_text_alone() {
        let plain = "no escapes here\nreal newline\tand a tab";
        assert_eq!(normalize(Some(plain)), plain);

        // Only `\n` is converted
        let escapes = r#"tab \t quote \" backslash \\"#;
        assert_eq!(normalize(Some(escapes)), escapes);
    }
}
