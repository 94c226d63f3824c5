//! Formatting helpers for prompt sections.

/// Markdown fence delimiter.
pub const FENCE: &str = "```";

/// Wrap `code` in a fenced block tagged with `language`.
///
/// The code is inserted verbatim. Fences inside `code` are not escaped.
pub fn format_code_block(language: &str, code: &str) -> String {
    let mut block = String::with_capacity(code.len() + language.len() + 8);
    block.push_str(FENCE);
    block.push_str(language);
    block.push('\n');
    block.push_str(code);
    if !code.ends_with('\n') {
        block.push('\n');
    }
    block.push_str(FENCE);
    block
}

/// Whether the text contains a fence delimiter of its own.
pub fn contains_fence(code: &str) -> bool {
    code.contains(FENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_code_block() {
        assert_eq!(
            format_code_block("c", "int x;"),
            "```c\nint x;\n```"
        );
        // no doubled newline when the source already ends with one
        assert_eq!(
            format_code_block("c", "int x;\n"),
            "```c\nint x;\n```"
        );
    }

    #[test]
    fn test_contains_fence() {
        assert!(contains_fence("/* ``` */"));
        assert!(!contains_fence("int main(){}"));
    }
}
