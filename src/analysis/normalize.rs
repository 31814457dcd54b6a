//! Whitespace normalization for raw OCR output.

use regex::Regex;
use std::sync::LazyLock;

static NEWLINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());
static SPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());

/// Collapse whitespace noise in raw OCR output.
///
/// Any run of newlines becomes a single newline, any run of spaces becomes a
/// single space, and leading/trailing whitespace is trimmed. Total over all
/// inputs and idempotent.
pub fn normalize(text: &str) -> String {
    let text = NEWLINE_RUNS.replace_all(text, "\n");
    let text = SPACE_RUNS.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_newline_runs() {
        assert_eq!(normalize("a\n\n\nb"), "a\nb");
    }

    #[test]
    fn test_collapses_space_runs() {
        assert_eq!(normalize("a    b  c"), "a b c");
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize("  \n hello \n  "), "hello");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\n  "), "");
    }

    #[test]
    fn test_idempotent_and_never_grows() {
        let inputs = [
            "a  b\n\nc",
            "  leading",
            "trailing  ",
            "no change here",
            "\n\n\n",
            "mixed \n  runs\n\n of  stuff",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
            assert!(once.len() <= input.len());
            assert!(!once.contains("\n\n"));
            assert!(!once.contains("  "));
        }
    }
}
