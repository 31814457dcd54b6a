//! Plain-text report rendering.

use super::{ContentType, TextStats};

/// Preview length in characters.
const PREVIEW_CHARS: usize = 200;

/// Render the analysis report for a document.
///
/// Empty input produces a fixed message and nothing else; otherwise the
/// report lists the content type, statistics, ranked common words, a
/// 200-character preview, and the full text under a separator.
pub fn build_report(text: &str, stats: &TextStats, content_type: ContentType) -> String {
    if text.is_empty() {
        return "No text could be extracted from the file.".to_string();
    }

    let top_words = stats
        .top_words
        .iter()
        .map(|(word, count)| format!("- {}: {}", word, count))
        .collect::<Vec<_>>()
        .join("\n");

    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    let ellipsis = if text.chars().count() > PREVIEW_CHARS {
        "..."
    } else {
        ""
    };

    format!(
        "\nTEXT ANALYSIS REPORT\n\
         ===================\n\n\
         Content Type: {content_type}\n\n\
         Statistics:\n\
         - Word Count: {word_count}\n\
         - Character Count: {char_count}\n\
         - Line Count: {line_count}\n\n\
         Most Common Words:\n\
         {top_words}\n\n\
         Content Preview (first 200 characters):\n\
         {preview}{ellipsis}\n\n\
         Full Extracted Text:\n\
         {separator}\n\
         {text}\n",
        word_count = stats.word_count,
        char_count = stats.char_count,
        line_count = stats.line_count,
        separator = "-".repeat(50),
    )
}
