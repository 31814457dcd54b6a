//! Lexical statistics: counts and word frequencies over normalized text.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Number of ranked entries kept in the frequency table.
const TOP_WORDS: usize = 10;

/// Words excluded from frequency analysis.
static STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "this", "that", "these", "those",
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z]+").unwrap());

/// Basic statistics over a document's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStats {
    /// Whitespace-delimited token count.
    pub word_count: usize,
    /// Character count (chars, not bytes).
    pub char_count: usize,
    /// Number of newline-separated segments (1 for empty input).
    pub line_count: usize,
    /// Most frequent content words, count descending, ties by first
    /// occurrence in the text. At most [`TOP_WORDS`] entries.
    pub top_words: Vec<(String, usize)>,
}

impl TextStats {
    /// Degenerate statistics for an empty document (one line, nothing else).
    pub fn empty() -> Self {
        Self {
            word_count: 0,
            char_count: 0,
            line_count: 1,
            top_words: Vec::new(),
        }
    }
}

/// Compute statistics and the ranked word-frequency table for a text.
///
/// Frequency tokens are maximal ASCII-letter runs, lowercased. Stop words
/// and tokens of length <= 2 are excluded from the table (but still count
/// toward `word_count`).
pub fn analyze(text: &str) -> TextStats {
    let word_count = text.split_whitespace().count();
    let char_count = text.chars().count();
    let line_count = text.split('\n').count();

    // Tally in first-seen order so a stable sort preserves tie ordering.
    let lowered = text.to_lowercase();
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in WORD_PATTERN.find_iter(&lowered) {
        let word = token.as_str();
        if word.len() <= 2 || STOP_WORDS.contains(&word) {
            continue;
        }
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word.to_string(), counts.len());
                counts.push((word.to_string(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_WORDS);

    TextStats {
        word_count,
        char_count,
        line_count,
        top_words: counts,
    }
}
