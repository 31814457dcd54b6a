//! Heuristic content-type classification.
//!
//! An ordered list of keyword rules is checked first, then a date pattern,
//! then an email pattern. The first match wins, so a financial document
//! that also mentions a date is still classified as financial.

use regex::Regex;
use std::sync::LazyLock;

/// Heuristic single-label classification of a document's purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    FinancialDocument,
    Letter,
    Recipe,
    Article,
    Menu,
    DocumentWithDates,
    DocumentWithEmails,
    GeneralText,
}

impl ContentType {
    /// Human-readable label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::FinancialDocument => "Financial Document/Invoice",
            ContentType::Letter => "Letter/Correspondence",
            ContentType::Recipe => "Recipe",
            ContentType::Article => "Article/Document",
            ContentType::Menu => "Menu",
            ContentType::DocumentWithDates => "Document with Dates",
            ContentType::DocumentWithEmails => "Document with Email Addresses",
            ContentType::GeneralText => "General Text Document",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keyword rules in priority order. Matching is substring containment
/// against the lowercased text, so earlier rules shadow later ones.
static KEYWORD_RULES: &[(ContentType, &[&str])] = &[
    (
        ContentType::FinancialDocument,
        &["invoice", "bill", "amount", "total", "payment"],
    ),
    (
        ContentType::Letter,
        &["dear", "sincerely", "regards", "letter"],
    ),
    (
        ContentType::Recipe,
        &["recipe", "ingredients", "instructions", "cooking"],
    ),
    (
        ContentType::Article,
        &["article", "paragraph", "section", "chapter"],
    ),
    (ContentType::Menu, &["menu", "price", "restaurant", "food"]),
];

// Both patterns are deliberately loose (3-digit years match, the email TLD
// class contains a literal '|'). They are kept as-is because rule precedence
// is observable behavior.
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").unwrap());

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap());

/// Assign a content-type label to a document.
///
/// Total and deterministic: every input maps to exactly one label.
pub fn classify(text: &str) -> ContentType {
    let text_lower = text.to_lowercase();

    for (content_type, keywords) in KEYWORD_RULES {
        if keywords.iter().any(|kw| text_lower.contains(kw)) {
            return *content_type;
        }
    }

    if DATE_PATTERN.is_match(text) {
        return ContentType::DocumentWithDates;
    }

    if EMAIL_PATTERN.is_match(text) {
        return ContentType::DocumentWithEmails;
    }

    ContentType::GeneralText
}
