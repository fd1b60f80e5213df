//! Common regex patterns for data point extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date patterns, in the order they are tried
    pub static ref DATE_ISO: Regex = Regex::new(
        r"(?i)\b\d{4}-\d{2}-\d{2}\b"
    ).unwrap();

    pub static ref DATE_SLASH: Regex = Regex::new(
        r"(?i)\b\d{1,2}/\d{1,2}/\d{2,4}\b"
    ).unwrap();

    pub static ref DATE_MONTH_DAY_YEAR: Regex = Regex::new(
        r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b"
    ).unwrap();

    pub static ref DATE_DAY_MONTH_YEAR: Regex = Regex::new(
        r"(?i)\b\d{1,2}\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4}\b"
    ).unwrap();

    pub static ref DATE_DAY_MON_YEAR: Regex = Regex::new(
        r"(?i)\b\d{1,2}-(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)-\d{2,4}\b"
    ).unwrap();

    pub static ref DATE_PATTERNS: Vec<&'static Regex> = vec![
        &*DATE_ISO,
        &*DATE_SLASH,
        &*DATE_MONTH_DAY_YEAR,
        &*DATE_DAY_MONTH_YEAR,
        &*DATE_DAY_MON_YEAR,
    ];

    // Amount patterns ($1,234.56 then 1,234.56 USD)
    pub static ref AMOUNT_WITH_SYMBOL: Regex = Regex::new(
        r"[$€£¥]\s*\d{1,3}(?:,\d{3})*(?:\.\d{2})?"
    ).unwrap();

    pub static ref AMOUNT_WITH_CODE: Regex = Regex::new(
        r"\b\d{1,3}(?:,\d{3})*(?:\.\d{2})?\s*(?:USD|EUR|GBP|CAD|AUD)\b"
    ).unwrap();

    pub static ref AMOUNT_PATTERNS: Vec<&'static Regex> = vec![
        &*AMOUNT_WITH_SYMBOL,
        &*AMOUNT_WITH_CODE,
    ];

    // Labels that typically precede an organization name
    pub static ref ORGANIZATION_LABEL: Regex = Regex::new(
        r"(?i)(?:company|client|vendor|from|to|bill\s+to|sold\s+to|supplier|employer|organization|organisation)\s*[:\-]\s*(.+)"
    ).unwrap();

    // Field name keywords selecting a strategy
    pub static ref DATE_KEYWORD: Regex = Regex::new(
        r"\bdate\b"
    ).unwrap();

    pub static ref AMOUNT_KEYWORD: Regex = Regex::new(
        r"\b(?:amount|total|price|cost|sum|balance|due)\b"
    ).unwrap();

    pub static ref ORGANIZATION_KEYWORD: Regex = Regex::new(
        r"\b(?:company|client|vendor|supplier|organization|organisation)\b"
    ).unwrap();

    // Proximity matching
    pub static ref SENTENCE_BREAK: Regex = Regex::new(
        r"[.\n]+"
    ).unwrap();

    pub static ref KEYWORD_SEPARATOR: Regex = Regex::new(
        r"[\s_\-]+"
    ).unwrap();

    pub static ref LABELED_VALUE: Regex = Regex::new(
        r"[:\-]\s*(.+)"
    ).unwrap();
}

/// Build the generic `<label>[:|-] value` pattern for a field name.
pub fn label_pattern(label: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i){}\s*[:\-]?\s*(.+)", regex::escape(label)))
}

/// First line of a captured span, trimmed.
pub fn first_line(span: &str) -> &str {
    span.trim().lines().next().unwrap_or("").trim()
}
