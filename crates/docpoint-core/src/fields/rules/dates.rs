//! Date extraction.

use super::patterns::DATE_PATTERNS;
use super::{FieldExtractor, find_first};

/// Date field extractor.
///
/// Values are returned exactly as they appear in the document; no
/// normalization to a calendar date is attempted.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        find_first(&DATE_PATTERNS, text)
    }
}

/// First date in `text`, or an empty string.
pub fn extract_date(text: &str) -> String {
    DateExtractor::new().extract(text).unwrap_or_default()
}
