//! Amount extraction.

use super::patterns::AMOUNT_PATTERNS;
use super::{FieldExtractor, find_first};

/// Amount field extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        find_first(&AMOUNT_PATTERNS, text)
    }
}

/// First amount in `text`, or an empty string.
pub fn extract_amount(text: &str) -> String {
    AmountExtractor::new().extract(text).unwrap_or_default()
}
