//! Organization name extraction.

use tracing::debug;

use super::FieldExtractor;
use super::patterns::{ORGANIZATION_LABEL, first_line};
use crate::fields::recognizer::Recognizer;

/// Default number of characters handed to the recognizer.
pub const DEFAULT_RECOGNIZER_CHAR_LIMIT: usize = 100_000;

/// Organization field extractor.
///
/// Labeled lines (`Bill To: ...`, `Vendor - ...`) are preferred. Only when
/// none exist is the recognizer consulted, on a bounded prefix of the text.
pub struct OrganizationExtractor {
    recognizer: Recognizer,
    char_limit: usize,
}

impl OrganizationExtractor {
    pub fn new(recognizer: Recognizer) -> Self {
        Self {
            recognizer,
            char_limit: DEFAULT_RECOGNIZER_CHAR_LIMIT,
        }
    }

    /// Set the number of characters handed to the recognizer.
    pub fn with_char_limit(mut self, char_limit: usize) -> Self {
        self.char_limit = char_limit;
        self
    }

    /// Values of organization labels in order of appearance.
    pub fn labeled(&self, text: &str) -> Vec<String> {
        ORGANIZATION_LABEL
            .captures_iter(text)
            .map(|caps| first_line(&caps[1]).to_string())
            .filter(|value| !value.is_empty())
            .collect()
    }

    /// Labeled values if there are any, otherwise what the recognizer finds.
    pub fn candidates(&self, text: &str) -> Vec<String> {
        let labeled = self.labeled(text);
        if !labeled.is_empty() {
            return labeled;
        }
        self.recognized(text)
    }

    fn recognized(&self, text: &str) -> Vec<String> {
        let prefix = char_prefix(text, self.char_limit);
        match self.recognizer.organizations(prefix) {
            Some(found) => {
                debug!("Recognizer found {} organizations in {} chars", found.len(), prefix.len());
                found
                    .into_iter()
                    .map(|org| org.trim().to_string())
                    .filter(|org| !org.is_empty())
                    .collect()
            }
            None => Vec::new(),
        }
    }
}

impl FieldExtractor for OrganizationExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.candidates(text).into_iter().next()
    }
}

/// The first `limit` characters of `text`.
fn char_prefix(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
