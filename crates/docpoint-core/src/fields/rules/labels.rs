//! Generic labeled-value extraction.

use regex::Regex;
use tracing::warn;

use super::FieldExtractor;
use super::patterns::{first_line, label_pattern};

/// Extracts the value following a literal label, e.g. `Invoice Number: INV-1`.
///
/// The label is matched case-insensitively with regex metacharacters
/// escaped. The captured value runs to the end of the line the match lands
/// on; whitespace after the label may carry the match onto the next line.
pub struct LabelExtractor {
    pattern: Option<Regex>,
}

impl LabelExtractor {
    pub fn new(label: &str) -> Self {
        let pattern = match label_pattern(label) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!("Cannot build label pattern for {:?}: {}", label, e);
                None
            }
        };
        Self { pattern }
    }
}

impl FieldExtractor for LabelExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = self.pattern.as_ref()?.captures(text)?;
        Some(first_line(&caps[1]).to_string())
    }
}

/// Value following `label` in `text`, or an empty string.
pub fn extract_by_label(text: &str, label: &str) -> String {
    LabelExtractor::new(label).extract(text).unwrap_or_default()
}
