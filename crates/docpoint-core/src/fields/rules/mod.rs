//! Rule-based field extractors.

pub mod amounts;
pub mod dates;
pub mod labels;
pub mod organizations;
pub mod patterns;

pub use amounts::{AmountExtractor, extract_amount};
pub use dates::{DateExtractor, extract_date};
pub use labels::{LabelExtractor, extract_by_label};
pub use organizations::OrganizationExtractor;

use regex::Regex;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// First match of the first pattern that matches at all.
pub(crate) fn find_first(patterns: &[&Regex], text: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|pattern| pattern.find(text).map(|m| m.as_str().to_string()))
}
