//! Pattern-based field matching.

use tracing::debug;

use super::classifier::{FieldClassifier, FieldKind};
use super::recognizer::Recognizer;
use super::rules::{
    AmountExtractor, DateExtractor, FieldExtractor, LabelExtractor, OrganizationExtractor,
};
use crate::models::field::{FieldRequest, FieldResult};

/// Resolves each field by classifying its name and running the matching
/// rule extractor over the document text.
pub struct PatternMatcher {
    classifier: FieldClassifier,
    dates: DateExtractor,
    amounts: AmountExtractor,
    organizations: OrganizationExtractor,
}

impl PatternMatcher {
    pub fn new(recognizer: Recognizer) -> Self {
        Self {
            classifier: FieldClassifier::new(),
            dates: DateExtractor::new(),
            amounts: AmountExtractor::new(),
            organizations: OrganizationExtractor::new(recognizer),
        }
    }

    /// Set the number of characters handed to the organization recognizer.
    pub fn with_recognizer_char_limit(mut self, char_limit: usize) -> Self {
        self.organizations = self.organizations.with_char_limit(char_limit);
        self
    }

    /// Value for a single field name; empty when nothing matched.
    pub fn resolve(&self, text: &str, name: &str) -> String {
        let kind = self.classifier.classify(name);
        let value = match kind {
            FieldKind::Date => self.dates.extract(text),
            FieldKind::Amount => self.amounts.extract(text),
            FieldKind::Organization => self.organizations.extract(text),
            FieldKind::Label => LabelExtractor::new(name).extract(text),
        };

        debug!("Field {:?} classified as {:?} -> {:?}", name, kind, value);
        value.unwrap_or_default()
    }

    /// One result per request, in request order.
    pub fn match_fields(&self, text: &str, fields: &[FieldRequest]) -> Vec<FieldResult> {
        fields
            .iter()
            .map(|field| FieldResult::new(field.name.clone(), self.resolve(text, &field.name)))
            .collect()
    }
}
