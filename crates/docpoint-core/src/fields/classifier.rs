//! Field name classification.

use lazy_static::lazy_static;
use regex::Regex;

use super::rules::patterns::{AMOUNT_KEYWORD, DATE_KEYWORD, ORGANIZATION_KEYWORD};

/// Value shape a field name is resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Date,
    Amount,
    Organization,
    Label,
}

lazy_static! {
    /// Evaluated top to bottom, first match wins.
    static ref DEFAULT_RULES: Vec<(&'static Regex, FieldKind)> = vec![
        (&*DATE_KEYWORD, FieldKind::Date),
        (&*AMOUNT_KEYWORD, FieldKind::Amount),
        (&*ORGANIZATION_KEYWORD, FieldKind::Organization),
    ];
}

/// Maps field names to a [`FieldKind`] through an ordered rule table.
pub struct FieldClassifier {
    rules: &'static [(&'static Regex, FieldKind)],
}

impl FieldClassifier {
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.as_slice(),
        }
    }

    /// Classify `name`; anything no rule claims is a generic label.
    pub fn classify(&self, name: &str) -> FieldKind {
        let key = name.trim().to_lowercase();
        self.rules
            .iter()
            .find(|(predicate, _)| predicate.is_match(&key))
            .map(|(_, kind)| *kind)
            .unwrap_or(FieldKind::Label)
    }
}

impl Default for FieldClassifier {
    fn default() -> Self {
        Self::new()
    }
}
