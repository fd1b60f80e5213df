//! Field request/result types shared by both matching modes.

use serde::{Deserialize, Serialize};

/// A data point the caller wants extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRequest {
    /// Field name, echoed back unchanged in the result.
    pub name: String,

    /// Free-text description (used by proximity matching only).
    #[serde(default)]
    pub description: String,
}

impl FieldRequest {
    /// A request with no description.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
        }
    }

    /// A request with a description.
    pub fn described(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Parse the `name=description` form used on the command line.
    pub fn parse_spec(spec: &str) -> Self {
        match spec.split_once('=') {
            Some((name, description)) => Self::described(name.trim(), description.trim()),
            None => Self::named(spec.trim()),
        }
    }
}

/// Extracted value for one requested field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldResult {
    /// Name of the requested field.
    pub name: String,

    /// Extracted value (empty when nothing matched).
    pub value: String,

    /// Heuristic confidence in `[0.0, 0.95]`, absent when not modeled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl FieldResult {
    /// A result without a confidence score.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            confidence: None,
        }
    }

    /// Attach a confidence score.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Empty result for a field that matched nothing.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, String::new())
    }

    /// Whether a value was found.
    pub fn is_found(&self) -> bool {
        !self.value.is_empty()
    }
}

/// Which matcher resolves fields, and with it which error policy applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Keyword classification plus regex strategies. PDF failures are errors.
    #[default]
    Pattern,
    /// Sentence scoring by keyword overlap. PDF failures degrade to empty text.
    Proximity,
}

impl std::fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionMode::Pattern => write!(f, "pattern"),
            ExtractionMode::Proximity => write!(f, "proximity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_spec() {
        assert_eq!(FieldRequest::parse_spec("total"), FieldRequest::named("total"));
        assert_eq!(
            FieldRequest::parse_spec("invoice_total = Grand total including tax"),
            FieldRequest::described("invoice_total", "Grand total including tax")
        );
    }

    #[test]
    fn test_result_serialization_skips_missing_confidence() {
        let json = serde_json::to_value(FieldResult::new("client", "Acme Corp")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "client", "value": "Acme Corp"}));

        let json = serde_json::to_value(FieldResult::empty("x").with_confidence(0.0)).unwrap();
        assert_eq!(json, serde_json::json!({"name": "x", "value": "", "confidence": 0.0}));
    }

    #[test]
    fn test_request_description_defaults_to_empty() {
        let req: FieldRequest = serde_json::from_str(r#"{"name": "total"}"#).unwrap();
        assert_eq!(req.description, "");
    }
}
