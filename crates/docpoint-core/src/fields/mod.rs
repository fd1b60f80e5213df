//! Field extraction module.

mod classifier;
mod pattern;
mod proximity;
mod recognizer;
pub mod rules;

pub use classifier::{FieldClassifier, FieldKind};
pub use pattern::PatternMatcher;
pub use proximity::{MAX_CONFIDENCE, ProximityMatcher, SentenceMatch, split_sentences};
pub use recognizer::{EntityRecognizer, Recognizer, SuffixRecognizer};

use std::time::Instant;

use tracing::{info, warn};

use crate::error::Result;
use crate::models::config::DocpointConfig;
use crate::models::field::{ExtractionMode, FieldRequest, FieldResult};
use crate::pdf;

/// Runs text extraction once per document and a matcher once per field.
///
/// The two modes differ in how a PDF that cannot be read is handled:
/// pattern mode returns the error, proximity mode continues with empty
/// text so every field resolves to an empty value.
pub struct DocumentExtractor {
    pattern: PatternMatcher,
    proximity: ProximityMatcher,
}

impl DocumentExtractor {
    /// Create an extractor with default settings.
    pub fn new(recognizer: Recognizer) -> Self {
        Self {
            pattern: PatternMatcher::new(recognizer),
            proximity: ProximityMatcher::new(),
        }
    }

    /// Create an extractor using the extraction settings of `config`.
    pub fn from_config(config: &DocpointConfig, recognizer: Recognizer) -> Self {
        Self {
            pattern: PatternMatcher::new(recognizer)
                .with_recognizer_char_limit(config.extraction.recognizer_char_limit),
            proximity: ProximityMatcher::new()
                .with_snippet_chars(config.extraction.snippet_chars),
        }
    }

    /// Extract `fields` from a PDF using `mode`.
    pub fn extract(
        &self,
        mode: ExtractionMode,
        pdf_bytes: &[u8],
        fields: &[FieldRequest],
    ) -> Result<Vec<FieldResult>> {
        match mode {
            ExtractionMode::Pattern => self.extract_pattern(pdf_bytes, fields),
            ExtractionMode::Proximity => Ok(self.extract_proximity(pdf_bytes, fields)),
        }
    }

    /// Pattern mode. Fails if the PDF cannot be read.
    pub fn extract_pattern(
        &self,
        pdf_bytes: &[u8],
        fields: &[FieldRequest],
    ) -> Result<Vec<FieldResult>> {
        let start = Instant::now();
        let text = pdf::extract_text(pdf_bytes)?;
        let results = self.pattern.match_fields(&text, fields);

        info!(
            "Pattern extraction: {} fields, {} found, {} chars in {:?}",
            results.len(),
            results.iter().filter(|r| r.is_found()).count(),
            text.len(),
            start.elapsed()
        );
        Ok(results)
    }

    /// Proximity mode. A PDF that cannot be read is treated as empty text.
    pub fn extract_proximity(&self, pdf_bytes: &[u8], fields: &[FieldRequest]) -> Vec<FieldResult> {
        let start = Instant::now();
        let text = pdf::extract_text(pdf_bytes).unwrap_or_else(|e| {
            warn!("Continuing with empty text, PDF could not be read: {}", e);
            String::new()
        });
        let results = self.proximity.match_fields(&text, fields);

        info!(
            "Proximity extraction: {} fields, {} found, {} chars in {:?}",
            results.len(),
            results.iter().filter(|r| r.is_found()).count(),
            text.len(),
            start.elapsed()
        );
        results
    }

    /// Match fields against already extracted text.
    pub fn match_text(
        &self,
        mode: ExtractionMode,
        text: &str,
        fields: &[FieldRequest],
    ) -> Vec<FieldResult> {
        match mode {
            ExtractionMode::Pattern => self.pattern.match_fields(text, fields),
            ExtractionMode::Proximity => self.proximity.match_fields(text, fields),
        }
    }
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new(Recognizer::new(SuffixRecognizer::new()))
    }
}
