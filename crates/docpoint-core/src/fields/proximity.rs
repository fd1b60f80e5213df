//! Proximity-based field matching.
//!
//! Each field's name and description are reduced to a keyword set. Every
//! sentence of the document is scored by the share of keywords it contains,
//! with a small bonus for sentences carrying digits, and the best sentence
//! supplies the value.

use std::collections::BTreeSet;

use tracing::debug;

use super::rules::patterns::{KEYWORD_SEPARATOR, LABELED_VALUE, SENTENCE_BREAK};
use crate::models::field::{FieldRequest, FieldResult};

/// Description words that carry no signal.
const STOPWORDS: &[&str] = &["the", "and", "for", "this", "that", "with", "from"];

/// Bonus for sentences containing a digit.
const DIGIT_BONUS: f64 = 0.1;

/// Added to the best score to form the confidence.
const CONFIDENCE_OFFSET: f64 = 0.3;

/// Confidence is never reported above this.
pub const MAX_CONFIDENCE: f64 = 0.95;

/// Default number of characters kept from an unlabeled best sentence.
pub const DEFAULT_SNIPPET_CHARS: usize = 200;

/// Keyword-overlap matcher producing a value and a confidence per field.
pub struct ProximityMatcher {
    snippet_chars: usize,
}

/// Best sentence found for a field.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceMatch<'a> {
    pub sentence: &'a str,
    pub score: f64,
}

impl ProximityMatcher {
    pub fn new() -> Self {
        Self {
            snippet_chars: DEFAULT_SNIPPET_CHARS,
        }
    }

    /// Set the number of characters kept from an unlabeled best sentence.
    pub fn with_snippet_chars(mut self, snippet_chars: usize) -> Self {
        self.snippet_chars = snippet_chars;
        self
    }

    /// Keywords for a field: name tokens longer than two characters plus
    /// description tokens longer than three that are not stopwords.
    pub fn keywords(name: &str, description: &str) -> BTreeSet<String> {
        let name_tokens = tokens(name).filter(|t| t.chars().count() > 2);
        let description_tokens = tokens(description)
            .filter(|t| t.chars().count() > 3)
            .filter(|t| !STOPWORDS.contains(&t.as_str()));

        name_tokens.chain(description_tokens).collect()
    }

    /// Score of one sentence against a keyword set, `None` when no keyword
    /// occurs in it.
    pub fn score(sentence: &str, keywords: &BTreeSet<String>) -> Option<f64> {
        let lower = sentence.to_lowercase();
        let matched = keywords.iter().filter(|kw| lower.contains(kw.as_str())).count();
        if matched == 0 {
            return None;
        }

        let mut score = matched as f64 / keywords.len().max(1) as f64;
        if sentence.chars().any(|c| c.is_ascii_digit()) {
            score = (score + DIGIT_BONUS).min(1.0);
        }
        Some(score)
    }

    /// Highest-scoring sentence; the earliest wins a tie.
    pub fn best_sentence<'a>(
        sentences: &[&'a str],
        keywords: &BTreeSet<String>,
    ) -> Option<SentenceMatch<'a>> {
        let mut best: Option<SentenceMatch<'a>> = None;

        for sentence in sentences {
            let Some(score) = Self::score(sentence, keywords) else {
                continue;
            };
            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(SentenceMatch { sentence, score });
            }
        }

        best
    }

    /// Value carried by a sentence: what follows its first `:` or `-`, or
    /// else its leading characters.
    pub fn value_of(&self, sentence: &str) -> String {
        if let Some(caps) = LABELED_VALUE.captures(sentence) {
            let value = caps[1].trim();
            if !value.is_empty() {
                return value.to_string();
            }
        }

        let snippet: String = sentence.chars().take(self.snippet_chars).collect();
        snippet.trim().to_string()
    }

    /// Result for a single field.
    pub fn match_field(&self, text: &str, field: &FieldRequest) -> FieldResult {
        let sentences = split_sentences(text);
        self.match_in_sentences(&sentences, field)
    }

    /// One result per request, in request order.
    pub fn match_fields(&self, text: &str, fields: &[FieldRequest]) -> Vec<FieldResult> {
        let sentences = split_sentences(text);
        debug!("Split text into {} sentences", sentences.len());

        fields
            .iter()
            .map(|field| self.match_in_sentences(&sentences, field))
            .collect()
    }

    fn match_in_sentences(&self, sentences: &[&str], field: &FieldRequest) -> FieldResult {
        let keywords = Self::keywords(&field.name, &field.description);

        match Self::best_sentence(sentences, &keywords) {
            Some(best) => {
                let confidence = round2((best.score + CONFIDENCE_OFFSET).min(MAX_CONFIDENCE));
                debug!(
                    "Field {:?}: best score {:.2} from {} keywords",
                    field.name,
                    best.score,
                    keywords.len()
                );
                FieldResult::new(field.name.clone(), self.value_of(best.sentence))
                    .with_confidence(confidence)
            }
            None => {
                debug!("Field {:?}: no sentence matched {} keywords", field.name, keywords.len());
                FieldResult::empty(field.name.clone()).with_confidence(0.0)
            }
        }
    }
}

impl Default for ProximityMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Sentences of `text`, split on runs of periods and newlines.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    KEYWORD_SEPARATOR
        .split(text)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// Two decimal places, rounding the exact binary value (ties to even).
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
