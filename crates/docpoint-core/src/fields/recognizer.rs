//! Organization recognizer used as a fallback by organization matching.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::{DocpointError, Result};
use crate::models::config::RecognizerConfig;

/// Something that can find organization-like spans in text.
pub trait EntityRecognizer: Send + Sync {
    /// Organization entities in the order they occur.
    fn organizations(&self, text: &str) -> Vec<String>;
}

/// A recognizer that was loaded at startup, or the record that it was not.
#[derive(Clone, Default)]
pub enum Recognizer {
    Available(Arc<dyn EntityRecognizer>),
    #[default]
    Unavailable,
}

impl Recognizer {
    /// Wrap a recognizer implementation.
    pub fn new(recognizer: impl EntityRecognizer + 'static) -> Self {
        Recognizer::Available(Arc::new(recognizer))
    }

    /// Build the recognizer described by `config`.
    ///
    /// Load failures are logged and recorded as [`Recognizer::Unavailable`].
    pub fn load(config: &RecognizerConfig) -> Self {
        if !config.enabled {
            info!("Organization recognizer disabled by configuration");
            return Recognizer::Unavailable;
        }

        let recognizer = match &config.lexicon {
            Some(path) => SuffixRecognizer::from_lexicon(path),
            None => Ok(SuffixRecognizer::new()),
        };

        match recognizer {
            Ok(recognizer) => {
                debug!("Organization recognizer loaded with {} suffixes", recognizer.suffix_count);
                Recognizer::new(recognizer)
            }
            Err(e) => {
                warn!("Organization recognizer unavailable: {}", e);
                Recognizer::Unavailable
            }
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Recognizer::Available(_))
    }

    /// Organizations found by the recognizer, `None` when it is unavailable.
    pub fn organizations(&self, text: &str) -> Option<Vec<String>> {
        match self {
            Recognizer::Available(recognizer) => Some(recognizer.organizations(text)),
            Recognizer::Unavailable => None,
        }
    }
}

impl fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recognizer::Available(_) => write!(f, "Recognizer::Available"),
            Recognizer::Unavailable => write!(f, "Recognizer::Unavailable"),
        }
    }
}

/// Suffixes that end a company name.
const DEFAULT_SUFFIXES: &[&str] = &[
    "Incorporated", "Inc", "Corporation", "Corp", "Company", "Co", "LLC", "LLP", "LP",
    "Limited", "Ltd", "PLC", "plc", "GmbH", "AG", "SA", "S.A", "NV", "BV", "Pty",
    "Group", "Holdings", "Partners", "Associates",
];

/// Tags runs of one to five capitalized words followed by a corporate suffix,
/// e.g. `Globex Corporation` or `Acme Widgets, Inc`.
pub struct SuffixRecognizer {
    pattern: Regex,
    suffix_count: usize,
}

impl SuffixRecognizer {
    /// Recognizer with the built-in suffix list.
    pub fn new() -> Self {
        Self::with_suffixes(DEFAULT_SUFFIXES.iter().map(|s| s.to_string()))
            .expect("built-in suffix pattern is valid")
    }

    /// Recognizer with the built-in suffixes plus every non-empty,
    /// non-comment line of the lexicon file.
    pub fn from_lexicon(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DocpointError::Recognizer(format!("cannot read lexicon {}: {}", path.display(), e))
        })?;

        let extra = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string);

        Self::with_suffixes(DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).chain(extra))
    }

    fn with_suffixes(suffixes: impl Iterator<Item = String>) -> Result<Self> {
        let mut suffixes: Vec<String> = suffixes.collect();
        // Longest first so "Corporation" wins over "Corp"
        suffixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        suffixes.dedup();

        let alternation = suffixes
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(
            r"\b((?:[A-Z][\w&'\-]*,?[ \t]+){{1,5}}(?:{}))\b",
            alternation
        ))
        .map_err(|e| DocpointError::Recognizer(e.to_string()))?;

        Ok(Self {
            pattern,
            suffix_count: suffixes.len(),
        })
    }
}

impl Default for SuffixRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for SuffixRecognizer {
    fn organizations(&self, text: &str) -> Vec<String> {
        self.pattern
            .captures_iter(text)
            .map(|caps| caps[1].trim().to_string())
            .collect()
    }
}
