//! Shared application state.

use std::sync::Arc;

use docpoint_core::{DocpointConfig, DocumentExtractor, Recognizer};

/// State handed to every handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<DocumentExtractor>,
}

impl AppState {
    pub fn new(extractor: DocumentExtractor) -> Self {
        Self {
            extractor: Arc::new(extractor),
        }
    }

    /// Load the recognizer described by `config` and build the extractor.
    pub fn from_config(config: &DocpointConfig) -> Self {
        let recognizer = Recognizer::load(&config.recognizer);
        tracing::info!(
            "Organization recognizer: {}",
            if recognizer.is_available() { "available" } else { "unavailable" }
        );
        Self::new(DocumentExtractor::from_config(config, recognizer))
    }
}
