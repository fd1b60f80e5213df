//! Core library for extracting data points from PDF documents.
//!
//! This crate provides:
//! - PDF text-layer extraction (page by page, via lopdf with a pdf-extract fallback)
//! - Pattern-based field matching (dates, amounts, organizations, labeled values)
//! - Proximity-based field matching with a heuristic confidence score
//! - Configuration shared by the server and CLI

pub mod error;
pub mod fields;
pub mod models;
pub mod pdf;

pub use error::{DocpointError, PdfError, Result};
pub use fields::{
    DocumentExtractor, EntityRecognizer, FieldClassifier, FieldKind, PatternMatcher,
    ProximityMatcher, Recognizer, SuffixRecognizer,
};
pub use models::config::DocpointConfig;
pub use models::field::{ExtractionMode, FieldRequest, FieldResult};
pub use pdf::{PdfExtractor, PdfProcessor};
