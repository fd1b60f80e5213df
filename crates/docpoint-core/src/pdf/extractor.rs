//! PDF text extraction using lopdf and pdf-extract.

use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;

/// PDF text-layer extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

/// Text from a single PDF page.
#[derive(Debug, Clone)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text from this page, trailing whitespace removed.
    pub text: String,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Extract the text of every page in page order.
    ///
    /// A page whose text cannot be decoded yields an empty `text` rather
    /// than failing the whole document.
    pub fn extract_pages(&self) -> Result<Vec<PdfPage>> {
        let doc = self
            .document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("No document loaded".to_string()))?;

        let mut page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();

        let pages = page_numbers
            .into_iter()
            .map(|number| {
                let text = match doc.extract_text(&[number]) {
                    Ok(text) => text.trim_end().to_string(),
                    Err(e) => {
                        trace!("No text layer on page {}: {}", number, e);
                        String::new()
                    }
                };
                PdfPage { number, text }
            })
            .collect();

        Ok(pages)
    }

    /// Whole-document extraction with pdf-extract, used when lopdf finds no
    /// text on any page.
    ///
    /// pdf-extract panics on some documents lopdf accepts (e.g. a `Type0`
    /// font without `DescendantFonts`); a panic is reported as
    /// [`PdfError::TextExtraction`].
    fn extract_text_fallback(&self) -> Result<String> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(&self.raw_data)
        }));

        match outcome {
            Ok(Ok(text)) => Ok(text.trim().to_string()),
            Ok(Err(e)) => {
                debug!("pdf-extract fallback failed: {}", e);
                Err(PdfError::TextExtraction(e.to_string()))
            }
            Err(_) => {
                warn!("pdf-extract panicked while reading the document");
                Err(PdfError::TextExtraction(
                    "text extractor panicked on this document".to_string(),
                ))
            }
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn extract_text(&self) -> Result<String> {
        let pages = self.extract_pages()?;

        let text = pages
            .iter()
            .filter(|page| !page.text.is_empty())
            .map(|page| page.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        if !text.is_empty() {
            debug!("Extracted {} chars from {} pages", text.len(), pages.len());
            return Ok(text);
        }

        debug!("lopdf found no text on {} pages, trying pdf-extract", pages.len());
        self.extract_text_fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extractor_new() {
        let extractor = PdfExtractor::new();
        assert!(extractor.document.is_none());
        assert_eq!(extractor.page_count(), 0);
    }

    #[test]
    fn test_load_rejects_non_pdf() {
        let mut extractor = PdfExtractor::new();
        let err = extractor.load(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[test]
    fn test_extract_without_load() {
        let extractor = PdfExtractor::new();
        assert!(matches!(extractor.extract_text(), Err(PdfError::Parse(_))));
    }
}
