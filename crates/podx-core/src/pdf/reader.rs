//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, warn};

use super::{PdfProcessor, Result};
use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// PDF text reader.
///
/// Reads page text with lopdf and joins the pages with the configured
/// separator; falls back to pdf-extract's whole-document pass when the
/// page-by-page route produces nothing (some generators emit content
/// streams lopdf's extractor cannot decode).
pub struct PdfReader {
    document: Option<Document>,
    raw_data: Vec<u8>,
    config: PdfConfig,
}

impl PdfReader {
    /// Create a new reader with default configuration.
    pub fn new() -> Self {
        Self::with_config(PdfConfig::default())
    }

    /// Create a new reader with the given configuration.
    pub fn with_config(config: PdfConfig) -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            config,
        }
    }

    fn document(&self) -> Result<&Document> {
        self.document
            .as_ref()
            .ok_or_else(|| PdfError::Parse("no document loaded".to_string()))
    }

    /// Number of pages to read, honoring the `max_pages` limit.
    fn effective_page_count(&self) -> u32 {
        let count = self.page_count();
        if self.config.max_pages == 0 {
            count
        } else {
            count.min(self.config.max_pages as u32)
        }
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfReader {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let document =
            Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if document.is_encrypted() {
            return Err(PdfError::Encrypted);
        }
        if document.get_pages().is_empty() {
            return Err(PdfError::NoPages);
        }

        debug!("loaded PDF with {} pages", document.get_pages().len());

        self.raw_data = data.to_vec();
        self.document = Some(document);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map_or(0, |doc| doc.get_pages().len() as u32)
    }

    fn extract_text(&self) -> Result<String> {
        self.document()?;

        let mut page_texts = Vec::new();
        for page in 1..=self.effective_page_count() {
            match self.extract_page_text(page) {
                Ok(text) => page_texts.push(text),
                Err(e) => {
                    warn!("failed to extract text from page {page}: {e}");
                    page_texts.push(String::new());
                }
            }
        }

        let text = page_texts.join(&self.config.page_separator);
        if text.trim().len() >= self.config.min_text_length {
            return Ok(text);
        }

        debug!("page-by-page extraction came up empty, trying whole-document pass");
        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    fn extract_page_text(&self, page: u32) -> Result<String> {
        let doc = self.document()?;

        if page == 0 || page > self.page_count() {
            return Err(PdfError::InvalidPage(page));
        }

        doc.extract_text(&[page])
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}
