//! PDF document reading.
//!
//! The extraction core only ever sees one flattened string per document;
//! this module is the collaborator that produces it, joining page texts
//! with a separator. Document-level failures (unreadable, encrypted,
//! empty) surface here and only here.

mod reader;

pub use reader::PdfReader;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF reading implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract the flattened text of the whole document.
    fn extract_text(&self) -> Result<String>;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;
}
