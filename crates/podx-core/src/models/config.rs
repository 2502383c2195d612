//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the podx pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PodxConfig {
    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Extraction configuration.
    pub extraction: ExtractionConfig,
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Separator inserted between page texts when flattening a document.
    pub page_separator: String,

    /// Maximum pages to process (0 = unlimited).
    pub max_pages: usize,

    /// Minimum extracted text length to consider the PDF readable.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            page_separator: "\n".to_string(),
            max_pages: 0,
            min_text_length: 1,
        }
    }
}

/// Extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Run the advisory arithmetic check (quantity x unit price vs row
    /// total, item sum vs grand total). Never alters extraction output.
    pub check_totals: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            check_totals: false,
        }
    }
}

impl PodxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
