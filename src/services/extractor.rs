use lopdf::Document;
use thiserror::Error;
use tracing::{debug, info};

/// Failure while parsing or reading a document. One undifferentiated kind:
/// malformed structure, unsupported features and I/O problems all end up
/// here, carrying the library's diagnostic message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ExtractionError {
    message: String,
}

impl From<lopdf::Error> for ExtractionError {
    fn from(err: lopdf::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// The outcome of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Per-page text joined with a single newline, page 1 first.
    pub text: String,
    pub pages: usize,
}

/// A document-to-text capability. The service ships one implementation
/// backed by `lopdf`; anything that can turn PDF bytes into an ordered
/// sequence of page texts can stand in for it.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &[u8]) -> Result<Extraction, ExtractionError>;
}

/// Text extractor backed by `lopdf`. Parses the document in memory and
/// pulls each page's text in document order; no pre-validation beyond what
/// the library itself performs.
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn is_available(&self) -> bool {
        true
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, document: &[u8]) -> Result<Extraction, ExtractionError> {
        let doc = Document::load_mem(document)?;
        let pages = doc.get_pages();

        debug!(pages = pages.len(), "PDF parsed, extracting page text");

        let mut segments = Vec::with_capacity(pages.len());
        for &number in pages.keys() {
            let mut text = doc.extract_text(&[number])?;
            // lopdf terminates every page with a page-break newline; strip
            // it so the join below owns the separators. A page with no text
            // layer contributes an empty segment, not an error.
            if text.ends_with('\n') {
                text.pop();
            }
            segments.push(text);
        }

        let extraction = Extraction {
            pages: segments.len(),
            text: segments.join("\n"),
        };

        info!(
            pages = extraction.pages,
            characters = extraction.text.len(),
            "Text extraction completed"
        );

        Ok(extraction)
    }
}
