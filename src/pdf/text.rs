//! PDF text layer extraction using MuPDF
//!
//! The listing pipeline needs positioned text runs, not rendered pages.
//! MuPDF's structured text API gives per-line bounding boxes; each line
//! becomes one fragment for row clustering.

use mupdf::{Document, TextPageOptions};
use thiserror::Error;

use crate::listing::{PageText, TextFragment};

/// Text extraction errors
#[derive(Error, Debug)]
pub enum PdfTextError {
    #[error("Failed to load PDF: {0}")]
    Load(String),
    #[error("MuPDF error: {0}")]
    MuPdf(String),
}

impl From<mupdf::Error> for PdfTextError {
    fn from(e: mupdf::Error) -> Self {
        PdfTextError::MuPdf(e.to_string())
    }
}

/// Read every page's positioned text fragments from an in-memory PDF.
///
/// Structured text y grows downward from the page top; fragments are
/// flipped into text space (larger y = higher on the page) so downstream
/// clustering can sort top-to-bottom by descending y. Fragments with only
/// whitespace are skipped. A document with no extractable text yields
/// pages with empty fragment lists, not an error.
pub fn read_document_pages(data: &[u8]) -> Result<Vec<PageText>, PdfTextError> {
    let doc = Document::from_bytes(data, "application/pdf")
        .map_err(|e| PdfTextError::Load(e.to_string()))?;
    let page_count = doc.page_count()? as usize;

    let mut pages = Vec::with_capacity(page_count);
    let mut total_fragments = 0usize;

    for index in 0..page_count {
        let page = doc.load_page(index as i32)?;
        let bounds = page.bounds()?;
        let page_height = bounds.y1 - bounds.y0;

        let text_page = page.to_text_page(TextPageOptions::empty())?;
        let mut fragments = Vec::new();

        for block in text_page.blocks() {
            for line in block.lines() {
                let text: String = line.chars().filter_map(|c| c.char()).collect();
                if text.trim().is_empty() {
                    continue;
                }

                let rect = line.bounds();
                let mid_y = (rect.y0 + rect.y1) / 2.0;
                fragments.push(TextFragment::new(rect.x0, page_height - mid_y, text));
            }
        }

        total_fragments += fragments.len();
        pages.push(PageText { fragments });
    }

    tracing::debug!(
        pages = page_count,
        fragments = total_fragments,
        "Extracted text layer"
    );

    Ok(pages)
}
